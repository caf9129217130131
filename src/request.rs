//! Request container handed to use cases and request mappers.
//!
//! A [`Request`] carries a `data` record and an `extra` record (ordering,
//! limits and similar options). Both accept JSON text or decoded values.

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    record::{Payload, Record, Value, hydrate, into_record},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    data: Record,
    #[serde(default)]
    extra: Record,
}

impl Request {
    pub fn new(data: impl Into<Payload>, extra: impl Into<Payload>) -> Result<Self> {
        Ok(Self {
            data: into_record(hydrate(data)?),
            extra: into_record(hydrate(extra)?),
        })
    }

    pub fn from_data(data: Record) -> Self {
        Self {
            data,
            extra: Record::new(),
        }
    }

    pub fn add_data(&mut self, data: impl Into<Payload>) -> Result<()> {
        append(&mut self.data, hydrate(data)?);
        Ok(())
    }

    pub fn set_data_by_key(&mut self, key: impl Into<String>, data: impl Into<Payload>) -> Result<()> {
        self.data.insert(key.into(), hydrate(data)?);
        Ok(())
    }

    pub fn add_extra(&mut self, extra: impl Into<Payload>) -> Result<()> {
        append(&mut self.extra, hydrate(extra)?);
        Ok(())
    }

    pub fn set_extra_by_key(
        &mut self,
        key: impl Into<String>,
        extra: impl Into<Payload>,
    ) -> Result<()> {
        self.extra.insert(key.into(), hydrate(extra)?);
        Ok(())
    }

    pub fn data_count(&self) -> usize {
        self.data.len()
    }

    pub fn extra_count(&self) -> usize {
        self.extra.len()
    }

    /// Value stored under `key`, or an empty object when absent.
    pub fn data_by_key(&self, key: &str) -> Value {
        self.data
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::Object(Record::new()))
    }

    pub fn extra_by_key(&self, key: &str) -> Value {
        self.extra
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::Object(Record::new()))
    }

    pub fn set_data(&mut self, data: impl Into<Payload>) -> Result<()> {
        self.data = into_record(hydrate(data)?);
        Ok(())
    }

    pub fn set_extra(&mut self, extra: impl Into<Payload>) -> Result<()> {
        self.extra = into_record(hydrate(extra)?);
        Ok(())
    }

    pub fn data(&self) -> &Record {
        &self.data
    }

    pub fn extra(&self) -> &Record {
        &self.extra
    }
}

// New entries go under the next free position, one past the largest numeric key.
fn append(record: &mut Record, value: Value) {
    let next = record
        .keys()
        .filter_map(|key| key.parse::<usize>().ok())
        .max()
        .map_or(0, |max| max + 1);
    record.insert(next.to_string(), value);
}
