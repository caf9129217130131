//! Record model shared by the mappers.
//!
//! A [`Record`] is an insertion-ordered map of attribute names to pass-through
//! JSON values; nested records are object values. [`Direction`] selects which
//! half of a mapping or rename table applies, and [`Payload`] carries either
//! JSON text or an already decoded value into the hydration step.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::error::Result;

pub use serde_json::Value;

pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    FirstToSecond,
    SecondToFirst,
}

impl Direction {
    pub fn inverse(self) -> Self {
        match self {
            Direction::FirstToSecond => Direction::SecondToFirst,
            Direction::SecondToFirst => Direction::FirstToSecond,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::FirstToSecond => "first-to-second",
            Direction::SecondToFirst => "second-to-first",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw input accepted by [`hydrate`]: JSON text or a decoded value.
#[derive(Debug, Clone)]
pub enum Payload {
    Json(String),
    Value(Value),
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Json(value.to_string())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Json(value)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Value(value)
    }
}

impl From<Record> for Payload {
    fn from(value: Record) -> Self {
        Payload::Value(Value::Object(value))
    }
}

/// Decodes a payload into a value, parsing JSON text when needed.
pub fn hydrate(payload: impl Into<Payload>) -> Result<Value> {
    match payload.into() {
        Payload::Json(text) => Ok(serde_json::from_str(&text)?),
        Payload::Value(value) => Ok(value),
    }
}

/// Views a value as a record: objects as-is, arrays keyed by position,
/// anything else as an empty record.
pub fn into_record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| (idx.to_string(), item))
            .collect(),
        _ => Record::new(),
    }
}

/// Splits a value into a record list.
///
/// A list whose first element is an object is a record list (non-object
/// elements are skipped). Any other non-empty list is one record keyed by
/// position, and a single object is a one-record list.
pub fn records_from_value(value: Value) -> Vec<Record> {
    match value {
        Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect(),
        Value::Array(items) if !items.is_empty() => vec![into_record(Value::Array(items))],
        Value::Object(map) => vec![map],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_from_value_wraps_single_object() {
        let records = records_from_value(json!({"id": 1}));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], json!(1));
    }

    #[test]
    fn records_from_value_skips_scalar_elements() {
        let records = records_from_value(json!([{"id": 1}, 7, {"id": 2}]));
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"], json!(2));
    }

    #[test]
    fn list_of_scalars_is_one_positional_record() {
        let records = records_from_value(json!([["a"], 2]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["0"], json!(["a"]));
        assert_eq!(records[0]["1"], json!(2));
        assert!(records_from_value(json!([])).is_empty());
    }

    #[test]
    fn into_record_keys_arrays_by_position() {
        let record = into_record(json!(["a", "b"]));
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["0", "1"]);
        assert!(into_record(json!(3)).is_empty());
    }

    #[test]
    fn hydrate_rejects_malformed_json() {
        assert!(hydrate("{not json").is_err());
        assert_eq!(hydrate(r#"{"a":1}"#).unwrap(), json!({"a": 1}));
    }
}
