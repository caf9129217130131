//! Attribute projection from records onto entities.
//!
//! An [`AttributeProjector`] binds a [`MappingTable`], the rename table for one
//! direction, and the direction itself. Projection is best effort: unmapped
//! attributes and missing setters are skipped, and a record that sets nothing
//! yields no entity.

use std::borrow::Cow;

use log::debug;

use crate::{
    entity::Entity,
    error::Result,
    mapping::{MappingTable, NameMap},
    record::{Direction, Record},
    rename::RenameTable,
};

#[derive(Debug, Clone, Copy)]
pub struct AttributeProjector<'a> {
    table: &'a MappingTable,
    renames: &'a RenameTable,
    direction: Direction,
}

impl<'a> AttributeProjector<'a> {
    pub fn new(table: &'a MappingTable, renames: &'a RenameTable, direction: Direction) -> Self {
        Self {
            table,
            renames,
            direction,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn renamed<'r>(&self, record: &'r Record) -> Cow<'r, Record> {
        if self.renames.is_empty() {
            Cow::Borrowed(record)
        } else {
            Cow::Owned(self.renames.rename_keys(record))
        }
    }

    /// Writes every mapped attribute of `record` onto `target`.
    ///
    /// Returns `true` when at least one setter ran.
    pub fn apply<E>(&self, record: &Record, target: &mut E) -> bool
    where
        E: Entity + ?Sized,
    {
        let record = self.renamed(record);
        let mut applied = false;
        for (attribute, value) in record.iter() {
            let Some(target_name) = self
                .table
                .mapped_name(self.direction, attribute)
                .filter(|name| !name.is_empty())
            else {
                continue;
            };
            if target.set_attribute(target_name, value.clone()) {
                applied = true;
            } else {
                debug!("No setter for '{target_name}' (from '{attribute}'), skipping");
            }
        }
        applied
    }

    pub fn project(&self, record: &Record, mut target: Box<dyn Entity>) -> Option<Box<dyn Entity>> {
        self.apply(record, target.as_mut()).then_some(target)
    }

    /// Projects each record onto a fresh target from `create`, keeping only the
    /// populated ones in input order.
    pub fn project_all<F>(&self, records: &[Record], mut create: F) -> Result<Vec<Box<dyn Entity>>>
    where
        F: FnMut() -> Result<Box<dyn Entity>>,
    {
        let mut entities = Vec::with_capacity(records.len());
        for record in records {
            if let Some(entity) = self.project(record, create()?) {
                entities.push(entity);
            }
        }
        let dropped = records.len() - entities.len();
        if dropped > 0 {
            debug!(
                "Dropped {dropped} of {} record(s) with no mapped attributes ({})",
                records.len(),
                self.direction
            );
        }
        Ok(entities)
    }
}

/// Keeps the attributes of `record` named in `dictionary`, under their mapped
/// names. Attributes absent from the dictionary are dropped.
pub fn select_attributes(dictionary: &NameMap, record: &Record) -> Record {
    record
        .iter()
        .filter_map(|(attribute, value)| {
            dictionary
                .get(attribute)
                .map(|target| (target.clone(), value.clone()))
        })
        .collect()
}
