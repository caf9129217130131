//! Entity mapper facade.
//!
//! [`EntityMapper`] owns the attribute [`MappingTable`], one [`RenameTable`] per
//! direction, and a working list of records. Records are loaded with
//! [`EntityMapper::set_arrays`] (replace) or [`EntityMapper::set_array`]
//! (append, accepting existing entities), then projected onto entities built by
//! the mapper's [`EntityFactory`].

use log::debug;

use crate::{
    entity::{Entity, EntityFactory},
    error::Result,
    mapping::{MappingTable, NameMap},
    projector::{AttributeProjector, select_attributes},
    record::{Direction, Payload, Record, hydrate, records_from_value},
    rename::RenameTable,
};

/// Seed for [`EntityMapper::set_array`].
pub enum DataItem<'a> {
    Record(Record),
    Entity(&'a dyn Entity),
}

impl From<Record> for DataItem<'_> {
    fn from(record: Record) -> Self {
        DataItem::Record(record)
    }
}

impl<'a> From<&'a dyn Entity> for DataItem<'a> {
    fn from(entity: &'a dyn Entity) -> Self {
        DataItem::Entity(entity)
    }
}

impl<'a> From<&'a Box<dyn Entity>> for DataItem<'a> {
    fn from(entity: &'a Box<dyn Entity>) -> Self {
        DataItem::Entity(entity.as_ref())
    }
}

#[derive(Debug)]
pub struct EntityMapper<F> {
    table: MappingTable,
    first_to_second: RenameTable,
    second_to_first: RenameTable,
    data: Vec<Record>,
    factory: F,
}

impl<F: EntityFactory> EntityMapper<F> {
    pub fn new(factory: F, forward: NameMap, reverse: NameMap) -> Self {
        Self::with_table(factory, MappingTable::new(forward, reverse))
    }

    pub fn with_table(factory: F, table: MappingTable) -> Self {
        Self {
            table,
            first_to_second: RenameTable::default(),
            second_to_first: RenameTable::default(),
            data: Vec::new(),
            factory,
        }
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn set_forward_attributes(&mut self, forward: NameMap) {
        self.table.set_forward(forward);
    }

    pub fn set_reverse_attributes(&mut self, reverse: NameMap) {
        self.table.set_reverse(reverse);
    }

    pub fn set_renames(&mut self, direction: Direction, renames: RenameTable) {
        match direction {
            Direction::FirstToSecond => self.first_to_second = renames,
            Direction::SecondToFirst => self.second_to_first = renames,
        }
    }

    pub fn renames(&self, direction: Direction) -> &RenameTable {
        match direction {
            Direction::FirstToSecond => &self.first_to_second,
            Direction::SecondToFirst => &self.second_to_first,
        }
    }

    pub fn projector(&self, direction: Direction) -> AttributeProjector<'_> {
        AttributeProjector::new(&self.table, self.renames(direction), direction)
    }

    /// Replaces the working records with the hydrated payload.
    ///
    /// A list is taken as a record list when its first element is an object;
    /// a single object becomes one record.
    pub fn set_arrays(&mut self, payload: impl Into<Payload>) -> Result<()> {
        self.data = records_from_value(hydrate(payload)?);
        debug!("Loaded {} record(s)", self.data.len());
        Ok(())
    }

    pub fn set_records(&mut self, records: Vec<Record>) {
        self.data = records;
    }

    /// Appends records and entity snapshots to the working records.
    pub fn set_array<'a, I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Into<DataItem<'a>>,
    {
        for item in items {
            match item.into() {
                DataItem::Record(record) => self.data.push(record),
                DataItem::Entity(entity) => self.data.push(entity.attributes()),
            }
        }
    }

    pub fn data(&self) -> &[Record] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn map(&self, direction: Direction, entity_name: &str) -> Result<Vec<Box<dyn Entity>>> {
        self.projector(direction)
            .project_all(&self.data, || self.factory.create(direction, entity_name))
    }

    pub fn map_to_second(&self, entity_name: &str) -> Result<Vec<Box<dyn Entity>>> {
        self.map(Direction::FirstToSecond, entity_name)
    }

    pub fn map_to_first(&self, entity_name: &str) -> Result<Vec<Box<dyn Entity>>> {
        self.map(Direction::SecondToFirst, entity_name)
    }

    pub fn mapped_second_entities(&self) -> Result<Vec<Box<dyn Entity>>> {
        self.map_to_second(self.factory.second_entity_name())
    }

    pub fn mapped_first_entities(&self) -> Result<Vec<Box<dyn Entity>>> {
        self.map_to_first(self.factory.first_entity_name())
    }

    /// Renames the attributes of the first working record through the forward
    /// dictionary. Later records are not examined.
    pub fn attributes_of_first_record(&self) -> Record {
        self.data
            .first()
            .map(|record| select_attributes(self.table.forward(), record))
            .unwrap_or_default()
    }

    pub fn lookup_second_name(&self, attribute: &str) -> &str {
        self.table
            .mapped_name_or_empty(Direction::FirstToSecond, attribute)
    }

    pub fn lookup_first_name(&self, attribute: &str) -> &str {
        self.table
            .mapped_name_or_empty(Direction::SecondToFirst, attribute)
    }
}
