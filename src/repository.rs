//! Data-access boundary whose responses feed an [`EntityMapper`].

use crate::{
    entity::{Entity, EntityFactory},
    error::Result,
    mapper::EntityMapper,
    record::Record,
};

pub trait Repository {
    /// Records returned by the last call.
    fn response(&self) -> &[Record];

    fn set_response(&mut self, response: Vec<Record>);

    /// The last response mapped to entities.
    fn entities_from_response(&mut self) -> Result<Vec<Box<dyn Entity>>>;

    fn is_response_status_success(&self) -> bool;
}

/// Repository that materializes its response as first-shape entities.
#[derive(Debug)]
pub struct MappedRepository<F> {
    mapper: EntityMapper<F>,
    response: Vec<Record>,
    success: bool,
}

impl<F: EntityFactory> MappedRepository<F> {
    pub fn new(mapper: EntityMapper<F>) -> Self {
        Self {
            mapper,
            response: Vec::new(),
            success: false,
        }
    }

    pub fn set_status(&mut self, success: bool) {
        self.success = success;
    }

    pub fn mapper(&self) -> &EntityMapper<F> {
        &self.mapper
    }
}

impl<F: EntityFactory> Repository for MappedRepository<F> {
    fn response(&self) -> &[Record] {
        &self.response
    }

    fn set_response(&mut self, response: Vec<Record>) {
        self.response = response;
    }

    fn entities_from_response(&mut self) -> Result<Vec<Box<dyn Entity>>> {
        self.mapper.set_records(self.response.clone());
        self.mapper.mapped_first_entities()
    }

    fn is_response_status_success(&self) -> bool {
        self.success
    }
}
