use serde::{Deserialize, Serialize};

use crate::{mapping::NameMap, projector::select_attributes, record::Record, request::Request};

/// Flat, one-way rename of a request's attributes for another service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestMapper {
    attributes: NameMap,
}

impl RequestMapper {
    pub fn new(attributes: NameMap) -> Self {
        Self { attributes }
    }

    pub fn attributes(&self) -> &NameMap {
        &self.attributes
    }

    /// Request attributes known to the mapper, under their mapped names.
    pub fn mapped_attributes(&self, request: &Request) -> Record {
        select_attributes(&self.attributes, request.data())
    }
}
