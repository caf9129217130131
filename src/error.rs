use thiserror::Error;

/// Errors raised by the mapping collaborators.
///
/// Mapping, renaming and projection never fail on their own; these variants
/// come from entity factories and payload hydration.
#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Entity '{name}' is not registered")]
    EntityNotFound { name: String },

    #[error("Invalid JSON payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl MapperError {
    pub fn entity_not_found(name: impl Into<String>) -> Self {
        Self::EntityNotFound { name: name.into() }
    }
}

pub type Result<T, E = MapperError> = std::result::Result<T, E>;
