//! Mapper configuration files.
//!
//! A configuration declares the attribute dictionaries, the per-direction
//! rename tables, the request dictionary, and the entity shapes (symbolic name
//! to settable attributes) used by the command line. Files ending in `.json`
//! are read as JSON; everything else is YAML.
//!
//! ```yaml
//! forward:
//!   id: userId
//!   name: userName
//! rename:
//!   first_to_second:
//!     address:
//!       zip: postcode
//! request:
//!   q: query
//! entities:
//!   second:
//!     User: [userId, userName]
//! ```

use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    entity::{Entity, EntityCatalog, EntityRegistry, RecordEntity},
    mapper::EntityMapper,
    mapping::{MappingTable, NameMap},
    record::Direction,
    rename::RenameTable,
    request_mapper::RequestMapper,
};

/// Entity registered when a configuration declares none for a direction.
pub const DEFAULT_ENTITY_NAME: &str = "Record";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameConfig {
    #[serde(default, skip_serializing_if = "RenameTable::is_empty")]
    pub first_to_second: RenameTable,
    #[serde(default, skip_serializing_if = "RenameTable::is_empty")]
    pub second_to_first: RenameTable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityConfig {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub first: IndexMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub second: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapperConfig {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub forward: NameMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub reverse: NameMap,
    #[serde(default)]
    pub rename: RenameConfig,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub request: NameMap,
    #[serde(default)]
    pub entities: EntityConfig,
}

impl MapperConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Opening mapper config {path:?}"))?;
        let config = if is_json(path) {
            Self::from_json_str(&raw)
        } else {
            Self::from_yaml_str(&raw)
        }
        .with_context(|| format!("Parsing mapper config {path:?}"))?;
        debug!(
            "Loaded config with {} forward and {} reverse attribute(s)",
            config.forward.len(),
            config.reverse.len()
        );
        Ok(config)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn mapping_table(&self) -> MappingTable {
        MappingTable::new(self.forward.clone(), self.reverse.clone())
    }

    pub fn entity_catalog(&self) -> EntityCatalog {
        let table = self.mapping_table();
        let first = registry_for(&self.entities.first, table.reverse());
        let second = registry_for(&self.entities.second, table.forward());
        EntityCatalog::new(first, second)
    }

    pub fn entity_mapper(&self) -> EntityMapper<EntityCatalog> {
        let mut mapper = EntityMapper::with_table(self.entity_catalog(), self.mapping_table());
        mapper.set_renames(Direction::FirstToSecond, self.rename.first_to_second.clone());
        mapper.set_renames(Direction::SecondToFirst, self.rename.second_to_first.clone());
        mapper
    }

    pub fn request_mapper(&self) -> RequestMapper {
        RequestMapper::new(self.request.clone())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

// Without declared entities, a single `Record` entity accepts every name the
// dictionary maps to.
fn registry_for(declared: &IndexMap<String, Vec<String>>, dictionary: &NameMap) -> EntityRegistry {
    let mut registry = EntityRegistry::new();
    if declared.is_empty() {
        register(&mut registry, DEFAULT_ENTITY_NAME, dictionary.values().cloned());
    }
    for (name, attributes) in declared {
        register(&mut registry, name, attributes.iter().cloned());
    }
    registry
}

fn register(registry: &mut EntityRegistry, name: &str, attributes: impl Iterator<Item = String>) {
    let setters = Arc::new(RecordEntity::registry(attributes));
    let kind = name.to_string();
    registry.register(name, move || {
        Box::new(RecordEntity::new(kind.clone(), Arc::clone(&setters))) as Box<dyn Entity>
    });
}
