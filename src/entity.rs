//! Entity capabilities and factories.
//!
//! Targets of a projection implement [`Entity`]. Instead of probing for setter
//! methods at runtime, each entity type keeps a [`SetterRegistry`] built once,
//! mapping attribute names to setter functions. Entities are created by
//! symbolic name through an [`EntityFactory`]; [`EntityCatalog`] is the stock
//! implementation backed by one [`EntityRegistry`] per direction.

use std::{any::Any, collections::HashMap, fmt, sync::Arc};

use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    error::{MapperError, Result},
    record::{Direction, Record, Value},
};

pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub trait Entity: AsAny + fmt::Debug {
    /// Applies `value` through the setter registered for `name`.
    ///
    /// Returns `false` when the entity has no such setter.
    fn set_attribute(&mut self, name: &str, value: Value) -> bool;

    /// Current attributes as a flat record.
    fn attributes(&self) -> Record;
}

impl dyn Entity {
    pub fn downcast_ref<T: Entity + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

pub type Setter<E> = Box<dyn Fn(&mut E, Value) + Send + Sync>;

pub struct SetterRegistry<E> {
    setters: HashMap<String, Setter<E>>,
}

impl<E> Default for SetterRegistry<E> {
    fn default() -> Self {
        Self {
            setters: HashMap::new(),
        }
    }
}

impl<E> SetterRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<F>(mut self, name: impl Into<String>, setter: F) -> Self
    where
        F: Fn(&mut E, Value) + Send + Sync + 'static,
    {
        self.setters.insert(name.into(), Box::new(setter));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.setters.contains_key(name)
    }

    pub fn apply(&self, entity: &mut E, name: &str, value: Value) -> bool {
        match self.setters.get(name) {
            Some(setter) => {
                setter(entity, value);
                true
            }
            None => false,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.setters.keys().map(String::as_str)
    }
}

impl<E> fmt::Debug for SetterRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetterRegistry")
            .field("setters", &self.names().sorted().collect::<Vec<_>>())
            .finish()
    }
}

/// Entity whose settable attributes are declared at runtime, used for
/// configuration-driven mappings.
#[derive(Debug, Clone)]
pub struct RecordEntity {
    kind: String,
    setters: Arc<SetterRegistry<RecordEntity>>,
    attributes: Record,
}

impl RecordEntity {
    pub fn new(kind: impl Into<String>, setters: Arc<SetterRegistry<RecordEntity>>) -> Self {
        Self {
            kind: kind.into(),
            setters,
            attributes: Record::new(),
        }
    }

    /// Builds a registry accepting each of `names` as a plain attribute.
    pub fn registry<I, S>(names: I) -> SetterRegistry<RecordEntity>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(SetterRegistry::new(), |registry, name| {
            let name = name.into();
            let key = name.clone();
            registry.with(name, move |entity: &mut RecordEntity, value| {
                entity.attributes.insert(key.clone(), value);
            })
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn into_record(self) -> Record {
        self.attributes
    }
}

impl Entity for RecordEntity {
    fn set_attribute(&mut self, name: &str, value: Value) -> bool {
        let setters = Arc::clone(&self.setters);
        setters.apply(self, name, value)
    }

    fn attributes(&self) -> Record {
        self.attributes.clone()
    }
}

pub type Constructor = Box<dyn Fn() -> Box<dyn Entity> + Send + Sync>;

/// Symbolic name to constructor lookup for one entity shape.
#[derive(Default)]
pub struct EntityRegistry {
    constructors: IndexMap<String, Constructor>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F)
    where
        F: Fn() -> Box<dyn Entity> + Send + Sync + 'static,
    {
        self.constructors.insert(name.into(), Box::new(constructor));
    }

    pub fn with<F>(mut self, name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> Box<dyn Entity> + Send + Sync + 'static,
    {
        self.register(name, constructor);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Entity>> {
        self.constructors
            .get(name)
            .map(|constructor| constructor())
            .ok_or_else(|| MapperError::entity_not_found(name))
    }
}

impl fmt::Debug for EntityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityRegistry")
            .field("entities", &self.names().join(", "))
            .finish()
    }
}

/// Creates the entities a mapper projects into.
pub trait EntityFactory {
    fn first_entity(&self, name: &str) -> Result<Box<dyn Entity>>;

    fn second_entity(&self, name: &str) -> Result<Box<dyn Entity>>;

    /// Entity built by the eager first-shape accessor.
    fn first_entity_name(&self) -> &str;

    /// Entity built by the eager second-shape accessor.
    fn second_entity_name(&self) -> &str;

    /// Creates the target entity for records travelling in `direction`.
    fn create(&self, direction: Direction, name: &str) -> Result<Box<dyn Entity>> {
        match direction {
            Direction::FirstToSecond => self.second_entity(name),
            Direction::SecondToFirst => self.first_entity(name),
        }
    }
}

#[derive(Debug, Default)]
pub struct EntityCatalog {
    first: EntityRegistry,
    second: EntityRegistry,
    first_default: String,
    second_default: String,
}

impl EntityCatalog {
    pub fn new(first: EntityRegistry, second: EntityRegistry) -> Self {
        let first_default = first.names().next().unwrap_or_default().to_string();
        let second_default = second.names().next().unwrap_or_default().to_string();
        Self {
            first,
            second,
            first_default,
            second_default,
        }
    }

    pub fn with_defaults(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.first_default = first.into();
        self.second_default = second.into();
        self
    }

    pub fn first(&self) -> &EntityRegistry {
        &self.first
    }

    pub fn second(&self) -> &EntityRegistry {
        &self.second
    }
}

impl EntityFactory for EntityCatalog {
    fn first_entity(&self, name: &str) -> Result<Box<dyn Entity>> {
        self.first.create(name)
    }

    fn second_entity(&self, name: &str) -> Result<Box<dyn Entity>> {
        self.second.create(name)
    }

    fn first_entity_name(&self) -> &str {
        &self.first_default
    }

    fn second_entity_name(&self) -> &str {
        &self.second_default
    }
}
