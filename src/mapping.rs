//! Bidirectional attribute-name dictionaries.
//!
//! A [`MappingTable`] holds a forward (first → second) and a reverse
//! (second → first) dictionary. On construction each side is completed from
//! the inverse of the other; explicit entries always win over inferred ones.

use indexmap::IndexMap;
use serde::Serialize;

use crate::record::Direction;

pub type NameMap = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingTable {
    forward: NameMap,
    reverse: NameMap,
}

impl MappingTable {
    pub fn new(forward: NameMap, reverse: NameMap) -> Self {
        let mut table = Self { forward, reverse };
        table.complete();
        table
    }

    pub fn from_pairs(forward: &[(&str, &str)], reverse: &[(&str, &str)]) -> Self {
        Self::new(name_map(forward), name_map(reverse))
    }

    fn complete(&mut self) {
        for (key, value) in invert(&self.reverse) {
            self.forward.entry(key).or_insert(value);
        }
        for (key, value) in invert(&self.forward) {
            self.reverse.entry(key).or_insert(value);
        }
    }

    pub fn forward(&self) -> &NameMap {
        &self.forward
    }

    pub fn reverse(&self) -> &NameMap {
        &self.reverse
    }

    /// Replaces the forward dictionary as-is, without completion.
    pub fn set_forward(&mut self, forward: NameMap) {
        self.forward = forward;
    }

    /// Replaces the reverse dictionary as-is, without completion.
    pub fn set_reverse(&mut self, reverse: NameMap) {
        self.reverse = reverse;
    }

    pub fn dictionary(&self, direction: Direction) -> &NameMap {
        match direction {
            Direction::FirstToSecond => &self.forward,
            Direction::SecondToFirst => &self.reverse,
        }
    }

    pub fn mapped_name(&self, direction: Direction, key: &str) -> Option<&str> {
        self.dictionary(direction).get(key).map(String::as_str)
    }

    pub fn mapped_name_or_empty(&self, direction: Direction, key: &str) -> &str {
        self.mapped_name(direction, key).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.reverse.is_empty()
    }
}

pub fn name_map(pairs: &[(&str, &str)]) -> NameMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Swaps keys and values; when several keys share a value the last one wins.
pub fn invert(map: &NameMap) -> NameMap {
    let mut inverted = NameMap::with_capacity(map.len());
    for (key, value) in map {
        inverted.insert(value.clone(), key.clone());
    }
    inverted
}
