//! Recursive key renaming for nested records.
//!
//! A [`RenameTable`] is an ordered tree: each entry is either a [`RenameNode::Leaf`]
//! naming the replacement for a key, or a [`RenameNode::Subtree`] that applies
//! to the children of the nested record stored under that key.
//!
//! Renaming never touches the outermost keys of a record. Below that, a key is
//! resolved by scanning the current table in order: a subtree holding the key
//! as a leaf, or a leaf entry with the same key, supplies the new name. The
//! first match wins, and unmatched keys are kept as they are. Nested records
//! descend into the subtree stored under their key, keep the current table
//! when the key has no entry, and are copied unchanged below a leaf entry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::record::{Record, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenameNode {
    Leaf(String),
    Subtree(RenameTable),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenameTable {
    entries: IndexMap<String, RenameNode>,
}

impl RenameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leaf(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.entries.insert(key.into(), RenameNode::Leaf(name.into()));
        self
    }

    pub fn with_subtree(mut self, key: impl Into<String>, table: RenameTable) -> Self {
        self.entries.insert(key.into(), RenameNode::Subtree(table));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&RenameNode> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &RenameNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Finds the replacement for `key` among this table's entries.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        for (entry_key, node) in &self.entries {
            match node {
                RenameNode::Subtree(subtree) => {
                    if let Some(RenameNode::Leaf(name)) = subtree.entries.get(key) {
                        return Some(name);
                    }
                }
                RenameNode::Leaf(name) if entry_key == key => return Some(name),
                RenameNode::Leaf(_) => {}
            }
        }
        None
    }

    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.resolve(key).unwrap_or(key)
    }

    /// Table applied below `key`. `None` means nothing under it is renamed.
    fn child_table(&self, key: &str) -> Option<&RenameTable> {
        match self.entries.get(key) {
            Some(RenameNode::Subtree(subtree)) => Some(subtree),
            // a leaf is not tree-shaped
            Some(RenameNode::Leaf(_)) => None,
            None => Some(self),
        }
    }

    /// Returns a copy of `record` with nested keys rewritten.
    pub fn rename_keys(&self, record: &Record) -> Record {
        rename_record(record, self, 0)
    }
}

fn rename_record(record: &Record, table: &RenameTable, depth: usize) -> Record {
    let mut renamed = Record::new();
    for (key, value) in record {
        let target_key = if depth > 0 {
            table.lookup(key)
        } else {
            key.as_str()
        };
        let target_value = match value {
            Value::Object(_) | Value::Array(_) => {
                rename_value(value, table.child_table(key), depth + 1)
            }
            other => other.clone(),
        };
        renamed.insert(target_key.to_string(), target_value);
    }
    renamed
}

fn rename_value(value: &Value, table: Option<&RenameTable>, depth: usize) -> Value {
    let Some(table) = table else {
        return value.clone();
    };
    match value {
        Value::Object(map) => Value::Object(rename_record(map, table, depth)),
        // positions are not renamable; object elements sit one level deeper
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| rename_value(item, Some(table), depth + 1))
                .collect(),
        ),
        other => other.clone(),
    }
}
