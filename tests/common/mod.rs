#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use record_mapper::{Entity, EntityCatalog, EntityMapper, EntityRegistry, Record, SetterRegistry};
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// Second-shape entity with setters for `userId` and `userName` only.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct User {
    pub id: Option<i64>,
    pub name: Option<String>,
}

static USER_SETTERS: LazyLock<SetterRegistry<User>> = LazyLock::new(|| {
    SetterRegistry::new()
        .with("userId", |user: &mut User, value: Value| user.id = value.as_i64())
        .with("userName", |user: &mut User, value: Value| {
            user.name = value.as_str().map(str::to_string)
        })
});

impl Entity for User {
    fn set_attribute(&mut self, name: &str, value: Value) -> bool {
        USER_SETTERS.apply(self, name, value)
    }

    fn attributes(&self) -> Record {
        let mut record = Record::new();
        if let Some(id) = self.id {
            record.insert("userId".to_string(), json!(id));
        }
        if let Some(name) = &self.name {
            record.insert("userName".to_string(), json!(name));
        }
        record
    }
}

/// First-shape entity with setters for `id` and `name`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Account {
    pub id: Option<i64>,
    pub name: Option<String>,
}

static ACCOUNT_SETTERS: LazyLock<SetterRegistry<Account>> = LazyLock::new(|| {
    SetterRegistry::new()
        .with("id", |account: &mut Account, value: Value| account.id = value.as_i64())
        .with("name", |account: &mut Account, value: Value| {
            account.name = value.as_str().map(str::to_string)
        })
});

impl Entity for Account {
    fn set_attribute(&mut self, name: &str, value: Value) -> bool {
        ACCOUNT_SETTERS.apply(self, name, value)
    }

    fn attributes(&self) -> Record {
        let mut record = Record::new();
        if let Some(id) = self.id {
            record.insert("id".to_string(), json!(id));
        }
        if let Some(name) = &self.name {
            record.insert("name".to_string(), json!(name));
        }
        record
    }
}

pub fn user_catalog() -> EntityCatalog {
    let first = EntityRegistry::new()
        .with("Account", || Box::new(Account::default()) as Box<dyn Entity>);
    let second =
        EntityRegistry::new().with("User", || Box::new(User::default()) as Box<dyn Entity>);
    EntityCatalog::new(first, second)
}

/// Mapper translating `id`/`name` into `userId`/`userName`.
pub fn user_mapper() -> EntityMapper<EntityCatalog> {
    EntityMapper::new(
        user_catalog(),
        record_mapper::mapping::name_map(&[("id", "userId"), ("name", "userName")]),
        Default::default(),
    )
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other:?}"),
    }
}
