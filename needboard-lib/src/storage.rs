//! The key-value storage medium records are persisted to.

use std::{
    fmt::Debug,
    path::{Path, PathBuf},
    sync::Arc,
};

use agdb::{DbAny, DbKeyValue, DbValue, QueryBuilder};
use derive_more::Deref;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

use crate::config::{self, CoreConfig};

const FILE_NAME: &str = "data.db";
/// The node every stored key hangs off
const STORAGE_ALIAS: &str = "storage";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Internal database error {0}")]
    Internal(#[from] agdb::DbError),
    #[error("Database path is not valid UTF-8: {0}")]
    InvalidPath(PathBuf),
    #[error("Could not locate the database: {0}")]
    Location(#[from] config::Error),
}

/// A string key-value store. Writes overwrite unconditionally.
pub trait Storage: Debug {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Copy `value` to a timestamped sibling of `key` and return the key it was written to.
    fn backup(&self, key: &str, value: &str) -> Result<String> {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let backup_key = format!("{key}.bak-{timestamp}");

        self.set(&backup_key, value)?;

        Ok(backup_key)
    }
}

/// Storage backed by an embedded agdb database.
#[derive(Debug, Clone, Deref)]
pub struct Db {
    #[deref]
    db: Arc<RwLock<DbAny>>,
}

impl Db {
    /// Open the database in the configured state directory.
    pub fn new(cfg: &CoreConfig) -> Result<Self> {
        Self::open(&cfg.state_dir()?.join(FILE_NAME))
    }

    pub fn open(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?;

        let db = Self {
            db: Arc::new(RwLock::new(DbAny::new_file(path_str)?)),
        };

        db.init()?;

        debug!("Opened database at {path_str}");

        Ok(db)
    }

    /// A memory backed database. Nothing outlives the process.
    pub fn in_memory() -> Result<Self> {
        let db = Self {
            db: Arc::new(RwLock::new(DbAny::new_memory("needboard")?)),
        };

        db.init()?;

        Ok(db)
    }

    fn init(&self) -> Result<()> {
        let alias_count = self
            .db
            .read()
            .exec(QueryBuilder::select().aliases().query())?
            .result;

        if alias_count == 0 {
            self.db
                .write()
                .exec_mut(QueryBuilder::insert().nodes().aliases([STORAGE_ALIAS]).query())?;
        }

        Ok(())
    }
}

impl Storage for Db {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let key = DbValue::from(key);

        let value = self
            .db
            .read()
            .exec(QueryBuilder::select().ids(STORAGE_ALIAS).query())?
            .elements
            .into_iter()
            .flat_map(|element| element.values)
            .find(|kv| kv.key == key)
            .map(|kv| kv.value.string().cloned())
            .transpose()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let kv: DbKeyValue = (key, value).into();

        self.db.write().exec_mut(
            QueryBuilder::insert()
                .values([[kv]])
                .ids(STORAGE_ALIAS)
                .query(),
        )?;

        Ok(())
    }
}


#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_key() {
        let db = Db::in_memory().unwrap();

        assert_eq!(db.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let db = Db::in_memory().unwrap();

        db.set("key", "first").unwrap();
        db.set("key", "second").unwrap();
        db.set("other", "untouched").unwrap();

        assert_eq!(db.get("key").unwrap().as_deref(), Some("second"));
        assert_eq!(db.get("other").unwrap().as_deref(), Some("untouched"));
    }

    #[test]
    fn test_backup() {
        let db = Db::in_memory().unwrap();

        let backup_key = db.backup("records", "{broken").unwrap();

        assert!(backup_key.starts_with("records.bak-"));
        assert_eq!(db.get(&backup_key).unwrap().as_deref(), Some("{broken"));
        assert_eq!(db.get("records").unwrap(), None);
    }

    #[test]
    fn test_file_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        {
            let db = Db::open(&path).unwrap();
            db.set("key", "value").unwrap();
        }

        let db = Db::open(&path).unwrap();

        assert_eq!(db.get("key").unwrap().as_deref(), Some("value"));
    }
}
