//! The ordered collection of [`NeedRecord`]s and its write-through persistence.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, error, warn};

use crate::{Result, storage::Storage};

mod record;

pub use record::{NeedDraft, NeedRecord};

/// Key the serialized collection is stored under
pub const STORAGE_KEY: &str = "geriatrica_sao_mateus_v4";

/// Owner of the record collection.
///
/// Records are kept newest-first. Every mutation rewrites the whole collection to storage
/// before returning, so the in-memory list is always what was last persisted.
#[derive(Debug)]
pub struct RecordStore {
    storage: Box<dyn Storage>,
    records: Vec<NeedRecord>,
}

impl RecordStore {
    /// Restore the collection from `storage`. Missing data gives an empty store. Data that
    /// doesn't parse is backed up, logged and replaced with an empty collection.
    pub fn load(storage: Box<dyn Storage>) -> Result<Self> {
        let records = match storage.get(STORAGE_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<NeedRecord>>(&raw) {
                Ok(records) => dedup(records),
                Err(e) => {
                    error!("Failed to load stored records: {e}");
                    let backup_key = storage.backup(STORAGE_KEY, &raw)?;
                    warn!("Unreadable records moved to '{backup_key}'");
                    Vec::new()
                }
            },
        };

        debug!("Loaded {} records", records.len());

        let store = Self { storage, records };
        store.persist()?;

        Ok(store)
    }

    /// All records, newest first.
    pub fn records(&self) -> &[NeedRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&NeedRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a record from `draft` and put it at the front of the collection. If the write
    /// fails the collection is left as it was.
    pub fn add(&mut self, draft: NeedDraft) -> Result<NeedRecord> {
        let created_at = Utc::now().timestamp_millis();
        let record = NeedRecord::new(self.next_id(created_at), created_at, draft);

        let mut records = Vec::with_capacity(self.records.len().saturating_add(1));
        records.push(record.clone());
        records.extend(self.records.iter().cloned());

        self.commit(records)?;

        debug!("Added record '{}' ({})", record.name(), record.id());

        Ok(record)
    }

    /// Remove the record with `id`. Returns whether anything was removed; an unknown id is not
    /// an error. If the write fails the collection is left as it was.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let records: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.id() != id)
            .cloned()
            .collect();
        let removed = records.len() != self.records.len();

        self.commit(records)?;

        if removed {
            debug!("Removed record {id}");
        } else {
            debug!("No record {id} to remove");
        }

        Ok(removed)
    }

    /// Write the whole collection to storage, replacing whatever was there.
    pub fn persist(&self) -> Result<()> {
        write(self.storage.as_ref(), &self.records)
    }

    /// Persist `records` and only then make them the current collection.
    fn commit(&mut self, records: Vec<NeedRecord>) -> Result<()> {
        if let Err(e) = write(self.storage.as_ref(), &records) {
            error!("Failed to persist records, keeping the previous collection: {e}");
            return Err(e);
        }

        self.records = records;

        Ok(())
    }

    /// Ids are the creation time in milliseconds, bumped past the newest existing numeric id
    /// when two records land in the same millisecond.
    fn next_id(&self, now: i64) -> String {
        let newest = self
            .records
            .iter()
            .filter_map(|r| r.id().parse::<i64>().ok())
            .max();

        match newest {
            Some(newest) if newest >= now => newest.saturating_add(1),
            _ => now,
        }
        .to_string()
    }
}

fn write(storage: &dyn Storage, records: &[NeedRecord]) -> Result<()> {
    let serialized = serde_json::to_string(records)?;
    storage.set(STORAGE_KEY, &serialized)?;

    Ok(())
}

/// Drop records whose id was already seen, keeping the first (newest) occurrence.
fn dedup(records: Vec<NeedRecord>) -> Vec<NeedRecord> {
    let mut seen = HashSet::new();

    records
        .into_iter()
        .filter(|r| {
            let fresh = seen.insert(r.id().clone());
            if !fresh {
                warn!("Dropping duplicate stored record {}", r.id());
            }
            fresh
        })
        .collect()
}
