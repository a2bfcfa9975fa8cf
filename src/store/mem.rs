use std::sync::Mutex;

use super::{ProfileStore, StoreError};
use crate::models::ProfileRecord;

/// In-memory store. Nothing survives the process; useful for tests and for
/// running the engine without touching the filesystem.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ProfileRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything stored, in insertion order.
    pub fn records(&self) -> Vec<ProfileRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl ProfileStore for MemoryStore {
    fn find(&self, username: &str) -> Result<Option<ProfileRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.username == username).cloned())
    }

    fn upsert(&self, record: &ProfileRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.username == record.username) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_is_idempotent() {
        let store = MemoryStore::new();
        let record = ProfileRecord::new("alice");
        store.upsert(&record).unwrap();
        store.upsert(&record).unwrap();

        assert_eq!(store.records().len(), 1);
        assert_eq!(store.find("alice").unwrap(), Some(record));
    }
}
