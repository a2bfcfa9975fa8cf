use std::fs;
use std::path::PathBuf;

use super::{ProfileStore, StoreError};
use crate::models::ProfileRecord;

/// File-backed store: one JSON array of profile records.
///
/// Every upsert rewrites the whole file. A missing file reads as an empty
/// store; a file that no longer parses is treated as empty too (with a
/// warning) rather than blocking the session.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_all(&self) -> Result<Vec<ProfileRecord>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(records) => Ok(records),
            Err(e) => {
                log::warn!(
                    "profile file {} is not valid JSON ({}); starting empty",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&self, records: &[ProfileRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl ProfileStore for JsonFileStore {
    fn find(&self, username: &str) -> Result<Option<ProfileRecord>, StoreError> {
        let records = self.load_all()?;
        Ok(records.into_iter().find(|r| r.username == username))
    }

    fn upsert(&self, record: &ProfileRecord) -> Result<(), StoreError> {
        let mut records = self.load_all()?;
        match records.iter_mut().find(|r| r.username == record.username) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        self.save_all(&records)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use crate::models::Difficulty;

    fn temp_store(tag: &str) -> JsonFileStore {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("trivia-quiz-{}-{}.json", tag, nanos));
        JsonFileStore::new(path)
    }

    fn cleanup(store: &JsonFileStore) {
        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = temp_store("missing");
        assert!(store.find("alice").unwrap().is_none());
    }

    #[test]
    fn upsert_then_find_round_trips() {
        let store = temp_store("roundtrip");
        let record = ProfileRecord {
            username: "alice".to_string(),
            score: 30,
            high_score: 40,
            difficulty: Difficulty::Medium,
        };

        store.upsert(&record).unwrap();
        assert_eq!(store.find("alice").unwrap(), Some(record));
        cleanup(&store);
    }

    #[test]
    fn upsert_replaces_rather_than_duplicates() {
        let store = temp_store("replace");
        let mut record = ProfileRecord::new("bob");
        store.upsert(&record).unwrap();
        record.score = 10;
        store.upsert(&record).unwrap();
        store.upsert(&record).unwrap();

        let all: Vec<ProfileRecord> =
            serde_json::from_str(&fs::read_to_string(&store.path).unwrap()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].score, 10);
        cleanup(&store);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let store = temp_store("corrupt");
        fs::write(&store.path, "not json at all").unwrap();
        assert!(store.find("alice").unwrap().is_none());
        cleanup(&store);
    }

    #[test]
    fn stores_are_isolated_per_username() {
        let store = temp_store("multi");
        store.upsert(&ProfileRecord::new("alice")).unwrap();
        store.upsert(&ProfileRecord::new("bob")).unwrap();

        assert_eq!(store.find("alice").unwrap().unwrap().username, "alice");
        assert_eq!(store.find("bob").unwrap().unwrap().username, "bob");
        cleanup(&store);
    }
}
