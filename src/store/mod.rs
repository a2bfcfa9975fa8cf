//! Profile persistence.
//!
//! Storage is behind the [`ProfileStore`] trait so the engine never touches
//! a concrete file format: [`JsonFileStore`] keeps a JSON array on disk and
//! [`MemoryStore`] keeps records in memory for tests and embedding.

mod json;
mod mem;

use std::fmt;
use std::io;

pub use json::JsonFileStore;
pub use mem::MemoryStore;

use crate::models::ProfileRecord;

/// Error type for profile persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure reading or writing the backing store.
    Io(io::Error),
    /// Failure encoding records for storage.
    Serde(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "profile store unavailable: {}", e),
            StoreError::Serde(e) => write!(f, "failed to encode profiles: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Serde(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err)
    }
}

/// Keyed storage for profiles.
pub trait ProfileStore {
    /// Look a profile up by username.
    fn find(&self, username: &str) -> Result<Option<ProfileRecord>, StoreError>;

    /// Replace the record with the same username, or append it. Saving the
    /// same record twice leaves the store unchanged the second time.
    fn upsert(&self, record: &ProfileRecord) -> Result<(), StoreError>;
}
