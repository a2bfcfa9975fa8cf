//! Per-user skill state and the difficulty adaptation rule.

use crate::models::{Difficulty, ProfileRecord};
use crate::store::{ProfileStore, StoreError};

/// Points awarded by [`ProfileState::increase_score`].
const SCORE_INCREMENT: u32 = 10;

/// A loaded profile with exclusive mutation rights for the session.
///
/// Every mutation writes through to the injected store. A failed save is
/// returned to the caller; the in-memory state keeps the new values either
/// way, so a flaky store never rolls a score back.
pub struct ProfileState<S: ProfileStore> {
    store: S,
    record: ProfileRecord,
}

impl<S: ProfileStore> ProfileState<S> {
    /// Load `username` from the store, or claim it: an unknown username gets
    /// a fresh default record that is persisted immediately.
    pub fn load(store: S, username: &str) -> Result<Self, StoreError> {
        match store.find(username)? {
            Some(record) => {
                log::info!(
                    "loaded profile for {} (score {}, difficulty {})",
                    record.username,
                    record.score,
                    record.difficulty
                );
                Ok(Self { store, record })
            }
            None => {
                let record = ProfileRecord::new(username);
                store.upsert(&record)?;
                log::info!("created new profile for {}", username);
                Ok(Self { store, record })
            }
        }
    }

    pub fn username(&self) -> &str {
        &self.record.username
    }

    pub fn score(&self) -> u32 {
        self.record.score
    }

    pub fn high_score(&self) -> u32 {
        self.record.high_score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.record.difficulty
    }

    /// Single-answer scoring path: award a fixed number of points, track the
    /// high-water mark, re-classify difficulty, persist.
    pub fn increase_score(&mut self) -> Result<(), StoreError> {
        self.record.score += SCORE_INCREMENT;
        if self.record.score > self.record.high_score {
            self.record.high_score = self.record.score;
        }
        self.adapt_difficulty();
        self.save()
    }

    /// Bulk scoring path used at the end of a quiz run: fold the session's
    /// correct-answer count into the cumulative score and persist. Distinct
    /// from [`increase_score`](Self::increase_score) on purpose; it does not
    /// touch the high score or the difficulty tier.
    pub fn record_session(&mut self, correct_count: u32) -> Result<(), StoreError> {
        self.record.score += correct_count;
        self.save()
    }

    fn adapt_difficulty(&mut self) {
        self.record.difficulty = Difficulty::for_score(self.record.score);
    }

    /// Persist the current state. Idempotent.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.upsert(&self.record)
    }
}
