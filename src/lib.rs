//! # trivia-quiz
//!
//! A timed, adaptive multiple-choice quiz engine for the terminal.
//!
//! Questions come from the Open Trivia Database, each one answered under a
//! per-question deadline; a per-user score evolves across sessions and
//! drives a difficulty classification.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use trivia_quiz::{
//!     AnswerCapture, OpenTdbProvider, ProfileState, QuizError, QuizSession, SessionConfig,
//!     store::JsonFileStore,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let store = JsonFileStore::new("profiles.json");
//!     let mut profile = ProfileState::load(store, "alice")?;
//!
//!     let provider = OpenTdbProvider::new();
//!     let config = SessionConfig {
//!         question_count: 5,
//!         difficulty: profile.difficulty(),
//!         time_limit: Duration::from_secs(10),
//!         category: None,
//!     };
//!
//!     let mut capture = AnswerCapture::stdin();
//!     let tally = QuizSession::new(&provider, &mut capture)
//!         .run(&config, &mut profile)
//!         .await?;
//!     println!("You scored {}/{}", tally.correct_count, tally.total_count);
//!     Ok(())
//! }
//! ```

mod capture;
pub mod cli;
mod models;
mod profile;
pub mod provider;
mod session;
pub mod store;

use std::io;

pub use capture::AnswerCapture;
pub use models::{
    AnswerOutcome, Difficulty, MAX_QUESTIONS, PresentedQuestion, ProfileRecord, QuestionRecord,
    SessionConfig,
};
pub use profile::ProfileState;
pub use provider::{OpenTdbProvider, ProviderError, QuestionProvider};
pub use session::{FinalTally, QuizSession};
pub use store::{ProfileStore, StoreError};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// The question provider failed or had nothing to offer.
    Provider(ProviderError),
    /// The profile store failed.
    Store(StoreError),
    /// IO error on the interactive prompts.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Provider(e) => write!(f, "{}", e),
            QuizError::Store(e) => write!(f, "{}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Provider(e) => Some(e),
            QuizError::Store(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<ProviderError> for QuizError {
    fn from(err: ProviderError) -> Self {
        QuizError::Provider(err)
    }
}

impl From<StoreError> for QuizError {
    fn from(err: StoreError) -> Self {
        QuizError::Store(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}
