//! Question sources.
//!
//! The engine only depends on the [`QuestionProvider`] trait; the Open
//! Trivia DB client in [`opentdb`] is the one real implementation.

mod opentdb;

use std::fmt;

pub use opentdb::{Category, OpenTdbProvider};

use crate::models::{QuestionRecord, SessionConfig};

/// Error type for question fetching.
#[derive(Debug)]
pub enum ProviderError {
    /// Network or decode failure talking to the provider.
    Http(reqwest::Error),
    /// The provider answered but had no usable questions.
    NoQuestions { code: u8 },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(e) => write!(f, "failed to reach question provider: {}", e),
            ProviderError::NoQuestions { code } => {
                write!(f, "no questions available (provider response code {})", code)
            }
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Http(e) => Some(e),
            ProviderError::NoQuestions { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err)
    }
}

/// Source of question batches, addressed by count/difficulty/category.
#[allow(async_fn_in_trait)]
pub trait QuestionProvider {
    /// Fetch the batch described by `config`, in presentation order.
    /// A successful return always holds at least one question.
    async fn fetch(&self, config: &SessionConfig) -> Result<Vec<QuestionRecord>, ProviderError>;
}
