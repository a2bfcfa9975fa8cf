//! Core data types shared across the quiz engine.

mod config;
mod profile;
mod question;

pub use config::{SessionConfig, MAX_QUESTIONS};
pub use profile::{Difficulty, ProfileRecord};
pub use question::{AnswerOutcome, PresentedQuestion, QuestionRecord};
