use std::time::Duration;

use super::Difficulty;

/// Most questions a single session may request.
pub const MAX_QUESTIONS: u8 = 20;

/// Settings for one quiz run. Immutable for the session's duration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How many questions to request, 1..=[`MAX_QUESTIONS`].
    pub question_count: u8,
    pub difficulty: Difficulty,
    /// Per-question answer deadline.
    pub time_limit: Duration,
    /// Provider category id. `None` means any category.
    pub category: Option<u32>,
}
