use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Score needed to be classified as `Hard`.
pub const HARD_THRESHOLD: u32 = 50;
/// Score needed to be classified as `Medium`.
pub const MEDIUM_THRESHOLD: u32 = 20;

/// Difficulty tier, derived deterministically from cumulative score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Threshold rule on the current score. Pure function of score; a
    /// regression in score can demote the tier.
    pub fn for_score(score: u32) -> Self {
        if score >= HARD_THRESHOLD {
            Difficulty::Hard
        } else if score >= MEDIUM_THRESHOLD {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }

    /// Form expected by the trivia API query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Persisted per-user profile. Older records may lack the optional fields,
/// which then default to a fresh profile's values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub username: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub high_score: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl ProfileRecord {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            score: 0,
            high_score: 0,
            difficulty: Difficulty::Easy,
        }
    }
}
