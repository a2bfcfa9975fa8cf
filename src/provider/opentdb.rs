//! Open Trivia Database client.

use serde::Deserialize;

use super::{ProviderError, QuestionProvider};
use crate::models::{QuestionRecord, SessionConfig};

const QUESTION_URL: &str = "https://opentdb.com/api.php";
const CATEGORY_URL: &str = "https://opentdb.com/api_category.php";

/// A question category as listed by the trivia API.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

#[derive(Deserialize)]
struct QuestionResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<QuestionRecord>,
}

#[derive(Deserialize)]
struct CategoryResponse {
    trivia_categories: Vec<Category>,
}

/// Client for opentdb.com.
pub struct OpenTdbProvider {
    client: reqwest::Client,
    question_url: String,
    category_url: String,
}

impl OpenTdbProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            question_url: QUESTION_URL.to_string(),
            category_url: CATEGORY_URL.to_string(),
        }
    }

    /// Point the client at a different server. Used for local testing.
    pub fn with_base_url(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            question_url: format!("{}/api.php", base.trim_end_matches('/')),
            category_url: format!("{}/api_category.php", base.trim_end_matches('/')),
        }
    }

    /// List the categories the API currently offers.
    pub async fn categories(&self) -> Result<Vec<Category>, ProviderError> {
        let response: CategoryResponse = self
            .client
            .get(&self.category_url)
            .send()
            .await?
            .json()
            .await?;
        log::debug!("fetched {} categories", response.trivia_categories.len());
        Ok(response.trivia_categories)
    }
}

impl Default for OpenTdbProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionProvider for OpenTdbProvider {
    async fn fetch(&self, config: &SessionConfig) -> Result<Vec<QuestionRecord>, ProviderError> {
        let mut query = vec![
            ("amount", config.question_count.to_string()),
            ("difficulty", config.difficulty.as_str().to_string()),
            ("type", "multiple".to_string()),
        ];
        if let Some(category) = config.category {
            query.push(("category", category.to_string()));
        }

        let response: QuestionResponse = self
            .client
            .get(&self.question_url)
            .query(&query)
            .send()
            .await?
            .json()
            .await?;

        if response.response_code != 0 || response.results.is_empty() {
            return Err(ProviderError::NoQuestions {
                code: response.response_code,
            });
        }

        log::info!(
            "fetched {} questions (difficulty {})",
            response.results.len(),
            config.difficulty
        );
        Ok(response.results)
    }
}
