//! One quiz run: fetch, present, capture, score, persist.

use crate::QuizError;
use crate::capture::AnswerCapture;
use crate::models::{AnswerOutcome, SessionConfig};
use crate::profile::ProfileState;
use crate::provider::{ProviderError, QuestionProvider};
use crate::store::ProfileStore;

/// Result of a completed quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalTally {
    /// Questions answered correctly before their deadline.
    pub correct_count: u32,
    /// Questions actually presented. May be below the requested count when
    /// the provider under-delivers; the session never pads or retries.
    pub total_count: usize,
}

/// Drives a single session: questions in provider order, one timed capture
/// per question, a bulk profile update at the end.
pub struct QuizSession<'a, P> {
    provider: &'a P,
    capture: &'a mut AnswerCapture,
}

impl<'a, P: QuestionProvider> QuizSession<'a, P> {
    pub fn new(provider: &'a P, capture: &'a mut AnswerCapture) -> Self {
        Self { provider, capture }
    }

    /// Run the whole quiz. Aborts before any scoring change if the provider
    /// has no questions; a failed final save surfaces after the in-memory
    /// score is already updated.
    pub async fn run<S: ProfileStore>(
        &mut self,
        config: &SessionConfig,
        profile: &mut ProfileState<S>,
    ) -> Result<FinalTally, QuizError> {
        let questions = self.provider.fetch(config).await?;
        if questions.is_empty() {
            return Err(ProviderError::NoQuestions { code: 0 }.into());
        }
        let total = questions.len();
        let mut correct_count = 0u32;

        for (index, record) in questions.iter().enumerate() {
            let question = record.present();

            println!("\nQuestion {}/{}", index + 1, total);
            println!("{}", question.prompt);
            for (i, option) in question.options.iter().enumerate() {
                println!("{}. {}", i + 1, option);
            }
            println!("Your answer (number):");

            let selection = self
                .capture
                .capture(question.options.len(), config.time_limit)
                .await;

            match question.outcome_for(selection) {
                AnswerOutcome::Correct => {
                    correct_count += 1;
                    println!("Correct!");
                }
                AnswerOutcome::Incorrect => {
                    println!(
                        "Oops! The correct answer was: {}",
                        question.correct_answer
                    );
                }
                AnswerOutcome::TimedOut => {
                    println!(
                        "Time's up! The correct answer was: {}",
                        question.correct_answer
                    );
                }
            }
        }

        println!("\nFinal score: {}/{}", correct_count, total);
        log::info!(
            "session finished for {}: {}/{}",
            profile.username(),
            correct_count,
            total
        );

        profile.record_session(correct_count)?;

        Ok(FinalTally {
            correct_count,
            total_count: total,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;

    use super::*;
    use crate::models::{Difficulty, QuestionRecord};
    use crate::provider::ProviderError;
    use crate::store::MemoryStore;

    struct StubProvider {
        outcome: Result<Vec<QuestionRecord>, u8>,
    }

    impl QuestionProvider for StubProvider {
        async fn fetch(
            &self,
            _config: &SessionConfig,
        ) -> Result<Vec<QuestionRecord>, ProviderError> {
            match &self.outcome {
                Ok(questions) => Ok(questions.clone()),
                Err(code) => Err(ProviderError::NoQuestions { code: *code }),
            }
        }
    }

    fn config(count: u8) -> SessionConfig {
        SessionConfig {
            question_count: count,
            difficulty: Difficulty::Easy,
            time_limit: Duration::from_secs(5),
            category: None,
        }
    }

    /// Single-option questions make "1" always correct, which keeps the
    /// scripted input independent of the shuffle.
    fn sure_thing(prompt: &str) -> QuestionRecord {
        QuestionRecord {
            prompt: prompt.to_string(),
            correct_answer: "yes".to_string(),
            incorrect_answers: Vec::new(),
        }
    }

    fn scripted_capture(lines: &[&str]) -> AnswerCapture {
        let (tx, rx) = mpsc::unbounded_channel();
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        tokio::spawn(async move {
            for line in lines {
                // Captures pre-drain buffered input, so feed each answer
                // only once its question is listening.
                tokio::time::sleep(Duration::from_secs(1)).await;
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        AnswerCapture::from_lines(rx)
    }

    #[tokio::test(start_paused = true)]
    async fn all_correct_answers_tally_and_persist() {
        let provider = StubProvider {
            outcome: Ok(vec![sure_thing("q1"), sure_thing("q2"), sure_thing("q3")]),
        };
        let mut capture = scripted_capture(&["1", "1", "1"]);
        let mut profile = ProfileState::load(MemoryStore::new(), "alice").unwrap();

        let tally = QuizSession::new(&provider, &mut capture)
            .run(&config(3), &mut profile)
            .await
            .unwrap();

        assert_eq!(
            tally,
            FinalTally {
                correct_count: 3,
                total_count: 3
            }
        );
        assert_eq!(profile.score(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn provider_error_aborts_without_scoring() {
        let provider = StubProvider {
            outcome: Err(1),
        };
        let mut capture = scripted_capture(&[]);
        let mut profile = ProfileState::load(MemoryStore::new(), "alice").unwrap();

        let result = QuizSession::new(&provider, &mut capture)
            .run(&config(3), &mut profile)
            .await;

        assert!(matches!(result, Err(QuizError::Provider(_))));
        assert_eq!(profile.score(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_batch_aborts_without_scoring() {
        let provider = StubProvider {
            outcome: Ok(Vec::new()),
        };
        let mut capture = scripted_capture(&[]);
        let mut profile = ProfileState::load(MemoryStore::new(), "alice").unwrap();

        let result = QuizSession::new(&provider, &mut capture)
            .run(&config(3), &mut profile)
            .await;

        assert!(matches!(result, Err(QuizError::Provider(_))));
        assert_eq!(profile.score(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn under_delivery_uses_what_arrived() {
        let provider = StubProvider {
            outcome: Ok(vec![sure_thing("q1"), sure_thing("q2")]),
        };
        let mut capture = scripted_capture(&["1", "1"]);
        let mut profile = ProfileState::load(MemoryStore::new(), "alice").unwrap();

        let tally = QuizSession::new(&provider, &mut capture)
            .run(&config(5), &mut profile)
            .await
            .unwrap();

        assert_eq!(tally.total_count, 2);
        assert_eq!(tally.correct_count, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_and_missing_answers_do_not_score() {
        let q = QuestionRecord {
            prompt: "capital of France?".to_string(),
            correct_answer: "Paris".to_string(),
            incorrect_answers: vec!["London".to_string(), "Rome".to_string()],
        };
        let provider = StubProvider {
            outcome: Ok(vec![q.clone(), q]),
        };
        // An out-of-range answer is never a selection, so the first
        // question runs out its clock too; the second gets silence.
        let mut capture = scripted_capture(&["99"]);
        let mut profile = ProfileState::load(MemoryStore::new(), "bob").unwrap();

        let tally = QuizSession::new(&provider, &mut capture)
            .run(&config(2), &mut profile)
            .await
            .unwrap();

        assert_eq!(tally.correct_count, 0);
        assert_eq!(tally.total_count, 2);
        assert_eq!(profile.score(), 0);
    }
}
