use rand::seq::SliceRandom;
use serde::Deserialize;

/// A question as delivered by the provider.
///
/// Text fields may contain HTML-escaped entities; they are decoded when the
/// question is presented, not here, so the record stays a faithful copy of
/// the wire data.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub prompt: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// Outcome of one presented question. Produced exactly once per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    TimedOut,
}

/// A question ready to be shown: entities decoded, options shuffled.
#[derive(Debug, Clone)]
pub struct PresentedQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuestionRecord {
    /// Decode HTML entities and shuffle the correct answer in among the
    /// incorrect ones. The permutation is freshly randomized on every call.
    pub fn present(&self) -> PresentedQuestion {
        let correct = decode(&self.correct_answer);
        let mut options: Vec<String> = self.incorrect_answers.iter().map(|a| decode(a)).collect();
        options.push(correct.clone());
        options.shuffle(&mut rand::rng());

        PresentedQuestion {
            prompt: decode(&self.prompt),
            options,
            correct_answer: correct,
        }
    }
}

impl PresentedQuestion {
    /// Map a captured selection (zero-based option index, `None` when the
    /// deadline fired first) to an outcome.
    pub fn outcome_for(&self, selection: Option<usize>) -> AnswerOutcome {
        match selection {
            Some(i) if self.options.get(i) == Some(&self.correct_answer) => AnswerOutcome::Correct,
            Some(_) => AnswerOutcome::Incorrect,
            None => AnswerOutcome::TimedOut,
        }
    }
}

fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
