//! Trivia question model and ingestion validation
//!
//! Provider payloads are external data and are never trusted: the designated
//! correct answer must actually be one of the options, text and options must
//! be non-empty. Anything else is replaced by the fixed fallback question so
//! the game never surfaces a provider error to the player.

use serde::{Deserialize, Serialize};

use crate::provider::ProviderError;

/// A validated multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Serde mirror of the raw provider JSON
#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    correct_answer: String,
}

impl Question {
    /// Parse and validate a raw provider payload
    pub fn from_payload(payload: &str) -> Result<Self, ProviderError> {
        let raw: RawQuestion =
            serde_json::from_str(payload).map_err(|_| ProviderError::InvalidPayload)?;

        if raw.question.trim().is_empty() || raw.options.is_empty() {
            return Err(ProviderError::InvalidPayload);
        }
        if !raw.options.contains(&raw.correct_answer) {
            return Err(ProviderError::MissingAnswer);
        }

        Ok(Self {
            question: raw.question,
            options: raw.options,
            correct_answer: raw.correct_answer,
        })
    }

    /// The fixed question substituted on any provider failure
    pub fn fallback() -> Self {
        Self {
            question: "What color is an orange?".into(),
            options: vec!["Blue".into(), "Orange".into(), "Green".into(), "Purple".into()],
            correct_answer: "Orange".into(),
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}
