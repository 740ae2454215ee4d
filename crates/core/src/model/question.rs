use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A stored question/answer pair.
///
/// Identity is the full pair: two records with identical text but different
/// answers are distinct, and identical pairs collapse to one entry wherever
/// records are collected. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    text: String,
    answer: String,
}

impl Question {
    /// Creates a question record.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is empty or whitespace.
    pub fn new(
        text: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        Ok(Self {
            text,
            answer: answer.into(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns true when this record has the given (text, answer) identity.
    #[must_use]
    pub fn matches(&self, text: &str, answer: &str) -> bool {
        self.text == text && self.answer == answer
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
