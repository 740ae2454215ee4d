//! Question data provider: the built-in set and the JSON file loader.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use quiz_core::model::{Question, QuestionError};

/// Built-in true/false set used when no question file is given.
const DEFAULT_QUESTIONS: [(&str, &str); 10] = [
    ("The Great Wall of China is visible from the Moon", "False"),
    ("Venus is the hottest planet in the solar system", "True"),
    ("Goldfish have a memory span of only three seconds", "False"),
    ("Sound travels faster in water than in air", "True"),
    ("The Atlantic is the largest ocean on Earth", "False"),
    ("Honey stored in a sealed jar never spoils", "True"),
    ("Lightning never strikes the same place twice", "False"),
    ("Octopuses have three hearts", "True"),
    (
        "Mount Everest is the tallest mountain measured from base to peak",
        "False",
    ),
    ("Bananas grow on trees", "False"),
];

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse question file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("question file contains no questions")]
    EmptyFile,

    #[error("answer for {text:?} must be \"True\" or \"False\", got {answer:?}")]
    InvalidAnswer { text: String, answer: String },

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// On-disk shape of one question record.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    text: String,
    answer: String,
}

/// The built-in question set, in its defined order.
#[must_use]
pub fn default_questions() -> Vec<Question> {
    DEFAULT_QUESTIONS
        .into_iter()
        .map(|(text, answer)| Question::new(text, answer).expect("built-in questions are valid"))
        .collect()
}

/// Loads an ordered question list from a JSON array of `{text, answer}`
/// records.
///
/// # Errors
///
/// Rejects unreadable files, malformed JSON, empty sets, non-canonical
/// answers, and empty question text.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, LoadError> {
    parse_questions(&fs::read_to_string(path)?)
}

fn parse_questions(raw: &str) -> Result<Vec<Question>, LoadError> {
    let records: Vec<RawQuestion> = serde_json::from_str(raw)?;
    if records.is_empty() {
        return Err(LoadError::EmptyFile);
    }

    let mut questions = Vec::with_capacity(records.len());
    for record in records {
        if !matches!(record.answer.as_str(), "True" | "False") {
            return Err(LoadError::InvalidAnswer {
                text: record.text,
                answer: record.answer,
            });
        }
        questions.push(Question::new(record.text, record.answer)?);
    }
    Ok(questions)
}
