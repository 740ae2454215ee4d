#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{PromptError, RunError, SessionError};

pub use sessions::{
    AskedQuestion, QuestionStore, QuizIo, QuizRunner, QuizSession, SessionProgress, SessionState,
    TimedAnswer,
};
