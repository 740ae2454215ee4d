//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the quiz session state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,

    /// Expected end-of-session signal, not a fault.
    #[error("no unasked questions remain")]
    Exhausted,

    /// The one hard failure: the submitted identity is not in the store.
    #[error("question is not part of this session: {text:?}")]
    UnknownQuestion { text: String },
}

/// Errors emitted while prompting for an answer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PromptError {
    #[error("no valid answer after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors that abort a full quiz run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
