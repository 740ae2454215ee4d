use thiserror::Error;

use crate::model::{ParseTruthError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Truth(#[from] ParseTruthError),
}
