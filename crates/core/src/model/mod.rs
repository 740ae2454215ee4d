mod answer;
mod question;
mod scoring;
mod summary;

pub use answer::{ParseTruthError, TruthValue};
pub use question::{Question, QuestionError};
pub use scoring::{Marks, StreakStats, Verdict};
pub use summary::SessionSummary;
