use std::io;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::{Marks, Question, SessionSummary, TruthValue, Verdict};

use crate::error::{PromptError, RunError, SessionError};
use crate::sessions::service::QuizSession;

/// A normalized answer together with the wall-clock seconds the respondent
/// took to produce it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedAnswer {
    pub value: TruthValue,
    pub elapsed_secs: f64,
}

/// Interactive collaborator surface for one quiz session.
///
/// The state machine stays pure; everything the respondent sees or types
/// flows through this trait.
pub trait QuizIo {
    /// Presents a drawn question, labeled `Q<n>:`.
    fn show_question(&mut self, number: usize, text: &str) -> io::Result<()>;

    /// Reads one normalized answer, re-prompting on invalid input up to the
    /// implementation's retry bound, and reports how long the accepted
    /// attempt took.
    fn read_answer(&mut self) -> Result<TimedAnswer, PromptError>;

    /// Emits the per-answer status line and the current streak.
    fn show_verdict(&mut self, verdict: Verdict, current_streak: u32) -> io::Result<()>;

    /// Renders the final statistics.
    fn show_summary(&mut self, summary: &SessionSummary) -> io::Result<()>;
}

/// Drives one full ask/answer/evaluate session over a `QuizIo`.
#[derive(Debug, Clone)]
pub struct QuizRunner {
    marks: Marks,
    seed: Option<u64>,
}

impl QuizRunner {
    #[must_use]
    pub fn new(marks: Marks) -> Self {
        Self { marks, seed: None }
    }

    /// Pins the shuffle to a fixed seed for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Runs a session to completion and returns the summary.
    ///
    /// The draw order is shuffled once up front. Exhausting the queue is the
    /// normal completion path and triggers the statistics; `UnknownQuestion`
    /// and prompt failures abort the run with no statistics shown.
    ///
    /// # Errors
    ///
    /// Returns `RunError` for an empty question set, an unknown question
    /// identity, prompt failures, or I/O failures while presenting.
    pub fn run(
        &self,
        questions: Vec<Question>,
        io: &mut dyn QuizIo,
    ) -> Result<SessionSummary, RunError> {
        let mut session = QuizSession::new(questions, self.marks)?;
        match self.seed {
            Some(seed) => session.shuffle_questions(&mut StdRng::seed_from_u64(seed)),
            None => session.shuffle_questions(&mut rand::rng()),
        }

        loop {
            let asked = match session.next_question() {
                Ok(asked) => asked,
                Err(SessionError::Exhausted) => break,
                Err(err) => return Err(err.into()),
            };
            io.show_question(asked.number, &asked.text)?;

            let answer = io.read_answer()?;
            let expected = session
                .lookup_answer(&asked.text)
                .map(str::to_string)
                .ok_or_else(|| SessionError::UnknownQuestion {
                    text: asked.text.clone(),
                })?;
            let verdict =
                session.record_response(&asked.text, &expected, answer.value.canonical())?;
            session.record_response_time(answer.elapsed_secs);
            io.show_verdict(verdict, session.current_streak())?;

            debug!(
                "answered {} of {}",
                session.answered_count(),
                session.progress().total
            );
            if !session.has_remaining() {
                break;
            }
        }

        let summary = session.finish();
        io.show_summary(&summary)?;
        Ok(summary)
    }
}
