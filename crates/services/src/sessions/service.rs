use log::debug;
use rand::Rng;

use quiz_core::model::{Marks, Question, SessionSummary, StreakStats, Verdict};

use crate::error::SessionError;
use crate::sessions::progress::{SessionProgress, SessionState};
use crate::sessions::store::QuestionStore;

/// A question drawn for presentation, labeled with its 1-based position
/// among the asked questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskedQuestion {
    pub number: usize,
    pub text: String,
}

/// In-memory state machine for one quiz session.
///
/// Steps through the shuffled question queue, evaluates normalized responses
/// against stored answers, and keeps score, streak, and timing bookkeeping
/// until `finish` produces the summary.
#[derive(Debug, Clone)]
pub struct QuizSession {
    store: QuestionStore,
    marks: Marks,
    score: i64,
    stats: StreakStats,
    response_times: Vec<f64>,
}

impl QuizSession {
    /// Creates a session over the given records.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(
        questions: impl IntoIterator<Item = Question>,
        marks: Marks,
    ) -> Result<Self, SessionError> {
        let store = QuestionStore::from_questions(questions);
        if store.is_empty() {
            return Err(SessionError::Empty);
        }
        debug!("session loaded with {} questions", store.len());

        Ok(Self {
            store,
            marks,
            score: 0,
            stats: StreakStats::new(),
            response_times: Vec::new(),
        })
    }

    /// Shuffles the draw order. Call once before the first draw.
    pub fn shuffle_questions<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.store.shuffle(rng);
    }

    /// Draws the next unasked question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Exhausted` when every question has been asked;
    /// callers treat this as the normal end-of-session signal.
    pub fn next_question(&mut self) -> Result<AskedQuestion, SessionError> {
        let question = self.store.draw().ok_or(SessionError::Exhausted)?;
        Ok(AskedQuestion {
            number: self.store.asked_len(),
            text: question.text().to_string(),
        })
    }

    /// Evaluates a normalized response against a stored record.
    ///
    /// The (text, expected) pair must name a stored record; the response is
    /// compared to its answer for exact string equality (the caller has
    /// already normalized raw input to canonical `"True"` / `"False"`), and
    /// score and streak bookkeeping are updated.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownQuestion` when the identity is absent.
    /// Score and streaks are left untouched in that case.
    pub fn record_response(
        &mut self,
        text: &str,
        expected: &str,
        response: &str,
    ) -> Result<Verdict, SessionError> {
        if !self.store.contains(text, expected) {
            return Err(SessionError::UnknownQuestion {
                text: text.to_string(),
            });
        }

        let verdict = Verdict::from_comparison(expected, response);
        self.apply_score(verdict);
        Ok(verdict)
    }

    fn apply_score(&mut self, verdict: Verdict) {
        self.score += self.marks.reward(verdict);
        self.stats.record(verdict);
    }

    /// Appends one response duration, in seconds.
    pub fn record_response_time(&mut self, secs: f64) {
        self.response_times.push(secs);
    }

    /// First stored answer for the given text, in insertion order.
    #[must_use]
    pub fn lookup_answer(&self, text: &str) -> Option<&str> {
        self.store.lookup_answer(text)
    }

    #[must_use]
    pub fn has_remaining(&self) -> bool {
        self.store.remaining() > 0
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.store.len();
        let asked = self.store.asked_len();
        let remaining = self.store.remaining();
        let state = if remaining == 0 {
            SessionState::Exhausted
        } else if asked == 0 {
            SessionState::Ready
        } else {
            SessionState::InProgress
        };

        SessionProgress {
            total,
            asked,
            remaining,
            state,
        }
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.stats.current()
    }

    #[must_use]
    pub fn answered_count(&self) -> u32 {
        self.stats.answered()
    }

    /// Closes the session: the live streak joins the history and the final
    /// statistics are computed. Consuming `self` makes the summary a
    /// produce-once operation.
    #[must_use]
    pub fn finish(mut self) -> SessionSummary {
        self.stats.finalize();
        SessionSummary::compute(&self.stats, &self.response_times, self.score)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question::new(format!("Q{i}"), "True").unwrap())
            .collect()
    }

    fn session(n: usize) -> QuizSession {
        QuizSession::new(questions(n), Marks::default()).unwrap()
    }

    #[test]
    fn empty_session_returns_error() {
        let err = QuizSession::new(Vec::new(), Marks::default()).unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[test]
    fn every_question_is_asked_exactly_once() {
        let mut session = session(6);
        let mut seen = HashSet::new();

        for expected_number in 1..=6 {
            let asked = session.next_question().unwrap();
            assert_eq!(asked.number, expected_number);
            assert!(seen.insert(asked.text), "question repeated");
        }

        assert!(!session.has_remaining());
        let err = session.next_question().unwrap_err();
        assert!(matches!(err, SessionError::Exhausted));
    }

    #[test]
    fn score_follows_marks() {
        let mut session = QuizSession::new(questions(3), Marks::new(2, -1)).unwrap();

        session.record_response("Q0", "True", "True").unwrap();
        session.record_response("Q1", "True", "True").unwrap();
        session.record_response("Q2", "True", "False").unwrap();

        assert_eq!(session.score(), 3);
        assert_eq!(session.current_streak(), 0);
    }

    #[test]
    fn unknown_question_is_rejected_and_changes_nothing() {
        let mut session = session(2);
        session.record_response("Q0", "True", "True").unwrap();
        let score_before = session.score();
        let streak_before = session.current_streak();

        let err = session
            .record_response("never added", "True", "True")
            .unwrap_err();
        assert!(matches!(err, SessionError::UnknownQuestion { .. }));

        // Same text, wrong expected answer: identity miss as well.
        let err = session.record_response("Q0", "False", "True").unwrap_err();
        assert!(matches!(err, SessionError::UnknownQuestion { .. }));

        assert_eq!(session.score(), score_before);
        assert_eq!(session.current_streak(), streak_before);
    }

    #[test]
    fn finish_reports_accuracy_and_timing() {
        let mut session = QuizSession::new(questions(4), Marks::new(2, -1)).unwrap();

        session.record_response("Q0", "True", "True").unwrap();
        session.record_response("Q1", "True", "True").unwrap();
        session.record_response("Q2", "True", "True").unwrap();
        session.record_response("Q3", "True", "False").unwrap();
        for secs in [1.0, 2.0, 3.0, 2.0] {
            session.record_response_time(secs);
        }

        let summary = session.finish();
        assert_eq!(summary.accuracy(), 75.0);
        assert_eq!(summary.average_time_secs(), 2.0);
        assert_eq!(summary.highest_streak(), 3);
        assert_eq!(summary.score(), 5);
    }

    #[test]
    fn progress_walks_the_lifecycle() {
        let mut session = session(2);
        assert_eq!(session.progress().state, SessionState::Ready);

        session.next_question().unwrap();
        assert_eq!(session.progress().state, SessionState::InProgress);

        session.next_question().unwrap();
        let progress = session.progress();
        assert_eq!(progress.state, SessionState::Exhausted);
        assert_eq!(progress.asked, 2);
        assert_eq!(progress.remaining, 0);
    }
}
