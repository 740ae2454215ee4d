//
// ─── MARKS ─────────────────────────────────────────────────────────────────────
//

/// Scoring deltas applied per evaluated answer.
///
/// `minus` is added to the score as-is on an incorrect answer, so a penalty
/// is expressed as a negative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marks {
    pub plus: i64,
    pub minus: i64,
}

impl Marks {
    #[must_use]
    pub fn new(plus: i64, minus: i64) -> Self {
        Self { plus, minus }
    }

    /// Delta to apply to the running score for the given verdict.
    #[must_use]
    pub fn reward(self, verdict: Verdict) -> i64 {
        match verdict {
            Verdict::Correct => self.plus,
            Verdict::Incorrect => self.minus,
        }
    }
}

impl Default for Marks {
    /// +2 for a correct answer, -1 for an incorrect one.
    fn default() -> Self {
        Self { plus: 2, minus: -1 }
    }
}

//
// ─── VERDICT ───────────────────────────────────────────────────────────────────
//

/// Correctness of a single evaluated response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    /// Compares a response against the expected answer string.
    #[must_use]
    pub fn from_comparison(expected: &str, response: &str) -> Self {
        if expected == response {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

//
// ─── STREAK STATS ──────────────────────────────────────────────────────────────
//

/// Streak and correctness bookkeeping across a session.
///
/// `history` holds the lengths of completed streaks; the live streak moves
/// there either when an incorrect answer ends it or when `finalize` closes
/// the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakStats {
    current: u32,
    history: Vec<u32>,
    correct: u32,
    incorrect: u32,
}

impl StreakStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates counters and the streak for one evaluated answer.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct => {
                self.correct = self.correct.saturating_add(1);
                self.current = self.current.saturating_add(1);
            }
            Verdict::Incorrect => {
                self.incorrect = self.incorrect.saturating_add(1);
                self.history.push(self.current);
                self.current = 0;
            }
        }
    }

    /// Moves the live streak into the history.
    ///
    /// Called once when the session ends, so an unfinished streak still
    /// counts toward the highest streak.
    pub fn finalize(&mut self) {
        self.history.push(self.current);
        self.current = 0;
    }

    /// Longest streak seen so far, including the live one.
    #[must_use]
    pub fn highest(&self) -> u32 {
        self.history
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
            .max(self.current)
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    /// Total number of evaluated answers.
    #[must_use]
    pub fn answered(&self) -> u32 {
        self.correct.saturating_add(self.incorrect)
    }

    #[must_use]
    pub fn history(&self) -> &[u32] {
        &self.history
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incorrect_answer_closes_the_streak() {
        let mut stats = StreakStats::new();
        for _ in 0..4 {
            stats.record(Verdict::Correct);
        }
        stats.record(Verdict::Incorrect);

        assert_eq!(stats.history(), &[4]);
        assert_eq!(stats.current(), 0);
        assert_eq!(stats.correct(), 4);
        assert_eq!(stats.incorrect(), 1);
    }

    #[test]
    fn finalize_counts_the_live_streak() {
        let mut stats = StreakStats::new();
        stats.record(Verdict::Correct);
        stats.record(Verdict::Incorrect);
        stats.record(Verdict::Correct);
        stats.record(Verdict::Correct);
        stats.finalize();

        assert_eq!(stats.history(), &[1, 2]);
        assert_eq!(stats.highest(), 2);
    }

    #[test]
    fn highest_sees_the_live_streak_before_finalize() {
        let mut stats = StreakStats::new();
        stats.record(Verdict::Correct);
        stats.record(Verdict::Correct);
        stats.record(Verdict::Correct);

        assert_eq!(stats.highest(), 3);
    }

    #[test]
    fn marks_reward_follows_the_verdict() {
        let marks = Marks::new(2, -1);
        assert_eq!(marks.reward(Verdict::Correct), 2);
        assert_eq!(marks.reward(Verdict::Incorrect), -1);
    }

    #[test]
    fn verdict_compares_exact_strings() {
        assert!(Verdict::from_comparison("True", "True").is_correct());
        assert!(!Verdict::from_comparison("True", "False").is_correct());
        assert!(!Verdict::from_comparison("True", "true").is_correct());
    }
}
