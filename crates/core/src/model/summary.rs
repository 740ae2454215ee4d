use crate::model::scoring::StreakStats;

/// Aggregate statistics for a finished quiz session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    correct: u32,
    incorrect: u32,
    highest_streak: u32,
    accuracy: f64,
    average_time_secs: f64,
    score: i64,
}

impl SessionSummary {
    /// Computes the summary from end-of-session bookkeeping.
    ///
    /// Accuracy and average time are defined as 0.0 when nothing was
    /// evaluated or timed, so an empty session still summarizes cleanly.
    #[must_use]
    pub fn compute(stats: &StreakStats, response_times: &[f64], score: i64) -> Self {
        let answered = stats.answered();
        let accuracy = if answered == 0 {
            0.0
        } else {
            round2(f64::from(stats.correct()) / f64::from(answered) * 100.0)
        };
        let average_time_secs = if response_times.is_empty() {
            0.0
        } else {
            round2(response_times.iter().sum::<f64>() / response_times.len() as f64)
        };

        Self {
            correct: stats.correct(),
            incorrect: stats.incorrect(),
            highest_streak: stats.highest(),
            accuracy,
            average_time_secs,
            score,
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn highest_streak(&self) -> u32 {
        self.highest_streak
    }

    /// Percentage of correct answers, rounded to two decimals.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Mean response time in seconds, rounded to two decimals.
    #[must_use]
    pub fn average_time_secs(&self) -> f64 {
        self.average_time_secs
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Verdict;

    fn stats_with(correct: u32, incorrect: u32) -> StreakStats {
        let mut stats = StreakStats::new();
        for _ in 0..correct {
            stats.record(Verdict::Correct);
        }
        for _ in 0..incorrect {
            stats.record(Verdict::Incorrect);
        }
        stats.finalize();
        stats
    }

    #[test]
    fn accuracy_for_three_of_four() {
        let summary = SessionSummary::compute(&stats_with(3, 1), &[1.0, 2.0, 3.0, 2.0], 5);
        assert_eq!(summary.accuracy(), 75.0);
        assert_eq!(summary.average_time_secs(), 2.0);
        assert_eq!(summary.score(), 5);
    }

    #[test]
    fn accuracy_rounds_to_two_decimals() {
        let summary = SessionSummary::compute(&stats_with(1, 2), &[0.333], 0);
        assert_eq!(summary.accuracy(), 33.33);
        assert_eq!(summary.average_time_secs(), 0.33);
    }

    #[test]
    fn empty_session_reports_zeroes() {
        let summary = SessionSummary::compute(&stats_with(0, 0), &[], 0);
        assert_eq!(summary.accuracy(), 0.0);
        assert_eq!(summary.average_time_secs(), 0.0);
        assert_eq!(summary.highest_streak(), 0);
    }
}
