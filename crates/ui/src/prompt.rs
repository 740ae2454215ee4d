use std::io::{self, BufRead, Write};

use yansi::Paint;

use quiz_core::Clock;
use quiz_core::model::{SessionSummary, TruthValue, Verdict};
use quiz_core::time::elapsed_secs;
use services::error::PromptError;
use services::{QuizIo, TimedAnswer};

use crate::summary::statistics_table;

/// Default number of input attempts before a prompt gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Line-oriented terminal implementation of the quiz I/O surface.
///
/// Generic over the reader and writer so tests can drive it with buffers.
pub struct TerminalIo<R, W> {
    input: R,
    output: W,
    clock: Clock,
    max_attempts: u32,
}

impl TerminalIo<io::BufReader<io::Stdin>, io::Stdout> {
    /// Interactive instance over stdin/stdout with the default retry bound.
    #[must_use]
    pub fn stdio(max_attempts: u32) -> Self {
        Self::new(
            io::BufReader::new(io::stdin()),
            io::stdout(),
            Clock::default_clock(),
            max_attempts,
        )
    }
}

impl<R: BufRead, W: Write> TerminalIo<R, W> {
    #[must_use]
    pub fn new(input: R, output: W, clock: Clock, max_attempts: u32) -> Self {
        Self {
            input,
            output,
            clock,
            max_attempts,
        }
    }

    /// Reads one line without its terminator; `None` means the input closed.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> QuizIo for TerminalIo<R, W> {
    fn show_question(&mut self, number: usize, text: &str) -> io::Result<()> {
        writeln!(self.output, "Q{number}: {text}")
    }

    fn read_answer(&mut self) -> Result<TimedAnswer, PromptError> {
        for _ in 0..self.max_attempts {
            // Each attempt restarts the bracket, so the recorded duration
            // covers the accepted attempt only.
            let start = self.clock.now();
            write!(self.output, "Enter your answer: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Err(PromptError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for an answer",
                )));
            };

            if let Some(value) = TruthValue::from_input(&line) {
                return Ok(TimedAnswer {
                    value,
                    elapsed_secs: elapsed_secs(start, self.clock.now()),
                });
            }
            writeln!(self.output, "Invalid input, try again\n")?;
        }

        Err(PromptError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }

    fn show_verdict(&mut self, verdict: Verdict, current_streak: u32) -> io::Result<()> {
        match verdict {
            Verdict::Correct => writeln!(self.output, "{}", Paint::green("Correct Answer").bold())?,
            Verdict::Incorrect => {
                writeln!(self.output, "{}", Paint::red("Incorrect answer").bold())?;
            }
        }
        writeln!(self.output, "Current Streak: {current_streak}\n")
    }

    fn show_summary(&mut self, summary: &SessionSummary) -> io::Result<()> {
        writeln!(self.output, "Compiling statistics...\n")?;
        writeln!(self.output, "{}", statistics_table(summary))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use quiz_core::model::StreakStats;
    use quiz_core::time::fixed_clock;

    fn terminal(input: &str, max_attempts: u32) -> TerminalIo<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalIo::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            fixed_clock(),
            max_attempts,
        )
    }

    fn output(io: TerminalIo<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(io.output).unwrap()
    }

    #[test]
    fn accepts_a_literal_on_the_first_attempt() {
        let mut io = terminal("yes\n", DEFAULT_MAX_ATTEMPTS);
        let answer = io.read_answer().unwrap();

        assert_eq!(answer.value, TruthValue::True);
        assert_eq!(answer.elapsed_secs, 0.0);
        assert!(output(io).contains("Enter your answer: "));
    }

    #[test]
    fn reprompts_on_invalid_input() {
        let mut io = terminal("dunno\nmaybe\nF\n", DEFAULT_MAX_ATTEMPTS);
        let answer = io.read_answer().unwrap();

        assert_eq!(answer.value, TruthValue::False);
        let text = output(io);
        assert_eq!(text.matches("Invalid input, try again").count(), 2);
        assert_eq!(text.matches("Enter your answer: ").count(), 3);
    }

    #[test]
    fn gives_up_after_the_retry_bound() {
        let mut io = terminal("a\nb\nc\n", 3);
        let err = io.read_answer().unwrap_err();
        assert!(matches!(
            err,
            PromptError::AttemptsExhausted { attempts: 3 }
        ));
    }

    #[test]
    fn closed_input_is_an_io_error() {
        let mut io = terminal("", DEFAULT_MAX_ATTEMPTS);
        let err = io.read_answer().unwrap_err();
        assert!(matches!(err, PromptError::Io(_)));
    }

    #[test]
    fn question_lines_carry_their_number() {
        let mut io = terminal("", DEFAULT_MAX_ATTEMPTS);
        io.show_question(3, "Rust has a garbage collector").unwrap();
        assert!(output(io).contains("Q3: Rust has a garbage collector"));
    }

    #[test]
    fn verdict_lines_name_the_outcome_and_streak() {
        let mut io = terminal("", DEFAULT_MAX_ATTEMPTS);
        io.show_verdict(Verdict::Correct, 2).unwrap();
        io.show_verdict(Verdict::Incorrect, 0).unwrap();

        let text = output(io);
        assert!(text.contains("Correct Answer"));
        assert!(text.contains("Incorrect answer"));
        assert!(text.contains("Current Streak: 2"));
        assert!(text.contains("Current Streak: 0"));
    }

    #[test]
    fn summary_renders_the_table() {
        let mut stats = StreakStats::new();
        stats.record(Verdict::Correct);
        stats.record(Verdict::Incorrect);
        stats.finalize();
        let summary = SessionSummary::compute(&stats, &[2.0], 1);

        let mut io = terminal("", DEFAULT_MAX_ATTEMPTS);
        io.show_summary(&summary).unwrap();

        let text = output(io);
        assert!(text.contains("Compiling statistics..."));
        assert!(text.contains("Correct questions"));
        assert!(text.contains("50.00 %"));
    }
}
