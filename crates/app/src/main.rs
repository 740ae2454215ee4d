mod data;

use std::fmt;
use std::path::PathBuf;

use log::{debug, info};

use quiz_core::model::Marks;
use services::QuizRunner;
use ui::{DEFAULT_MAX_ATTEMPTS, TerminalIo};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidMaxAttempts,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => {
                write!(f, "invalid {flag} value: {raw}")
            }
            ArgsError::InvalidMaxAttempts => write!(f, "--max-attempts must be > 0"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct Args {
    questions: Option<PathBuf>,
    seed: Option<u64>,
    marks: Marks,
    max_attempts: u32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--questions <path>] [--seed <n>] [--plus <n>] [--minus <n>] [--max-attempts <n>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --plus 2");
    eprintln!("  --minus -1");
    eprintln!("  --max-attempts {DEFAULT_MAX_ATTEMPTS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_SEED");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, ArgsError> {
    let raw = require_value(args, flag)?;
    raw.parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut questions = std::env::var("QUIZ_QUESTIONS").ok().map(PathBuf::from);
        let mut seed = std::env::var("QUIZ_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());
        let mut marks = Marks::default();
        let mut max_attempts = DEFAULT_MAX_ATTEMPTS;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    questions = Some(PathBuf::from(require_value(args, "--questions")?));
                }
                "--seed" => seed = Some(parse_number(args, "--seed")?),
                "--plus" => marks.plus = parse_number(args, "--plus")?,
                "--minus" => marks.minus = parse_number(args, "--minus")?,
                "--max-attempts" => {
                    max_attempts = parse_number(args, "--max-attempts")?;
                    if max_attempts == 0 {
                        return Err(ArgsError::InvalidMaxAttempts);
                    }
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            questions,
            seed,
            marks,
            max_attempts,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    println!("Initializing questions...");
    let questions = match &args.questions {
        Some(path) => data::load_questions(path)?,
        None => data::default_questions(),
    };
    info!("loaded {} questions", questions.len());

    println!("Starting quiz...\n");
    println!("----------------------------------------");

    let runner = QuizRunner::new(args.marks).with_seed(args.seed);
    let mut io = TerminalIo::stdio(args.max_attempts);
    let summary = runner.run(questions, &mut io)?;
    debug!("session finished with score {}", summary.score());

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("Error encountered, quitting ({err})");
        std::process::exit(2);
    }
}
