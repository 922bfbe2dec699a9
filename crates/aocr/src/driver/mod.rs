//! Puzzle run driver.
//!
//! ```text
//! args ──► DriverConfig ──► read_input ──► Tokenizer ──► solver ──► answer
//!   │            │               │              │            │
//!   └ usage ◄────┘     load err ◄┘   init err ◄─┘  call err ◄┘
//! ```
//!
//! Every failure is reported once, as a single message, and turns into
//! [`Exit::Failure`]. Output goes to the writers passed in, so tests can
//! capture exactly what a user would see.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use aoc_common::{read_input, Tokenizer, LINE_DELIMITER};
use aoc_days::{DayRunner, PuzzleFn};
use thiserror::Error;

/// Process outcome of a driver call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    Success,
    Failure,
}

impl Exit {
    /// The process exit status.
    pub const fn code(self) -> i32 {
        match self {
            Exit::Success => 0,
            Exit::Failure => 1,
        }
    }
}

/// A command line that cannot be run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Too few arguments.")]
    TooFew,

    #[error("Too many arguments.")]
    TooMany,

    #[error("\"{0}\" is an invalid part number. Choose 1 or 2.")]
    InvalidPart(String),

    #[error("Part {0} requested but no part {0} function provided.")]
    MissingPart(u8),

    #[error("\"{0}\" is not a registered day. Run `aoc days` to list them.")]
    UnknownDay(String),
}

impl UsageError {
    /// Argument-count errors are followed by the usage line on stdout;
    /// the rest are reported on stderr alone.
    pub fn shows_usage(&self) -> bool {
        matches!(self, UsageError::TooFew | UsageError::TooMany)
    }
}

/// A parsed puzzle invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub day: u8,
    pub part: u8,
    pub input: PathBuf,
}

impl DriverConfig {
    /// Parse `PROGRAM 1|2 INPUT_FILE`, or `PROGRAM INPUT_FILE` for a day
    /// with no part two (the part is then always 1).
    pub fn from_args(args: &[String], runner: &DayRunner) -> Result<Self, UsageError> {
        let expected = if runner.part_two.is_some() { 3 } else { 2 };
        check_count(args.len(), expected)?;
        let (part, input) = match args {
            [_, part, input] => (parse_part(part)?, input),
            [_, input] => (1, input),
            _ => return Err(UsageError::TooFew),
        };
        Ok(DriverConfig {
            day: runner.day,
            part,
            input: PathBuf::from(input),
        })
    }

    /// The solver this invocation asks for.
    pub fn solver(&self, runner: &DayRunner) -> Result<PuzzleFn, UsageError> {
        runner
            .part(self.part)
            .ok_or(UsageError::MissingPart(self.part))
    }
}

pub(crate) fn check_count(got: usize, expected: usize) -> Result<(), UsageError> {
    match got.cmp(&expected) {
        std::cmp::Ordering::Less => Err(UsageError::TooFew),
        std::cmp::Ordering::Greater => Err(UsageError::TooMany),
        std::cmp::Ordering::Equal => Ok(()),
    }
}

pub(crate) fn parse_part(arg: &str) -> Result<u8, UsageError> {
    match arg {
        "1" => Ok(1),
        "2" => Ok(2),
        _ => Err(UsageError::InvalidPart(arg.to_owned())),
    }
}

/// The usage line for a `dayNN` binary.
pub fn usage_line(program: &str, runner: &DayRunner) -> String {
    if runner.part_two.is_some() {
        format!("Usage: {program} 1|2 INPUT_FILE")
    } else {
        format!("Usage: {program} INPUT_FILE")
    }
}

/// Run one day from its command line.
///
/// `args[0]` is the program name, echoed in the usage line.
pub fn aoc_main(
    args: &[String],
    runner: &DayRunner,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Exit {
    let program = args.first().map_or("aoc", String::as_str);
    let config = DriverConfig::from_args(args, runner)
        .and_then(|config| config.solver(runner).map(|solver| (config, solver)));
    match config {
        Ok((config, solver)) => {
            tracing::debug!(day = config.day, part = config.part, "running puzzle");
            execute(&config.input, solver, stdout, stderr)
        }
        Err(err) => {
            report_usage(&err, &usage_line(program, runner), stdout, stderr).unwrap_or(Exit::Failure)
        }
    }
}

pub(crate) fn report_usage(
    err: &UsageError,
    usage: &str,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> io::Result<Exit> {
    if err.shows_usage() {
        writeln!(stdout, "{err}")?;
        writeln!(stdout, "{usage}")?;
    } else {
        writeln!(stderr, "{err}")?;
    }
    Ok(Exit::Failure)
}

/// Load `input`, tokenize it by line and print what `solver` makes of it.
pub fn execute(
    input: &Path,
    solver: PuzzleFn,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Exit {
    run_solver(input, solver, stdout, stderr).unwrap_or(Exit::Failure)
}

fn run_solver(
    input: &Path,
    solver: PuzzleFn,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> io::Result<Exit> {
    let text = match read_input(input) {
        Ok(text) => text,
        Err(err) => {
            writeln!(stderr, "Error loading input from {}: {err}", input.display())?;
            return Ok(Exit::Failure);
        }
    };

    let Ok(mut tok) = Tokenizer::new(&text, LINE_DELIMITER) else {
        writeln!(stderr, "Error initializing input tokenizer.")?;
        return Ok(Exit::Failure);
    };
    drop(text);
    tracing::debug!(tokens = tok.remaining(), "tokenized input");

    match solver(&mut tok) {
        Ok(answer) => {
            writeln!(stdout, "{answer}")?;
            Ok(Exit::Success)
        }
        Err(err) => {
            let rendered = err.to_string();
            if rendered.is_empty() {
                writeln!(stderr, "Error in AoC function call.")?;
            } else {
                writeln!(stderr, "Error in AoC function call:\n{rendered}")?;
            }
            Ok(Exit::Failure)
        }
    }
}
