//! Subcommands of the `aoc` binary.

use std::io::{self, Write};
use std::path::Path;

use aoc_days::DayRunner;

use crate::driver::{check_count, execute, parse_part, report_usage, DriverConfig, Exit, UsageError};

const RUN_USAGE: &str = "Usage: aoc run DAY 1|2 INPUT_FILE";

/// `aoc run DAY PART INPUT_FILE`. `args` holds the words after `run`.
pub fn run_day(args: &[String], stdout: &mut impl Write, stderr: &mut impl Write) -> Exit {
    match resolve(args) {
        Ok((config, runner)) => match config.solver(runner) {
            Ok(solver) => {
                tracing::debug!(day = config.day, part = config.part, "running puzzle");
                execute(&config.input, solver, stdout, stderr)
            }
            Err(err) => report_usage(&err, RUN_USAGE, stdout, stderr).unwrap_or(Exit::Failure),
        },
        Err(err) => report_usage(&err, RUN_USAGE, stdout, stderr).unwrap_or(Exit::Failure),
    }
}

fn resolve(args: &[String]) -> Result<(DriverConfig, &'static DayRunner), UsageError> {
    check_count(args.len(), 3)?;
    let [day, part, input] = args else {
        return Err(UsageError::TooFew);
    };
    let runner = day
        .parse::<u8>()
        .ok()
        .and_then(aoc_days::find_day)
        .ok_or_else(|| UsageError::UnknownDay(day.clone()))?;
    let config = DriverConfig {
        day: runner.day,
        part: parse_part(part)?,
        input: Path::new(input).to_path_buf(),
    };
    Ok((config, runner))
}

/// `aoc days`: one line per registered day.
pub fn list_days(stdout: &mut impl Write) -> Exit {
    write_days(stdout).map_or(Exit::Failure, |()| Exit::Success)
}

fn write_days(stdout: &mut impl Write) -> io::Result<()> {
    for runner in aoc_days::days() {
        let parts = if runner.part_two.is_some() { "1|2" } else { "1" };
        writeln!(stdout, "day {:02}  {:<3}  {}", runner.day, parts, runner.title)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
