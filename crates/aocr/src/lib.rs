//! Advent of Code 2018 driver.
//!
//! Turns a command line into a puzzle run: pick the part, load the input
//! file, split it into lines, call the solver, print the answer.
//!
//! - [`driver`]: the per-day entry point used by the `dayNN` binaries.
//! - [`commands`]: subcommands of the umbrella `aoc` binary.

pub mod commands;
pub mod driver;

pub use driver::{aoc_main, execute, DriverConfig, Exit, UsageError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber.
///
/// Only when `RUST_LOG` is set, so a normal run prints nothing but the
/// answer. Logs go to stderr. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Entry point of the `dayNN` binaries: run `day` with the process
/// arguments and real stdout/stderr.
pub fn day_main(day: u8) -> Exit {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    let Some(runner) = aoc_days::find_day(day) else {
        eprintln!("Day {day} is not registered.");
        return Exit::Failure;
    };
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    aoc_main(&args, runner, &mut stdout.lock(), &mut stderr.lock())
}
