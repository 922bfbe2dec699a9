//! Advent of Code 2018 CLI
//!
//! One binary for every registered day.

use aocr::commands::{list_days, run_day};
use aocr::init_tracing;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let stdout = std::io::stdout();
            let stderr = std::io::stderr();
            let exit = run_day(&args[2..], &mut stdout.lock(), &mut stderr.lock());
            std::process::exit(exit.code());
        }
        "days" => {
            let exit = list_days(&mut std::io::stdout().lock());
            std::process::exit(exit.code());
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("aoc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Advent of Code 2018 puzzle runner");
    println!();
    println!("Usage: aoc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run DAY 1|2 INPUT_FILE   Solve one part of a day");
    println!("  days                     List registered days");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Each day also has its own binary: dayNN 1|2 INPUT_FILE");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) to log to stderr.");
}
