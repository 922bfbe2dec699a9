#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn run(argv: &[&str]) -> (Exit, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let exit = run_day(&args(argv), &mut stdout, &mut stderr);
    (
        exit,
        String::from_utf8(stdout).unwrap(),
        String::from_utf8(stderr).unwrap(),
    )
}

// === run ===

#[test]
fn run_solves_day() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("day02.txt");
    fs::write(&path, "abcdef\nbababc\nabbcde\nabcccd\naabcdd\nabcdee\nababab\n").unwrap();
    let path = path.to_string_lossy().into_owned();

    let (exit, stdout, stderr) = run(&["2", "1", &path]);
    assert_eq!(exit, Exit::Success);
    assert_eq!(stdout, "12\n");
    assert_eq!(stderr, "");
}

#[test]
fn run_too_few_args() {
    let (exit, stdout, _) = run(&["1", "1"]);
    assert_eq!(exit, Exit::Failure);
    assert_eq!(stdout, "Too few arguments.\nUsage: aoc run DAY 1|2 INPUT_FILE\n");
}

#[test]
fn run_too_many_args() {
    let (_, stdout, _) = run(&["1", "1", "a", "b"]);
    assert_eq!(stdout, "Too many arguments.\nUsage: aoc run DAY 1|2 INPUT_FILE\n");
}

#[test]
fn run_unknown_day() {
    let (exit, stdout, stderr) = run(&["26", "1", "input.txt"]);
    assert_eq!(exit, Exit::Failure);
    assert_eq!(stdout, "");
    assert_eq!(
        stderr,
        "\"26\" is not a registered day. Run `aoc days` to list them.\n"
    );
}

#[test]
fn run_non_numeric_day() {
    let (_, _, stderr) = run(&["one", "1", "input.txt"]);
    assert_eq!(
        stderr,
        "\"one\" is not a registered day. Run `aoc days` to list them.\n"
    );
}

#[test]
fn run_invalid_part() {
    let (_, _, stderr) = run(&["1", "x", "input.txt"]);
    assert_eq!(stderr, "\"x\" is an invalid part number. Choose 1 or 2.\n");
}

#[test]
fn run_missing_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.txt").to_string_lossy().into_owned();
    let (exit, _, stderr) = run(&["4", "2", &path]);
    assert_eq!(exit, Exit::Failure);
    assert_eq!(
        stderr,
        format!("Error loading input from {path}: No such file or directory\n")
    );
}

// === days ===

#[test]
fn days_lists_every_registered_day() {
    let mut stdout = Vec::new();
    assert_eq!(list_days(&mut stdout), Exit::Success);
    let listing = String::from_utf8(stdout).unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), aoc_days::days().len());
    assert_eq!(lines[0], "day 01  1|2  Chronal Calibration");
    assert_eq!(lines[3], "day 04  1|2  Repose Record");
}
