//! End-to-end runs of the built binaries.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

// === dayNN binaries ===

#[test]
fn day01_both_parts() {
    let dir = tempdir().unwrap();
    let input = write(dir.path(), "day01.txt", "+3\n+3\n+4\n-2\n-4\n");
    let bin = env!("CARGO_BIN_EXE_day01");

    let out = run(bin, &["1", &input]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "4\n");

    let out = run(bin, &["2", &input]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "10\n");
}

#[test]
fn day03_example() {
    let dir = tempdir().unwrap();
    let input = write(
        dir.path(),
        "day03.txt",
        "#1 @ 1,3: 4x4\n#2 @ 3,1: 4x4\n#3 @ 5,5: 2x2\n",
    );
    let bin = env!("CARGO_BIN_EXE_day03");
    assert_eq!(stdout(&run(bin, &["1", &input])), "4\n");
    assert_eq!(stdout(&run(bin, &["2", &input])), "3\n");
}

#[test]
fn day02_puzzle_error() {
    let dir = tempdir().unwrap();
    let input = write(dir.path(), "day02.txt", "aftgr\ndr8tuz\n");
    let out = run(env!("CARGO_BIN_EXE_day02"), &["1", &input]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "");
    assert_eq!(
        stderr(&out),
        "Error in AoC function call:\nInvalid char \"8\" in \"dr8tuz\".\n"
    );
}

#[test]
fn day04_usage_on_stdout() {
    let out = run(env!("CARGO_BIN_EXE_day04"), &[]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.starts_with("Too few arguments.\nUsage: "));
    assert!(text.ends_with(" 1|2 INPUT_FILE\n"));
}

#[test]
fn utf16_input_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("utf16.txt");
    fs::write(&path, [0xFF, 0xFE, b'+', 0, b'1', 0]).unwrap();
    let input = path.to_string_lossy().into_owned();

    let out = run(env!("CARGO_BIN_EXE_day01"), &["1", &input]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stderr(&out),
        format!("Error loading input from {input}: UTF-16 (little-endian) byte order mark at byte 0\n")
    );
}

// === aoc binary ===

#[test]
fn aoc_run_day04() {
    let dir = tempdir().unwrap();
    let input = write(
        dir.path(),
        "day04.txt",
        "[1518-11-01 00:00] Guard #10 begins shift\n\
[1518-11-01 00:05] falls asleep\n\
[1518-11-01 00:25] wakes up\n\
[1518-11-01 00:30] falls asleep\n\
[1518-11-01 00:55] wakes up\n\
[1518-11-01 23:58] Guard #99 begins shift\n\
[1518-11-02 00:40] falls asleep\n\
[1518-11-02 00:50] wakes up\n\
[1518-11-03 00:05] Guard #10 begins shift\n\
[1518-11-03 00:24] falls asleep\n\
[1518-11-03 00:29] wakes up\n\
[1518-11-04 00:02] Guard #99 begins shift\n\
[1518-11-04 00:36] falls asleep\n\
[1518-11-04 00:46] wakes up\n\
[1518-11-05 00:03] Guard #99 begins shift\n\
[1518-11-05 00:45] falls asleep\n\
[1518-11-05 00:55] wakes up\n",
    );
    let bin = env!("CARGO_BIN_EXE_aoc");
    assert_eq!(stdout(&run(bin, &["run", "4", "1", &input])), "240\n");
    assert_eq!(stdout(&run(bin, &["run", "4", "2", &input])), "4455\n");
}

#[test]
fn aoc_days_listing() {
    let out = run(env!("CARGO_BIN_EXE_aoc"), &["days"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).lines().count(), 4);
}

#[test]
fn aoc_unknown_command() {
    let out = run(env!("CARGO_BIN_EXE_aoc"), &["frobnicate"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("Unknown command: frobnicate"));
}

#[test]
fn aoc_version() {
    let out = run(env!("CARGO_BIN_EXE_aoc"), &["version"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("aoc "));
}
