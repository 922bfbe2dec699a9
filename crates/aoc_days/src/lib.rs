//! Advent of Code 2018 puzzle solvers.
//!
//! Every puzzle function has the same shape, [`PuzzleFn`]: it pulls lines
//! from a [`Tokenizer`](aoc_common::Tokenizer) and returns the answer as
//! text, or a [`DayError`](aoc_common::DayError) explaining why there is
//! none. The [`registry`] ties each day number to its two parts.
//!
//! | Day | Title | Part 1 | Part 2 |
//! |-----|-------|--------|--------|
//! | 1 | Chronal Calibration | [`day01::compute_freq`] | [`day01::first_repetition`] |
//! | 2 | Inventory Management System | [`day02::box_checksum`] | [`day02::similar_ids`] |
//! | 3 | No Matter How You Slice It | [`day03::cloth_slicing`] | [`day03::find_valid_claim`] |
//! | 4 | Repose Record | [`day04::most_asleep_guard`] | [`day04::most_frequent_sleeper`] |

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod registry;

pub use registry::{days, find_day, DayRunner, PuzzleFn};
