//! Day number to solver table.
//!
//! The `aoc` binary looks days up here by number; the per-day binaries
//! take their [`DayRunner`] straight from [`find_day`].

use aoc_common::{DayResult, Tokenizer};

use crate::{day01, day02, day03, day04};

/// A puzzle part: consume the input lines, produce the answer.
pub type PuzzleFn = fn(&mut Tokenizer) -> DayResult;

/// The solvers for one day.
#[derive(Clone, Copy, Debug)]
pub struct DayRunner {
    pub day: u8,
    pub title: &'static str,
    pub part_one: PuzzleFn,
    pub part_two: Option<PuzzleFn>,
}

impl DayRunner {
    /// The solver for `part` (1 or 2), if this day has one.
    pub fn part(&self, part: u8) -> Option<PuzzleFn> {
        match part {
            1 => Some(self.part_one),
            2 => self.part_two,
            _ => None,
        }
    }
}

static DAYS: [DayRunner; 4] = [
    DayRunner {
        day: 1,
        title: "Chronal Calibration",
        part_one: day01::compute_freq,
        part_two: Some(day01::first_repetition),
    },
    DayRunner {
        day: 2,
        title: "Inventory Management System",
        part_one: day02::box_checksum,
        part_two: Some(day02::similar_ids),
    },
    DayRunner {
        day: 3,
        title: "No Matter How You Slice It",
        part_one: day03::cloth_slicing,
        part_two: Some(day03::find_valid_claim),
    },
    DayRunner {
        day: 4,
        title: "Repose Record",
        part_one: day04::most_asleep_guard,
        part_two: Some(day04::most_frequent_sleeper),
    },
];

/// Every registered day, in day order.
pub fn days() -> &'static [DayRunner] {
    &DAYS
}

/// The runner for `day`, if one is registered.
pub fn find_day(day: u8) -> Option<&'static DayRunner> {
    DAYS.iter().find(|d| d.day == day)
}
