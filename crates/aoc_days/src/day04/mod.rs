//! Day 4: Repose Record.
//!
//! Records arrive out of order:
//!
//! ```text
//! [1518-11-01 00:05] falls asleep
//! [1518-11-01 00:00] Guard #10 begins shift
//! [1518-11-01 00:25] wakes up
//! ```
//!
//! [`parse_schedule`] keeps them in input order, sorts a chronological
//! index over them, and tags each sleep/wake record with the guard on
//! duty. Sleep is counted per minute of the midnight hour, from the
//! `falls asleep` minute up to (not including) the `wakes up` minute.

use std::fmt;

use aoc_common::{DayError, DayResult, Tokenizer};
use rustc_hash::{FxHashMap, FxHashSet};

/// Minute-resolution timestamp. Field order gives chronological `Ord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl Timestamp {
    /// Parse the `YYYY-MM-DD HH:MM` text between the brackets.
    fn parse(s: &str) -> Option<Self> {
        fn field<T: std::str::FromStr>(s: &str, width: usize) -> Option<T> {
            if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            s.parse().ok()
        }

        let (date, time) = s.split_once(' ')?;
        let mut date = date.splitn(3, '-');
        let (hour, minute) = time.split_once(':')?;
        let ts = Timestamp {
            year: field(date.next()?, 4)?,
            month: field(date.next()?, 2)?,
            day: field(date.next()?, 2)?,
            hour: field(hour, 2)?,
            minute: field(minute, 2)?,
        };
        let valid = (1..=12).contains(&ts.month)
            && (1..=31).contains(&ts.day)
            && ts.hour < 24
            && ts.minute < 60;
        valid.then_some(ts)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// What happened at a timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    ShiftStart,
    FallsAsleep,
    WakesUp,
}

/// One schedule record.
///
/// `guard` is known from the line itself for shift starts; sleep and wake
/// records get it from [`parse_schedule`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub timestamp: Timestamp,
    pub guard: Option<u32>,
    pub event: Event,
    /// The record as read, for error messages.
    pub line: String,
}

/// Parse a single `[YYYY-MM-DD HH:MM] <event>` record.
///
/// # Errors
///
/// - `Failed to parse time in "{line}".` for a bad or missing timestamp.
/// - `Failed to parse Guard ID in "{line}".` for a shift start whose ID
///   is not a number.
/// - `Failed to match action in "{line}".` for any other event text.
pub fn parse_entry(line: &str) -> Result<Entry, DayError> {
    let fail = |what: &str| DayError::new(format!("Failed to {what} in \"{line}\"."));

    let timestamp = line
        .trim_start()
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .and_then(|(ts, rest)| Some((Timestamp::parse(ts)?, rest)));
    let Some((timestamp, action)) = timestamp else {
        return Err(fail("parse time"));
    };

    let action = action.trim();
    let (event, guard) = if let Some(id) = action
        .strip_prefix("Guard #")
        .and_then(|rest| rest.strip_suffix("begins shift"))
    {
        let id = id.trim().parse::<u32>().map_err(|_| fail("parse Guard ID"))?;
        (Event::ShiftStart, Some(id))
    } else if action == "falls asleep" {
        (Event::FallsAsleep, None)
    } else if action == "wakes up" {
        (Event::WakesUp, None)
    } else {
        return Err(fail("match action"));
    };

    Ok(Entry {
        timestamp,
        guard,
        event,
        line: line.to_owned(),
    })
}

/// All records of one input.
#[derive(Clone, Debug)]
pub struct Schedule {
    /// Records in input order, every one tagged with its guard.
    pub entries: Vec<Entry>,
    /// Indices into `entries` in chronological order.
    pub schedule: Vec<usize>,
    pub entry_count: usize,
    /// Number of distinct guards.
    pub guard_count: usize,
}

impl Schedule {
    /// Records in chronological order. Indices outside `entries` are skipped.
    pub fn chronological(&self) -> impl Iterator<Item = &Entry> {
        self.schedule.iter().filter_map(|&i| self.entries.get(i))
    }
}

/// Parse every remaining line of `tok` into a [`Schedule`].
///
/// # Errors
///
/// Any [`parse_entry`] error, or `No guard on duty in "{line}".` for a
/// sleep/wake record earlier than every shift start.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tok.remaining()))]
pub fn parse_schedule(tok: &mut Tokenizer) -> Result<Schedule, DayError> {
    let mut entries = Vec::with_capacity(tok.remaining());
    while let Some(line) = tok.next_token() {
        entries.push(parse_entry(line)?);
    }

    let mut schedule: Vec<usize> = (0..entries.len()).collect();
    schedule.sort_by_key(|&i| entries[i].timestamp);

    let mut on_duty = None;
    let mut guards = FxHashSet::default();
    for &i in &schedule {
        let entry = &mut entries[i];
        match entry.guard {
            Some(id) => {
                on_duty = Some(id);
                guards.insert(id);
            }
            None if on_duty.is_some() => entry.guard = on_duty,
            None => {
                return Err(DayError::new(format!(
                    "No guard on duty in \"{}\".",
                    entry.line
                )))
            }
        }
    }

    tracing::debug!(entries = entries.len(), guards = guards.len(), "parsed schedule");
    Ok(Schedule {
        entry_count: entries.len(),
        guard_count: guards.len(),
        entries,
        schedule,
    })
}

/// Per-guard count of how often each midnight minute was slept.
type SleepLog = FxHashMap<u32, [u32; 60]>;

fn unmatched(entry: &Entry) -> DayError {
    DayError::new(format!("Unmatched sleep record in \"{}\".", entry.line))
}

/// Pair each `falls asleep` with the following `wakes up`.
fn sleep_log(schedule: &Schedule) -> Result<SleepLog, DayError> {
    let mut log = SleepLog::default();
    let mut asleep: Option<&Entry> = None;

    for entry in schedule.chronological() {
        match (entry.event, asleep) {
            (Event::FallsAsleep, None) => asleep = Some(entry),
            (Event::WakesUp, Some(start)) => {
                let (from, to) = (start.timestamp, entry.timestamp);
                let same_hour = (from.year, from.month, from.day, from.hour)
                    == (to.year, to.month, to.day, to.hour);
                if start.guard != entry.guard || from.hour != 0 || !same_hour || to <= from {
                    return Err(unmatched(start));
                }
                let Some(guard) = entry.guard else {
                    return Err(unmatched(entry));
                };
                let minutes = log.entry(guard).or_insert([0; 60]);
                for slot in &mut minutes[usize::from(from.minute)..usize::from(to.minute)] {
                    *slot += 1;
                }
                asleep = None;
            }
            (Event::ShiftStart, None) => {}
            (Event::ShiftStart | Event::FallsAsleep, Some(start)) => return Err(unmatched(start)),
            (Event::WakesUp, None) => return Err(unmatched(entry)),
        }
    }

    match asleep {
        Some(start) => Err(unmatched(start)),
        None if log.is_empty() => Err(no_sleep()),
        None => Ok(log),
    }
}

/// The busiest minute of `minutes` and its count; earliest wins ties.
fn peak_minute(minutes: &[u32; 60]) -> (u64, u32) {
    (0u64..)
        .zip(minutes.iter().copied())
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .unwrap_or((0, 0))
}

fn no_sleep() -> DayError {
    DayError::new("No guard ever sleeps.")
}

/// Part 1: the guard asleep the most minutes overall, times the minute
/// that guard sleeps most often.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tok.remaining()))]
pub fn most_asleep_guard(tok: &mut Tokenizer) -> DayResult {
    if tok.remaining() == 0 {
        return Err(DayError::empty_input());
    }
    let log = sleep_log(&parse_schedule(tok)?)?;

    // Lower guard id wins ties.
    let (guard, total, minutes) = log
        .iter()
        .map(|(&guard, minutes)| (guard, minutes.iter().sum::<u32>(), minutes))
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .ok_or_else(no_sleep)?;
    let (minute, _) = peak_minute(minutes);
    tracing::debug!(guard, total, minute, "sleepiest guard");
    Ok((u64::from(guard) * minute).to_string())
}

/// Part 2: of all guard/minute pairs, the one slept most often, as
/// `guard * minute`.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tok.remaining()))]
pub fn most_frequent_sleeper(tok: &mut Tokenizer) -> DayResult {
    if tok.remaining() == 0 {
        return Err(DayError::empty_input());
    }
    let log = sleep_log(&parse_schedule(tok)?)?;

    let (guard, minute, count) = log
        .iter()
        .map(|(&guard, minutes)| {
            let (minute, count) = peak_minute(minutes);
            (guard, minute, count)
        })
        .max_by(|a, b| a.2.cmp(&b.2).then_with(|| b.0.cmp(&a.0)))
        .ok_or_else(no_sleep)?;
    tracing::debug!(guard, minute, count, "most regular sleeper");
    Ok((u64::from(guard) * minute).to_string())
}
