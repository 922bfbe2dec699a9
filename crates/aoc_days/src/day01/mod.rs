//! Day 1: Chronal Calibration.
//!
//! Each line is a signed frequency change (`+1`, `-8`, `0`). Part 1 sums
//! them. Part 2 replays the list from the start until some frequency is
//! reached a second time.

use aoc_common::{DayError, DayResult, Tokenizer};
use rustc_hash::FxHashSet;

const PARSE_ERROR: &str = "Error parsing frequency numbers";

fn parse_change(token: &str) -> Result<i64, DayError> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|e| DayError::new(PARSE_ERROR).with_detail(e))
}

fn add(freq: i64, change: i64) -> Result<i64, DayError> {
    freq.checked_add(change)
        .ok_or_else(|| DayError::new("Frequency out of range."))
}

/// Part 1: the frequency after applying every change once, starting at 0.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tok.remaining()))]
pub fn compute_freq(tok: &mut Tokenizer) -> DayResult {
    if tok.remaining() == 0 {
        return Err(DayError::empty_input());
    }
    let mut freq = 0i64;
    while let Some(token) = tok.next_token() {
        freq = add(freq, parse_change(token)?)?;
    }
    Ok(freq.to_string())
}

/// Part 2: the first frequency reached twice while applying the changes
/// over and over, starting at 0.
///
/// The tokenizer is rewound with [`Tokenizer::reset`] after every pass.
/// Before looping, the first pass decides whether a repeat can happen at
/// all (see [`repeats`]), so a drifting input fails instead of spinning.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tok.remaining()))]
pub fn first_repetition(tok: &mut Tokenizer) -> DayResult {
    if tok.remaining() == 0 {
        return Err(DayError::empty_input());
    }

    // Partial sums of the first pass: frequencies *before* each change.
    let mut partials = Vec::with_capacity(tok.remaining());
    let mut freq = 0i64;
    while let Some(token) = tok.next_token() {
        partials.push(freq);
        freq = add(freq, parse_change(token)?)?;
    }
    let drift = freq;
    if !repeats(&partials, drift) {
        return Err(DayError::new("Frequency never repeats."));
    }
    tracing::debug!(drift, "frequency repeats, replaying changes");

    let mut seen = FxHashSet::default();
    seen.insert(0i64);
    let mut freq = 0i64;
    let mut passes = 0usize;
    loop {
        tok.reset();
        passes += 1;
        while let Some(token) = tok.next_token() {
            freq = add(freq, parse_change(token)?)?;
            if !seen.insert(freq) {
                tracing::debug!(passes, "found repeated frequency");
                return Ok(freq.to_string());
            }
        }
    }
}

/// Whether replaying changes with first-pass partial sums `partials` and
/// per-pass drift `drift` ever reaches a frequency twice.
///
/// Pass `q` visits `partials[i] + q * drift`. With no drift the pass
/// simply returns to 0. Otherwise two visits coincide only when two
/// partial sums fall in the same residue class modulo `|drift|`.
fn repeats(partials: &[i64], drift: i64) -> bool {
    if drift == 0 {
        return true;
    }
    let modulus = drift.unsigned_abs();
    let mut residues = FxHashSet::default();
    residues.reserve(partials.len());
    partials
        .iter()
        .any(|&p| !residues.insert(i128::from(p).rem_euclid(i128::from(modulus))))
}
