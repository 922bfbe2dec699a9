//! Day 2: Inventory Management System.
//!
//! Box IDs are lowercase ASCII words. Part 1 builds a checksum from
//! repeated letters; part 2 finds the two IDs that differ in exactly one
//! position.

use aoc_common::{DayError, DayResult, Tokenizer};

/// Per-letter counts of a box ID.
fn letter_counts(id: &str) -> Result<[u32; 26], DayError> {
    let mut counts = [0u32; 26];
    for c in id.chars() {
        let slot = u8::try_from(c)
            .ok()
            .filter(u8::is_ascii_lowercase)
            .map(|b| usize::from(b - b'a'));
        let Some(slot) = slot else {
            return Err(DayError::new(format!("Invalid char \"{c}\" in \"{id}\".")));
        };
        counts[slot] += 1;
    }
    Ok(counts)
}

/// Part 1: IDs with some letter exactly twice, times IDs with some letter
/// exactly three times. An ID counts at most once per category, and may
/// count in both.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tok.remaining()))]
pub fn box_checksum(tok: &mut Tokenizer) -> DayResult {
    if tok.remaining() == 0 {
        return Err(DayError::empty_input());
    }
    let mut doubles = 0u64;
    let mut triples = 0u64;
    while let Some(id) = tok.next_token() {
        let counts = letter_counts(id)?;
        if counts.contains(&2) {
            doubles += 1;
        }
        if counts.contains(&3) {
            triples += 1;
        }
    }
    tracing::debug!(doubles, triples, "counted repeated letters");
    Ok((doubles * triples).to_string())
}

/// Part 2: the letters shared by the two IDs that differ in exactly one
/// position.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tok.remaining()))]
pub fn similar_ids(tok: &mut Tokenizer) -> DayResult {
    if tok.remaining() == 0 {
        return Err(DayError::empty_input());
    }
    let mut ids: Vec<String> = Vec::with_capacity(tok.remaining());
    while let Some(id) = tok.next_token() {
        letter_counts(id)?;
        ids.push(id.to_owned());
    }

    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            if let Some(common) = common_letters(a, b) {
                return Ok(common);
            }
        }
    }
    Err(DayError::new("No similar IDs found."))
}

/// `a` without the one position where it differs from `b`. `None` unless
/// the IDs have equal length and differ in exactly one position.
fn common_letters(a: &str, b: &str) -> Option<String> {
    if a.len() != b.len() {
        return None;
    }
    let mut differing = a.bytes().zip(b.bytes()).enumerate().filter(|(_, (x, y))| x != y);
    let (pos, _) = differing.next()?;
    if differing.next().is_some() {
        return None;
    }
    let mut common = String::with_capacity(a.len() - 1);
    common.push_str(&a[..pos]);
    common.push_str(&a[pos + 1..]);
    Some(common)
}

#[cfg(test)]
mod tests;
