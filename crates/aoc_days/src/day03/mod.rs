//! Day 3: No Matter How You Slice It.
//!
//! Each line claims a rectangle of fabric: `#ID @ X,Y: WxH`, with `X,Y`
//! the offset of the top-left square inch and `WxH` the size.

use aoc_common::{DayError, DayResult, List, Tokenizer};
use rustc_hash::FxHashMap;

/// A rectangular fabric claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Claim {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Claim {
    /// Every square inch the claim covers, row by row.
    pub fn cells(self) -> impl Iterator<Item = (u32, u32)> {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| (x, y)))
    }
}

/// How many claims cover each square inch.
type Coverage = FxHashMap<(u32, u32), u32>;

/// Parse one `#ID @ X,Y: WxH` claim.
///
/// # Errors
///
/// `Error while parsing "{line}".` for anything else, including a claim
/// whose far edge does not fit in `u32`.
pub fn parse_claim(line: &str) -> Result<Claim, DayError> {
    fn fields(line: &str) -> Option<Claim> {
        let num = |s: &str| s.trim().parse::<u32>().ok();
        let rest = line.trim().strip_prefix('#')?;
        let (id, rest) = rest.split_once('@')?;
        let (offset, size) = rest.split_once(':')?;
        let (x, y) = offset.split_once(',')?;
        let (width, height) = size.split_once('x')?;
        let claim = Claim {
            id: num(id)?,
            x: num(x)?,
            y: num(y)?,
            width: num(width)?,
            height: num(height)?,
        };
        claim.x.checked_add(claim.width)?;
        claim.y.checked_add(claim.height)?;
        Some(claim)
    }

    fields(line).ok_or_else(|| DayError::new(format!("Error while parsing \"{line}\".")))
}

/// Parse every remaining line of `tok` as a claim.
pub fn parse_all_claims(tok: &mut Tokenizer) -> Result<Vec<Claim>, DayError> {
    let mut claims = Vec::with_capacity(tok.remaining());
    while let Some(line) = tok.next_token() {
        claims.push(parse_claim(line)?);
    }
    Ok(claims)
}

fn coverage(claims: &[Claim]) -> Coverage {
    let mut cover = Coverage::default();
    for cell in claims.iter().flat_map(|c| c.cells()) {
        *cover.entry(cell).or_insert(0) += 1;
    }
    cover
}

/// Part 1: square inches covered by two or more claims.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tok.remaining()))]
pub fn cloth_slicing(tok: &mut Tokenizer) -> DayResult {
    if tok.remaining() == 0 {
        return Err(DayError::empty_input());
    }
    let claims = parse_all_claims(tok)?;
    let cover = coverage(&claims);
    tracing::debug!(claims = claims.len(), cells = cover.len(), "mapped fabric");
    let contested = cover.values().filter(|&&n| n > 1).count();
    Ok(contested.to_string())
}

/// Part 2: the ID of the one claim that overlaps no other.
///
/// Every claim starts as a candidate; candidates touching a contested
/// square inch are unlinked as the walk reaches them.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tok.remaining()))]
pub fn find_valid_claim(tok: &mut Tokenizer) -> DayResult {
    if tok.remaining() == 0 {
        return Err(DayError::empty_input());
    }
    let claims = parse_all_claims(tok)?;
    let cover = coverage(&claims);

    let mut candidates = List::with_capacity(claims.len());
    for claim in claims {
        candidates.push_back(claim)?;
    }

    let mut cursor = candidates.head();
    while let Some(id) = cursor {
        let contested = candidates
            .get(id)
            .is_some_and(|c| c.cells().any(|cell| cover.get(&cell).is_some_and(|&n| n > 1)));
        cursor = if contested {
            candidates.remove(id).and_then(|(_, next)| next)
        } else {
            candidates.next(id)
        };
    }

    let mut intact = candidates.iter();
    match (intact.next(), intact.next()) {
        (Some((_, claim)), None) => Ok(claim.id.to_string()),
        (None, _) => Err(DayError::new("No intact claim found.")),
        (Some(_), Some(_)) => Err(DayError::new("Multiple intact claims found.")),
    }
}
