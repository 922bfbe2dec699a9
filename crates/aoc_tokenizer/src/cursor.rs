//! Copyable scan position over a borrowed string.
//!
//! The cursor only moves forward. Because it is [`Copy`], a lookahead is
//! just a copy that gets scanned and thrown away, and counting tokens is a
//! scan over a fresh copy that never touches the caller's position.
//!
//! The position is always on a UTF-8 character boundary: every advance is
//! by an offset returned from [`DelimiterSet`], which only reports
//! boundaries.

use crate::DelimiterSet;

/// Forward-only scan position over a `&str`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Byte offset of the next unscanned character.
    pos: usize,
}

/// Size assertion: a cursor is a fat pointer plus an offset.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Create a cursor at byte offset `pos`, clamped to the source length.
    ///
    /// # Contract
    ///
    /// `pos` must be a character boundary. Offsets previously returned by
    /// [`pos()`](Self::pos) always are.
    pub fn at(source: &'a str, pos: usize) -> Self {
        debug_assert!(
            source.is_char_boundary(pos.min(source.len())),
            "cursor offset {pos} is not a char boundary"
        );
        Self {
            source,
            pos: pos.min(source.len()),
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns `true` once every byte has been scanned.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The unscanned tail of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.source.get(self.pos..).unwrap_or_default()
    }

    /// Advance past any run of delimiters.
    #[inline]
    pub fn skip_delimiters(&mut self, delimiters: &DelimiterSet) {
        self.pos += delimiters.leading_run(self.rest());
    }

    /// Skip leading delimiters, then consume and return the next token.
    ///
    /// The cursor stops directly after the token; any delimiters that
    /// follow are skipped by the next call. Returns `None` when only
    /// delimiters (or nothing) remain, leaving the cursor at EOF.
    pub fn eat_token(&mut self, delimiters: &DelimiterSet) -> Option<&'a str> {
        self.skip_delimiters(delimiters);
        let rest = self.rest();
        if rest.is_empty() {
            return None;
        }
        let len = delimiters.find(rest).unwrap_or(rest.len());
        self.pos += len;
        rest.get(..len)
    }
}
