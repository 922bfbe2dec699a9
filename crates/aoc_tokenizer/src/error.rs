//! Construction errors.
//!
//! Extraction never fails: running out of tokens is `None`, not an error.
//! The only failures are rejected inputs at construction time.

use thiserror::Error;

/// Why a [`Tokenizer`](crate::Tokenizer) or [`DelimiterSet`](crate::DelimiterSet)
/// could not be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// The text to tokenize was the empty string.
    #[error("tokenizer input is empty")]
    EmptyText,
    /// The delimiter set contained no characters.
    #[error("delimiter set is empty")]
    EmptyDelimiters,
}
