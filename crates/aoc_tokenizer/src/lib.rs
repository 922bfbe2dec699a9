//! Delimiter-based tokenizer shared by every puzzle solver.
//!
//! The tokenizer takes an owned copy of its input and hands out tokens one
//! at a time with `strtok` semantics: runs of delimiters collapse, and
//! leading or trailing delimiters never produce empty tokens.
//!
//! # Layers
//!
//! ```text
//! DelimiterSet   which characters split tokens (memchr fast paths)
//!     │
//!     ▼
//! Cursor<'a>     Copy scan position over a &str
//!     │
//!     ▼
//! Tokenizer      owned text + cursor offset + remaining count, resettable
//! ```
//!
//! The remaining count is computed once up front and maintained on every
//! extraction, so [`Tokenizer::remaining`] is O(1). Callers use it to
//! pre-size collections before draining the stream.

mod cursor;
mod delimiters;
mod error;
mod tokenizer;

pub use cursor::Cursor;
pub use delimiters::DelimiterSet;
pub use error::TokenizerError;
pub use tokenizer::{count_tokens, Tokenizer};

/// The delimiter every puzzle input is split on.
pub const LINE_DELIMITER: &str = "\n";
