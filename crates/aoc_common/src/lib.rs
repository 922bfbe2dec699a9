//! Shared runtime for the puzzle solvers.
//!
//! - [`input`]: read a puzzle input file into validated UTF-8 text.
//! - [`error`]: [`DayError`], the failure value every puzzle function
//!   returns instead of writing to a global error slot.
//! - [`list`]: an index-addressed doubly linked list for algorithms that
//!   remove elements while walking.

pub mod error;
pub mod input;
pub mod list;

pub use error::{DayError, DayResult};
pub use input::{read_input, EncodingIssueKind, InputError};
pub use list::{List, ListOverflow, NodeId};

// Re-export the tokenizer so solvers need a single runtime import.
pub use aoc_tokenizer::{Tokenizer, TokenizerError, LINE_DELIMITER};
