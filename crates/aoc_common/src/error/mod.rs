//! Failure value returned by puzzle functions.
//!
//! A puzzle function can fail for reasons only it understands: a line
//! that does not parse, a character outside the expected alphabet, an
//! input with no answer. It reports the failure by returning a
//! [`DayError`] carrying a human-readable message, optionally followed
//! by an OS error description and a free-form detail line.
//!
//! The error travels back through the `Result`, so the driver always
//! reports the failure of the call it made. Nothing is stashed in shared
//! state to be picked up later.
//!
//! # Rendering
//!
//! ```text
//! Error parsing frequency numbers      <- message
//! Numerical result out of range ...    <- os error (if set)
//! number too large to fit in ...       <- detail (if set)
//! ```

use std::fmt;
use std::io;

use crate::list::ListOverflow;

/// Shorthand for a puzzle function's return type.
pub type DayResult<T = String> = Result<T, DayError>;

/// A puzzle function failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayError {
    message: String,
    os_code: Option<i32>,
    detail: Option<String>,
}

impl DayError {
    /// Create an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            os_code: None,
            detail: None,
        }
    }

    /// The error for a tokenizer that has no tokens to solve with.
    pub fn empty_input() -> Self {
        Self::new("Tokenizer is empty.")
    }

    /// Attach a raw OS error code. Rendered as the platform's description
    /// of that code on its own line.
    #[must_use]
    pub fn with_os_error(mut self, code: i32) -> Self {
        self.os_code = Some(code);
        self
    }

    /// Attach a detail line, typically the `Display` of an underlying error.
    #[must_use]
    pub fn with_detail(mut self, detail: impl fmt::Display) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn os_code(&self) -> Option<i32> {
        self.os_code
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for DayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(code) = self.os_code {
            write!(f, "\n{}", io::Error::from_raw_os_error(code))?;
        }
        if let Some(detail) = &self.detail {
            write!(f, "\n{detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for DayError {}

impl From<ListOverflow> for DayError {
    fn from(err: ListOverflow) -> Self {
        Self::new("Out of memory.").with_detail(err)
    }
}
