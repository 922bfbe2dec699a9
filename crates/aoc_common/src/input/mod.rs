//! Puzzle input loading.
//!
//! Reads a whole file into memory and checks it before any tokenizer sees
//! it. The checks catch files that would silently tokenize into garbage:
//!
//! - UTF-16 byte order marks (file saved in the wrong encoding)
//! - interior NUL bytes (binary data, or UTF-16 without a BOM)
//! - invalid UTF-8
//!
//! A leading UTF-8 BOM is harmless and is stripped, so the first line of
//! the input never starts with `U+FEFF`.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Kind of encoding problem found in an input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-16 Little-Endian BOM (`0xFF 0xFE`) at start.
    Utf16LeBom,
    /// UTF-16 Big-Endian BOM (`0xFE 0xFF`) at start.
    Utf16BeBom,
    /// Null byte (U+0000) in the content.
    InteriorNull,
}

impl fmt::Display for EncodingIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EncodingIssueKind::Utf16LeBom => "UTF-16 (little-endian) byte order mark",
            EncodingIssueKind::Utf16BeBom => "UTF-16 (big-endian) byte order mark",
            EncodingIssueKind::InteriorNull => "null byte",
        })
    }
}

/// Why an input file could not be loaded.
///
/// The `Display` text is the reason only; callers prefix it with the
/// path (see [`InputError::path`]).
#[derive(Debug, Error)]
pub enum InputError {
    #[error("No such file or directory")]
    NotFound { path: PathBuf },

    #[error("Permission denied")]
    PermissionDenied { path: PathBuf },

    #[error("{}", os_reason(.source))]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid UTF-8 at byte {offset}")]
    InvalidUtf8 { path: PathBuf, offset: usize },

    #[error("{kind} at byte {pos}")]
    Encoding {
        path: PathBuf,
        kind: EncodingIssueKind,
        pos: usize,
    },
}

impl InputError {
    /// The file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            InputError::NotFound { path }
            | InputError::PermissionDenied { path }
            | InputError::Io { path, .. }
            | InputError::InvalidUtf8 { path, .. }
            | InputError::Encoding { path, .. } => path,
        }
    }

    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => InputError::NotFound { path },
            io::ErrorKind::PermissionDenied => InputError::PermissionDenied { path },
            _ => InputError::Io { path, source },
        }
    }
}

/// The OS description of `err` without the trailing ` (os error N)`.
fn os_reason(err: &io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => text
            .strip_suffix(&format!(" (os error {code})"))
            .map_or_else(|| text.clone(), str::to_owned),
        None => text,
    }
}

/// Read the file at `path` as puzzle input text.
///
/// # Errors
///
/// - [`InputError::NotFound`] / [`InputError::PermissionDenied`] /
///   [`InputError::Io`] when the file cannot be read.
/// - [`InputError::Encoding`] for a UTF-16 BOM or an interior NUL byte.
/// - [`InputError::InvalidUtf8`] when the content is not UTF-8.
pub fn read_input(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| InputError::from_io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    decode(path, bytes)
}

/// Validate raw file bytes and turn them into text.
fn decode(path: &Path, mut bytes: Vec<u8>) -> Result<String, InputError> {
    if let Some(kind) = detect_utf16_bom(&bytes) {
        return Err(InputError::Encoding {
            path: path.to_path_buf(),
            kind,
            pos: 0,
        });
    }

    if let Some(pos) = memchr::memchr(0, &bytes) {
        return Err(InputError::Encoding {
            path: path.to_path_buf(),
            kind: EncodingIssueKind::InteriorNull,
            pos,
        });
    }

    let bom_len = if bytes.starts_with(UTF8_BOM) {
        tracing::debug!(path = %path.display(), "stripping UTF-8 byte order mark");
        bytes.drain(..UTF8_BOM.len());
        UTF8_BOM.len()
    } else {
        0
    };

    String::from_utf8(bytes).map_err(|e| InputError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to() + bom_len,
    })
}

/// Detect a UTF-16 byte order mark at the start of the content.
fn detect_utf16_bom(bytes: &[u8]) -> Option<EncodingIssueKind> {
    if bytes.starts_with(UTF16_LE_BOM) {
        Some(EncodingIssueKind::Utf16LeBom)
    } else if bytes.starts_with(UTF16_BE_BOM) {
        Some(EncodingIssueKind::Utf16BeBom)
    } else {
        None
    }
}
