//! Error types for zoomchat.
//!
//! This module provides a single [`ZoomChatError`] enum covering all failure
//! modes of the library, plus a crate-level [`Result`] alias.
//!
//! # Error Handling Philosophy
//!
//! - A missing or unusable input is reported *before* any parsing starts
//!   ([`ZoomChatError::NoInput`]).
//! - A header line that does not decompose into the expected token layout is
//!   either skipped or reported with its line number, depending on
//!   [`MalformedHeaderPolicy`](crate::config::MalformedHeaderPolicy).
//! - An unresolved reaction/reply/removal parent is **not** an error: it is
//!   recorded in [`ParseStats`](crate::record::ParseStats) and parsing
//!   continues. Inspecting those statistics is a normal part of consuming the
//!   result.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for zoomchat operations.
///
/// # Example
///
/// ```rust
/// use zoomchat::error::Result;
/// use zoomchat::record::ParseResult;
///
/// fn my_function() -> Result<ParseResult> {
///     Ok(ParseResult::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ZoomChatError>;

/// The error type for all zoomchat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ZoomChatError {
    /// The input file is absent or unusable.
    ///
    /// Returned by the path-based API before any parsing begins, so a caller
    /// can distinguish "there was nothing to parse" from a mid-stream I/O
    /// failure.
    #[error("no input: {}", path.display())]
    NoInput {
        /// The path that could not be opened.
        path: PathBuf,
    },

    /// An I/O error occurred while reading the stream.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A header line did not decompose into the expected token layout.
    ///
    /// Only produced under
    /// [`MalformedHeaderPolicy::Error`](crate::config::MalformedHeaderPolicy);
    /// the default policy skips such lines instead.
    #[error("malformed header at line {line_number}: {line:?}")]
    MalformedHeader {
        /// 1-based line number in the input stream.
        line_number: usize,
        /// The offending raw line.
        line: String,
    },
}

impl ZoomChatError {
    /// Creates a no-input error for the given path.
    pub fn no_input(path: impl Into<PathBuf>) -> Self {
        ZoomChatError::NoInput { path: path.into() }
    }

    /// Creates a malformed-header error with its position.
    pub fn malformed_header(line_number: usize, line: impl Into<String>) -> Self {
        ZoomChatError::MalformedHeader {
            line_number,
            line: line.into(),
        }
    }

    /// Returns `true` if this is a no-input error.
    pub fn is_no_input(&self) -> bool {
        matches!(self, ZoomChatError::NoInput { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ZoomChatError::Io(_))
    }

    /// Returns `true` if this is a malformed-header error.
    pub fn is_malformed_header(&self) -> bool {
        matches!(self, ZoomChatError::MalformedHeader { .. })
    }
}
