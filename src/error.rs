//! Unified error types for chatlens.
//!
//! The parser itself surfaces exactly one failure, [`ChatlensError::Unparseable`],
//! and only when an entire export yields no usable message. Individual bad
//! lines are absorbed silently. The remaining variants cover the caller-side
//! surfaces: reading an export from disk and writing results.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::ChatData;
///
/// fn load(text: &str) -> Result<ChatData> {
///     chatlens::parse_chat(text)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// Why a whole export could not be turned into messages.
///
/// The `Display` text is meant to be shown to end users verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Header lines were found, but every resulting message was discarded.
    #[error(
        "Found {discarded} potential messages but none were valid. Please ensure this is a WhatsApp chat export file. The file should contain messages in format like \"DD/MM/YY, HH:MM - Name: Message\""
    )]
    AllFiltered {
        /// Number of finalized messages that the filter removed.
        discarded: usize,
    },

    /// Neither the strict rules nor the lenient fallback recognized anything.
    #[error(
        "Could not parse any messages from this file. Please ensure it's a valid WhatsApp chat export. The file should contain messages with timestamps, sender names, and message content."
    )]
    NothingRecognized,
}

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// The export contained no usable message.
    #[error("{0}")]
    Unparseable(#[source] Diagnostic),

    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes were not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A requested format is unknown or unavailable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format involved (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "input decoding".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Every header-like message was filtered away.
    pub fn all_filtered(discarded: usize) -> Self {
        ChatlensError::Unparseable(Diagnostic::AllFiltered { discarded })
    }

    /// Nothing at all was recognized, even by the lenient fallback.
    pub fn nothing_recognized() -> Self {
        ChatlensError::Unparseable(Diagnostic::NothingRecognized)
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if the input could not be parsed.
    pub fn is_unparseable(&self) -> bool {
        matches!(self, ChatlensError::Unparseable(_))
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns the parse diagnostic, if this is a parse failure.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self {
            ChatlensError::Unparseable(d) => Some(*d),
            _ => None,
        }
    }
}
