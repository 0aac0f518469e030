//! # chatlens
//!
//! Recovers structured messages from plain-text chat exports in the
//! WhatsApp style, where every message starts with a header line such as
//! `12/05/23, 14:05 - Alice: Hello` and may continue over further lines.
//!
//! ## Overview
//!
//! The parser understands the common export header shapes (bracketed,
//! dash- and space-separated, 12-hour, dotted, ISO and a few looser ones),
//! normalizes dates and sender names, joins continuation lines, tags media
//! placeholders and drops system notices. When no header shape matches at
//! all, a lenient recovery pass still pulls out `prefix - Name: text` lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let log = "\
//! 12/05/23, 14:05 - Alice: Hello
//! how are you?
//! 12/05/23, 14:06 - Bob: <Media omitted>
//! 12/05/23, 14:07 - Bob: Bob left";
//!
//! let chat = parse_chat(log)?;
//! assert_eq!(chat.total_messages, 2);
//! assert_eq!(chat.media_messages, 1);
//! assert_eq!(chat.messages[0].content, "Hello\nhow are you?");
//! # Ok::<(), ChatlensError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`], plus the [`Clock`](parser::Clock) and
//!   [`IdSource`](parser::IdSource) seams
//! - [`parsing`] - the individual pipeline stages
//! - [`message`] - [`Message`], [`MessageType`], [`ChatData`]
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`error`] - [`ChatlensError`], [`Diagnostic`](error::Diagnostic), [`Result`]
//! - [`export`] - writes messages back out as log text
//! - [`format`] / [`output`] - JSON, JSONL and CSV writers
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod message;
pub mod output;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::{ChatData, Message, MessageType};
pub use parser::{ChatParser, parse_chat};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ParserConfig;
    pub use crate::error::{ChatlensError, Diagnostic, Result};
    pub use crate::export::to_export_text;
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::message::{ChatData, DateRange, Message, MessageType};
    pub use crate::parser::{ChatParser, Clock, FixedClock, IdSource, SequentialIds, parse_chat};
}
