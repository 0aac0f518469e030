//! Output writers for parsed chats.
//!
//! - [`to_json`] / [`write_json`] - the whole [`ChatData`](crate::ChatData) as pretty JSON - requires `json-output` feature
//! - [`to_jsonl`] / [`write_jsonl`] - one message object per line - requires `json-output` feature
//! - [`to_csv`] / [`write_csv`] - semicolon-delimited message table - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::output::{to_csv, write_json};
//!
//! let chat = chatlens::parse_chat("12/05/23, 14:05 - Alice: Hello there")?;
//!
//! write_json(&chat, "chat.json")?;
//! let csv = to_csv(&chat)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Timestamp layout used by the record-oriented writers.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
pub(crate) const RECORD_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S";
