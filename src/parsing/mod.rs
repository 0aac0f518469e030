//! Parsing pipeline components.
//!
//! Each stage is a small, independently testable unit:
//!
//! - [`lines`] - splits raw text into trimmed non-blank lines
//! - [`datetime`] - resolves captured date and time substrings
//! - [`sender`] - normalizes captured sender names
//! - [`classify`] - media placeholder and system notice tests
//! - [`rules`] - prioritized header line rules
//! - [`accumulator`] - multi-line message reconstruction
//! - [`fallback`] - lenient recovery when no header matched
//! - [`aggregate`] - final filter and summary
//!
//! [`ChatParser`](crate::ChatParser) wires them together.

pub mod accumulator;
pub mod aggregate;
pub mod classify;
pub mod datetime;
pub mod fallback;
pub mod lines;
pub mod rules;
pub mod sender;

pub use accumulator::{Accumulator, LineEffect};
pub use aggregate::{FilterMode, aggregate};
pub use classify::{classify, is_media, is_system_notice};
pub use datetime::resolve_timestamp;
pub use fallback::lenient_parse;
pub use lines::normalized_lines;
pub use rules::{HeaderEngine, HeaderMatch, HeaderRule, Rejection, RuleOutcome};
pub use sender::normalize_sender;
