//! Chat log parser entry point.
//!
//! [`ChatParser`] runs the full pipeline over one decoded export:
//!
//! 1. split into trimmed non-blank lines,
//! 2. fold the lines through the header rules and the continuation
//!    accumulator,
//! 3. if no header matched at all, run the lenient recovery pass,
//! 4. filter and summarize into a [`ChatData`].
//!
//! Parsing takes `&self` and keeps all per-run state on the stack, so one
//! parser can be shared across threads and documents.
//!
//! # Example
//!
//! ```rust
//! use chatlens::ChatParser;
//!
//! let parser = ChatParser::new();
//! let chat = parser.parse_str("12/05/23, 14:05 - Alice: Hello\nhow are you?")?;
//!
//! assert_eq!(chat.messages[0].content, "Hello\nhow are you?");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! # Deterministic output
//!
//! Message ids come from an [`IdSource`] and fallback timestamps from a
//! [`Clock`]. Both can be injected:
//!
//! ```rust
//! use chatlens::parser::{ChatParser, FixedClock};
//! use chrono::NaiveDate;
//!
//! let noon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let parser = ChatParser::new().with_clock(FixedClock(noon));
//!
//! let chat = parser.parse_str("Jan 5 2022 10:00 - Carol: hi there friend")?;
//! assert_eq!(chat.messages[0].timestamp, noon);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDateTime};

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::message::{ChatData, Message};
use crate::parsing::{
    Accumulator, FilterMode, HeaderEngine, aggregate, lenient_parse, normalized_lines,
};

/// Source of the current time for messages without a usable date.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Supplies message identifiers, unique within one parse.
pub trait IdSource {
    fn next_id(&mut self) -> u64;
}

impl<F: FnMut() -> u64> IdSource for F {
    fn next_id(&mut self) -> u64 {
        self()
    }
}

/// Monotonic counter, starting at 1 unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Parser for exported chat logs.
pub struct ChatParser {
    config: ParserConfig,
    engine: HeaderEngine,
    clock: Box<dyn Clock>,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            engine: HeaderEngine::new(config.years()),
            config,
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the clock used to stamp undated fallback messages.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    ///
    /// The file must be UTF-8; a leading byte order mark is ignored.
    pub fn parse(&self, path: &Path) -> Result<ChatData> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|source| ChatlensError::Utf8 {
            context: path.display().to_string(),
            source,
        })?;
        self.parse_str(text.trim_start_matches('\u{feff}'))
    }

    /// Parses export text with sequential message ids starting at 1.
    pub fn parse_str(&self, text: &str) -> Result<ChatData> {
        self.parse_str_with_ids(text, &mut SequentialIds::new())
    }

    /// Parses export text, drawing message ids from `ids`.
    pub fn parse_str_with_ids(&self, text: &str, ids: &mut dyn IdSource) -> Result<ChatData> {
        let lines = normalized_lines(text);

        let strict = self.strict_pass(&lines, ids);
        if !strict.is_empty() {
            return aggregate(strict, FilterMode::Strict);
        }

        if !self.config.lenient_fallback {
            return Err(ChatlensError::nothing_recognized());
        }

        tracing::debug!(lines = lines.len(), "no header matched, trying lenient recovery");
        let recovered = lenient_parse(&lines, &self.config, self.clock.now(), ids);
        tracing::debug!(recovered = recovered.len(), "lenient recovery finished");

        if recovered.is_empty() {
            return Err(ChatlensError::nothing_recognized());
        }
        aggregate(recovered, FilterMode::Lenient)
    }

    /// Runs the header rules and continuation fold over all lines.
    fn strict_pass(&self, lines: &[&str], ids: &mut dyn IdSource) -> Vec<Message> {
        lines
            .iter()
            .fold(Accumulator::new(), |acc, &line| {
                let header = self
                    .engine
                    .match_line(line)
                    .map(|found| found.into_message(ids.next_id()));
                acc.step(line, header).0
            })
            .finish()
    }
}

impl Default for ChatParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChatParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatParser")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Parses export text with the default configuration.
///
/// ```rust
/// let chat = chatlens::parse_chat("01/01/23, 09:00 - Bob: <Media omitted>")?;
/// assert_eq!(chat.media_messages, 1);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn parse_chat(text: &str) -> Result<ChatData> {
    ChatParser::new().parse_str(text)
}
