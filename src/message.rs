//! Parsed message records and the parser's output structure.
//!
//! This module provides [`Message`], one recovered conversational turn, and
//! [`ChatData`], the complete result of a successful parse: the retained
//! messages in input order plus participant, time span and count metadata.
//!
//! # Examples
//!
//! ```
//! use chatlens::parse_chat;
//!
//! let chat = parse_chat("12/05/23, 14:05 - Alice: Hello there")?;
//! assert_eq!(chat.total_messages, 1);
//! assert!(chat.participants.contains("Alice"));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of content carried by a [`Message`].
///
/// The parser only ever assigns [`Text`](MessageType::Text) or
/// [`Media`](MessageType::Media). System notices are dropped from the result
/// instead of being tagged, so [`System`](MessageType::System) is never
/// produced; it is kept so serialized data from other producers still loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Ordinary text content.
    #[default]
    Text,
    /// A media placeholder such as `<Media omitted>`.
    Media,
    /// Administrative notice. Reserved, never assigned by the parser.
    System,
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::Text => write!(f, "text"),
            MessageType::Media => write!(f, "media"),
            MessageType::System => write!(f, "system"),
        }
    }
}

/// One conversational turn recovered from an export.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | `u64` | Opaque identifier, unique within one [`ChatData`] |
/// | `timestamp` | `NaiveDateTime` | Local time of the message, no timezone |
/// | `sender` | `String` | Normalized participant name, never empty |
/// | `content` | `String` | Trimmed text, may span several lines |
/// | `kind` | [`MessageType`] | Text or media placeholder |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque identifier with no meaning beyond uniqueness.
    pub id: u64,

    /// When the message was sent, as written in the export.
    pub timestamp: NaiveDateTime,

    /// Canonical participant name.
    pub sender: String,

    /// Message text.
    ///
    /// Continuation lines are joined with `\n`.
    pub content: String,

    /// Content classification.
    #[serde(rename = "type")]
    pub kind: MessageType,
}

impl Message {
    /// Creates a message from already-normalized parts.
    pub fn new(
        id: u64,
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
        kind: MessageType,
    ) -> Self {
        Self {
            id,
            timestamp,
            sender: sender.into(),
            content: content.into(),
            kind,
        }
    }

    /// Appends a continuation line, separated by a newline.
    pub fn append_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }

    pub fn is_media(&self) -> bool {
        self.kind == MessageType::Media
    }
}

/// Earliest and latest timestamp over a set of messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Computes the span of the given messages, or `None` when there are none.
    pub fn of(messages: &[Message]) -> Option<Self> {
        let start = messages.iter().map(|m| m.timestamp).min()?;
        let end = messages.iter().map(|m| m.timestamp).max()?;
        Some(Self { start, end })
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// Complete output of a successful parse.
///
/// A `ChatData` always holds at least one message; an export that yields
/// nothing is reported as an error instead. Every message's sender is listed
/// in `participants`, and `total_messages == media_messages + text_messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatData {
    /// Retained messages in the order they appear in the input.
    pub messages: Vec<Message>,

    /// Distinct senders of the retained messages.
    pub participants: BTreeSet<String>,

    /// Span of the retained messages' timestamps.
    pub date_range: DateRange,

    pub total_messages: usize,
    pub media_messages: usize,
    pub text_messages: usize,
}

impl ChatData {
    /// Builds the summary metadata for a list of retained messages.
    ///
    /// Returns `None` for an empty list.
    pub fn from_messages(messages: Vec<Message>) -> Option<Self> {
        let date_range = DateRange::of(&messages)?;
        let participants = messages.iter().map(|m| m.sender.clone()).collect();
        let media_messages = messages.iter().filter(|m| m.is_media()).count();

        Some(Self {
            total_messages: messages.len(),
            text_messages: messages.len() - media_messages,
            media_messages,
            participants,
            date_range,
            messages,
        })
    }

    /// Messages sent by one participant, in input order.
    pub fn messages_from<'a>(
        &'a self,
        sender: &'a str,
    ) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages.iter().filter(move |m| m.sender == sender)
    }
}
