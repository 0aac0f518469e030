//! Re-export of parsed messages as log text.
//!
//! Writes messages back out in one canonical header shape,
//! `YYYY-MM-DD HH:MM:SS - Sender: text`, with continuation lines following
//! their header. Feeding the result back into the parser reproduces the
//! same timestamps, senders, contents and types, as long as no continuation
//! line itself looks like a header or a system notice.
//!
//! ```rust
//! use chatlens::export::to_export_text;
//!
//! let chat = chatlens::parse_chat("12/05/23, 14:05 - Alice: Hello\nhow are you?")?;
//! let text = to_export_text(&chat.messages);
//! assert_eq!(text, "2023-05-12 14:05:00 - Alice: Hello\nhow are you?\n");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fmt::Write as _;

use crate::message::Message;

const HEADER_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Formats one message as a header line plus continuation lines.
pub fn export_message(message: &Message) -> String {
    format!(
        "{} - {}: {}",
        message.timestamp.format(HEADER_TIMESTAMP),
        message.sender,
        message.content
    )
}

/// Formats all messages, one header per message, newline-terminated.
pub fn to_export_text(messages: &[Message]) -> String {
    let mut out = String::new();
    for message in messages {
        let _ = writeln!(out, "{}", export_message(message));
    }
    out
}
