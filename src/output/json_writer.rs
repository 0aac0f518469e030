//! JSON output writer.

use std::fs;

use crate::error::Result;
use crate::message::ChatData;

/// Writes the whole chat, messages and summary, as pretty-printed JSON.
pub fn write_json(chat: &ChatData, output_path: &str) -> Result<()> {
    let json = to_json(chat)?;
    fs::write(output_path, json)?;
    Ok(())
}

/// Converts the chat to a pretty-printed JSON string.
///
/// # Format
/// ```json
/// {
///   "messages": [{"id": 1, "timestamp": "2023-05-12T14:05:00", "sender": "Alice", "content": "Hi", "type": "text"}],
///   "participants": ["Alice"],
///   "date_range": {"start": "2023-05-12T14:05:00", "end": "2023-05-12T14:05:00"},
///   "total_messages": 1,
///   "media_messages": 0,
///   "text_messages": 1
/// }
/// ```
pub fn to_json(chat: &ChatData) -> Result<String> {
    Ok(serde_json::to_string_pretty(chat)?)
}
