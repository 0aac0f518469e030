//! JSON Lines (JSONL) output writer.
//!
//! One message object per line, without the summary block. Suited to
//! line-oriented tooling and incremental loaders.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use super::RECORD_TIMESTAMP;
use crate::error::Result;
use crate::message::{ChatData, Message, MessageType};

#[derive(Serialize)]
struct JsonlMessage<'a> {
    id: u64,
    timestamp: String,
    sender: &'a str,
    content: &'a str,
    #[serde(rename = "type")]
    kind: MessageType,
}

impl<'a> JsonlMessage<'a> {
    fn from_message(msg: &'a Message) -> Self {
        Self {
            id: msg.id,
            timestamp: msg.timestamp.format(RECORD_TIMESTAMP).to_string(),
            sender: &msg.sender,
            content: &msg.content,
            kind: msg.kind,
        }
    }
}

/// Writes messages to a JSONL file.
pub fn write_jsonl(chat: &ChatData, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in &chat.messages {
        let json = serde_json::to_string(&JsonlMessage::from_message(msg))?;
        writeln!(writer, "{json}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(chat: &ChatData) -> Result<String> {
    let mut output = String::new();
    for msg in &chat.messages {
        output.push_str(&serde_json::to_string(&JsonlMessage::from_message(msg))?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_chat;
    use tempfile::NamedTempFile;

    const TWO_MESSAGES: &str = "12/05/23, 14:05 - Alice: Hello\nsecond line\n12/05/23, 14:06 - Bob: <Media omitted>";

    #[test]
    fn test_to_jsonl_one_object_per_line() {
        let chat = parse_chat(TWO_MESSAGES).unwrap();
        let jsonl = to_jsonl(&chat).unwrap();

        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["content"], "Hello\nsecond line");
        assert_eq!(first["timestamp"], "2023-05-12T14:05:00");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["type"], "media");
    }

    #[test]
    fn test_write_jsonl_matches_string() {
        let chat = parse_chat(TWO_MESSAGES).unwrap();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_jsonl(&chat, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, to_jsonl(&chat).unwrap());
    }
}
