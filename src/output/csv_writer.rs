//! CSV output writer.

use std::fs::File;

use super::RECORD_TIMESTAMP;
use crate::error::Result;
use crate::message::{ChatData, Message};

const HEADER: [&str; 5] = ["ID", "Timestamp", "Sender", "Type", "Content"];

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `ID`, `Timestamp`, `Sender`, `Type`, `Content`
/// - Multi-line content is quoted
/// - Encoding: UTF-8
pub fn write_csv(chat: &ChatData, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(chat, file)
}

/// Converts messages to a CSV string.
pub fn to_csv(chat: &ChatData) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(chat, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: std::io::Write>(chat: &ChatData, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(HEADER)?;
    for msg in &chat.messages {
        writer.write_record(build_record(msg))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(msg: &Message) -> [String; 5] {
    [
        msg.id.to_string(),
        msg.timestamp.format(RECORD_TIMESTAMP).to_string(),
        msg.sender.clone(),
        msg.kind.to_string(),
        msg.content.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_chat;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_csv_basic() {
        let chat = parse_chat("12/05/23, 14:05 - Alice: Hello there").unwrap();
        let csv = to_csv(&chat).unwrap();

        assert!(csv.starts_with("ID;Timestamp;Sender;Type;Content\n"));
        assert!(csv.contains("1;2023-05-12T14:05:00;Alice;text;Hello there"));
    }

    #[test]
    fn test_write_csv_multiline_quoted() {
        let chat = parse_chat("12/05/23, 14:05 - Alice: Hello\nhow are you?").unwrap();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_csv(&chat, path).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(path)
            .unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[2], "Alice");
        assert_eq!(&record[4], "Hello\nhow are you?");
    }
}
