//! Integration tests for the full parsing pipeline.

use chatlens::prelude::*;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::fs;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn fixed_parser() -> ChatParser {
    ChatParser::new().with_clock(FixedClock(at(2024, 6, 1, 12, 0, 0)))
}

/// Checks the structural guarantees every successful parse must give.
fn assert_well_formed(chat: &ChatData) {
    assert!(!chat.messages.is_empty());
    assert_eq!(chat.total_messages, chat.messages.len());
    assert_eq!(
        chat.total_messages,
        chat.media_messages + chat.text_messages
    );
    assert!(chat.date_range.start <= chat.date_range.end);
    for msg in &chat.messages {
        assert!(!msg.sender.is_empty());
        assert!(!msg.content.trim().is_empty());
        assert!(chat.participants.contains(&msg.sender));
        assert!(chat.date_range.contains(msg.timestamp));
    }
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn test_single_dash_separated_message() {
    let chat = parse_chat("12/05/23, 14:05 - Alice: Hello there").unwrap();

    assert_well_formed(&chat);
    assert_eq!(chat.total_messages, 1);
    let msg = &chat.messages[0];
    assert_eq!(msg.sender, "Alice");
    assert_eq!(msg.content, "Hello there");
    assert_eq!(msg.timestamp, at(2023, 5, 12, 14, 5, 0));
    assert_eq!(msg.kind, MessageType::Text);
}

#[test]
fn test_continuation_line_joins_previous_message() {
    let chat = parse_chat("12/05/23, 14:05 - Alice: Hello\nhow are you?").unwrap();

    assert_well_formed(&chat);
    assert_eq!(chat.total_messages, 1);
    assert_eq!(chat.messages[0].content, "Hello\nhow are you?");
}

#[test]
fn test_media_placeholder_is_tagged() {
    let chat = parse_chat("01/01/23, 09:00 - Bob: <Media omitted>").unwrap();

    assert_well_formed(&chat);
    assert_eq!(chat.total_messages, 1);
    assert_eq!(chat.messages[0].kind, MessageType::Media);
    assert_eq!(chat.media_messages, 1);
    assert_eq!(chat.text_messages, 0);
}

#[test]
fn test_system_notice_header_is_filtered_out() {
    let chat = parse_chat(
        "01/01/23, 09:00 - Alice: Alice added Bob\n\
         01/01/23, 09:01 - Bob: thanks for having me",
    )
    .unwrap();

    assert_well_formed(&chat);
    assert_eq!(chat.total_messages, 1);
    assert_eq!(chat.messages[0].sender, "Bob");
    assert!(!chat.participants.contains("Alice"));
    assert!(chat.messages.iter().all(|m| !m.content.contains("added")));
}

#[test]
fn test_lenient_fallback_recovers_message() {
    let chat = fixed_parser()
        .parse_str(
            "Chat history\n\
             Jan 5 2022 10:00 - Carol: hi there friend\n\
             end of file",
        )
        .unwrap();

    assert_well_formed(&chat);
    assert_eq!(chat.total_messages, 1);
    assert_eq!(chat.messages[0].sender, "Carol");
    assert_eq!(chat.messages[0].content, "hi there friend");
    assert_eq!(chat.messages[0].timestamp, at(2024, 6, 1, 12, 0, 0));
}

#[test]
fn test_no_sender_anywhere_fails() {
    let err = parse_chat("just some notes\nnothing to see here\n2023 was a year").unwrap_err();

    assert!(err.is_unparseable());
    assert_eq!(err.diagnostic(), Some(Diagnostic::NothingRecognized));
    assert!(
        err.to_string()
            .starts_with("Could not parse any messages from this file.")
    );
}

#[test]
fn test_all_headers_filtered_reports_count() {
    let err = parse_chat(
        "01/01/23, 09:00 - Alice: Alice added Bob\n\
         01/01/23, 09:05 - Bob: Bob left",
    )
    .unwrap_err();

    assert_eq!(
        err.diagnostic(),
        Some(Diagnostic::AllFiltered { discarded: 2 })
    );
    let text = err.to_string();
    assert!(text.starts_with("Found 2 potential messages but none were valid."));
    assert!(text.contains("\"DD/MM/YY, HH:MM - Name: Message\""));
}

// =========================================================================
// Mixed real-world exports
// =========================================================================

#[test]
fn test_android_group_export() {
    let log = "\
12/05/23, 14:00 - Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
12/05/23, 14:01 - Alice: Morning all
12/05/23, 14:02 - Bob: Hey!
Running a bit late

12/05/23, 14:03 - Bob: <Media omitted>
12/05/23, 14:04 - Carol: ~ Carol joined using this group's invite link
12/05/23, 14:05 - +447700900123: who is this?
12/05/23, 14:06 - ~ Dan: me";

    let chat = parse_chat(log).unwrap();
    assert_well_formed(&chat);

    let senders: Vec<&str> = chat.messages.iter().map(|m| m.sender.as_str()).collect();
    assert_eq!(senders, vec!["Alice", "Bob", "Bob", "Dan"]);
    assert_eq!(chat.messages[1].content, "Hey!\nRunning a bit late");
    assert_eq!(chat.media_messages, 1);
    assert_eq!(chat.text_messages, 3);
    assert_eq!(
        chat.participants.iter().collect::<Vec<_>>(),
        vec!["Alice", "Bob", "Dan"]
    );
    assert_eq!(chat.date_range.start, at(2023, 5, 12, 14, 1, 0));
    assert_eq!(chat.date_range.end, at(2023, 5, 12, 14, 6, 0));
}

#[test]
fn test_ios_bracketed_twelve_hour_export() {
    let log = "\
[5/1/24, 9:15:30 AM] Alice: Good morning
[5/1/24, 12:00:00 PM] Bob: lunch?
[5/1/24, 12:30:00 AM] Alice: <Image omitted>";

    let chat = parse_chat(log).unwrap();
    assert_well_formed(&chat);
    assert_eq!(chat.total_messages, 3);

    let first = chat.messages[0].timestamp;
    assert_eq!((first.day(), first.month(), first.year()), (5, 1, 2024));
    assert_eq!((first.hour(), first.minute(), first.second()), (9, 15, 30));
    assert_eq!(chat.messages[1].timestamp.hour(), 12);
    assert_eq!(chat.messages[2].timestamp.hour(), 0);
    assert_eq!(chat.messages[2].kind, MessageType::Media);
}

#[test]
fn test_mixed_header_shapes_in_one_file() {
    let log = "\
26.10.2025, 20:40 - Муха: Добрый вечер
2024-01-15 10:30:00 - Alice: ISO style
12/05/23 at 14:05 - Bob: with at
12/05/23 14:05 Carol: no dash at all";

    let chat = parse_chat(log).unwrap();
    assert_well_formed(&chat);
    assert_eq!(chat.total_messages, 4);
    assert_eq!(chat.messages[0].timestamp, at(2025, 10, 26, 20, 40, 0));
    assert_eq!(chat.messages[1].timestamp, at(2024, 1, 15, 10, 30, 0));
    assert!(chat.participants.contains("Муха"));
}

#[test]
fn test_order_of_appearance_is_kept() {
    // Timestamps go backwards; output must not be re-sorted.
    let log = "\
02/01/23, 10:00 - Alice: second day
01/01/23, 10:00 - Bob: first day";

    let chat = parse_chat(log).unwrap();
    assert_eq!(chat.messages[0].sender, "Alice");
    assert_eq!(chat.messages[1].sender, "Bob");
    assert_eq!(chat.date_range.start, at(2023, 1, 1, 10, 0, 0));
    assert_eq!(chat.date_range.end, at(2023, 1, 2, 10, 0, 0));
}

#[test]
fn test_ids_unique_and_sequential() {
    let log = "\
01/01/23, 09:00 - Alice: one
01/01/23, 09:01 - Bob: Bob left
01/01/23, 09:02 - Carol: three";

    let chat = parse_chat(log).unwrap();
    let ids: Vec<u64> = chat.messages.iter().map(|m| m.id).collect();
    // The filtered notice consumed id 2.
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_parse_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("WhatsApp Chat with Alice.txt");
    fs::write(
        &path,
        "12/05/23, 14:05 - Alice: Hello\r\nsecond line\r\n\r\n12/05/23, 14:06 - Bob: hi\r\n",
    )
    .unwrap();

    let chat = ChatParser::new().parse(&path).unwrap();
    assert_well_formed(&chat);
    assert_eq!(chat.messages[0].content, "Hello\nsecond line");
    assert_eq!(chat.messages[1].content, "hi");
}

#[test]
fn test_non_utf8_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"12/05/23, 14:05 - Jos\xe9: ol\xe1").unwrap();

    let err = ChatParser::new().parse(&path).unwrap_err();
    assert!(!err.is_unparseable());
    assert!(err.to_string().contains("latin1.txt"));
}

#[test]
fn test_parser_shared_across_threads() {
    let parser = std::sync::Arc::new(ChatParser::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = std::sync::Arc::clone(&parser);
            std::thread::spawn(move || {
                let log = format!("01/01/23, 09:0{i} - User{i}: message {i}");
                parser.parse_str(&log).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let chat = handle.join().unwrap();
        assert_eq!(chat.messages[0].sender, format!("User{i}"));
    }
}
