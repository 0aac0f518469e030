//! Final filtering and summary computation.

use crate::error::{ChatlensError, Result};
use crate::message::{ChatData, Message};
use crate::parsing::classify::is_system_notice;

/// Which messages the final pass removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Drop empty messages and system notices (strict path).
    Strict,
    /// Drop empty messages only (lenient path).
    Lenient,
}

/// Returns `true` if a finalized message survives the filter.
pub fn is_retained(message: &Message, mode: FilterMode) -> bool {
    let content = message.content.trim();
    if message.sender.is_empty() || content.is_empty() {
        return false;
    }
    mode == FilterMode::Lenient || !is_system_notice(content)
}

/// Filters finalized messages and builds the [`ChatData`] summary.
///
/// Fails with [`Diagnostic::AllFiltered`](crate::error::Diagnostic::AllFiltered)
/// when nothing survives.
pub fn aggregate(messages: Vec<Message>, mode: FilterMode) -> Result<ChatData> {
    let found = messages.len();
    let retained: Vec<Message> = messages
        .into_iter()
        .filter(|m| is_retained(m, mode))
        .collect();
    let discarded = found - retained.len();

    let chat =
        ChatData::from_messages(retained).ok_or_else(|| ChatlensError::all_filtered(found))?;

    tracing::info!(
        messages = chat.total_messages,
        participants = chat.participants.len(),
        media = chat.media_messages,
        discarded,
        "chat log parsed"
    );
    Ok(chat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Diagnostic;
    use crate::message::MessageType;
    use chrono::NaiveDate;

    fn msg(id: u64, sender: &str, content: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, id as u32)
            .unwrap();
        Message::new(id, ts, sender, content, MessageType::Text)
    }

    #[test]
    fn test_strict_drops_system_notices() {
        let chat = aggregate(
            vec![
                msg(1, "Alice", "Alice added Bob"),
                msg(2, "Bob", "hi all"),
                msg(3, "Carol", "   "),
            ],
            FilterMode::Strict,
        )
        .unwrap();

        assert_eq!(chat.total_messages, 1);
        assert_eq!(chat.messages[0].id, 2);
        assert!(!chat.participants.contains("Alice"));
    }

    #[test]
    fn test_lenient_keeps_system_notices() {
        let chat = aggregate(
            vec![msg(1, "Alice", "Alice added Bob"), msg(2, "", "orphan")],
            FilterMode::Lenient,
        )
        .unwrap();
        assert_eq!(chat.total_messages, 1);
        assert_eq!(chat.messages[0].sender, "Alice");
    }

    #[test]
    fn test_all_filtered_reports_count() {
        let err = aggregate(
            vec![msg(1, "Alice", "Bob left"), msg(2, "Bob", "Missed voice call")],
            FilterMode::Strict,
        )
        .unwrap_err();
        assert_eq!(
            err.diagnostic(),
            Some(Diagnostic::AllFiltered { discarded: 2 })
        );
    }
}
