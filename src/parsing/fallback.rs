//! Lenient recovery pass.
//!
//! Used only when no strict header rule matched anywhere in the input. A
//! single coarse pattern picks up `prefix - Name: text` lines, where the
//! prefix is any run of at least eight characters. A date and a time are
//! searched for inside the prefix; when either is missing or does not
//! resolve, the message is stamped with the clock's current time.
//!
//! There is no continuation support and no system-notice filtering here.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::config::ParserConfig;
use crate::message::Message;
use crate::parser::IdSource;
use crate::parsing::classify::classify;
use crate::parsing::datetime::resolve_timestamp;
use crate::parsing::sender::normalize_sender;

/// `prefix`, a `-`/`–` or `: ` separator, `sender:`, content.
///
/// A colon only separates when followed by whitespace so the colon inside
/// a `10:00` time is never taken for it.
static LENIENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.{8,}?)\s*(?:[-–]|:\s)\s*(.+?):\s*(.+)$").expect("valid lenient regex")
});
static EMBEDDED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4})").expect("valid embedded date regex")
});
static EMBEDDED_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}:\d{2})").expect("valid embedded time regex"));

/// Tries to locate and resolve a date and time anywhere inside `prefix`.
pub fn embedded_timestamp(prefix: &str, years: &RangeInclusive<i32>) -> Option<NaiveDateTime> {
    let date = EMBEDDED_DATE.find(prefix)?;
    let time = EMBEDDED_TIME.find(prefix)?;
    resolve_timestamp(date.as_str(), time.as_str(), years)
}

/// Recovers single-line messages from lines no strict rule accepted.
///
/// `now` stamps messages without a usable embedded date.
pub fn lenient_parse(
    lines: &[&str],
    config: &ParserConfig,
    now: NaiveDateTime,
    ids: &mut dyn IdSource,
) -> Vec<Message> {
    let years = config.years();
    let mut messages = Vec::new();

    for &line in lines {
        if line.chars().count() < config.min_lenient_line_len {
            continue;
        }
        let Some(caps) = LENIENT_LINE.captures(line) else {
            continue;
        };

        let prefix = &caps[1];
        let Some(sender) = normalize_sender(&caps[2]) else {
            continue;
        };
        let content = caps[3].trim();
        if content.is_empty() {
            continue;
        }

        let timestamp = embedded_timestamp(prefix, &years).unwrap_or_else(|| {
            tracing::warn!(prefix, "no resolvable date in recovered line, using current time");
            now
        });

        messages.push(Message::new(
            ids.next_id(),
            timestamp,
            sender,
            content,
            classify(content),
        ));
    }

    messages
}
