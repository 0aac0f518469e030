//! Header line recognition.
//!
//! Exports from different app versions and locales write the message header
//! in different shapes. Each known shape is a [`HeaderRule`]; the
//! [`HeaderEngine`] tries them in declared priority order and the first rule
//! that yields a valid date, sender and non-empty content wins.
//!
//! A rule whose regex matches but whose captures are unusable does not stop
//! the search. It reports [`RuleOutcome::Rejected`] and the next, looser rule
//! gets a chance at the same line.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::config::ParserConfig;
use crate::message::Message;
use crate::parsing::classify::classify;
use crate::parsing::datetime::resolve_timestamp;
use crate::parsing::sender::normalize_sender;

/// Known header line shapes, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderRule {
    /// `[12/05/23, 14:05:09] Alice: Hello`
    Bracketed,
    /// `12/05/2023, 14:05 - Alice: Hello`
    DashSeparated,
    /// `12/05/23 14:05 - Alice: Hello`
    SpaceSeparated,
    /// `5/12/23, 2:05 PM - Alice: Hello`
    TwelveHour,
    /// `12.05.23, 14:05 - Alice: Hello`
    Dotted,
    /// `2023-05-12 14:05:09 - Alice: Hello`
    Iso,
    /// `12-05-2023 14:05 - Alice: Hello`
    DashedDate,
    /// `12/05/23 14:05 Alice: Hello`
    Unbracketed,
    /// `12/05/23 at 14:05 - Alice: Hello`
    AtInfixed,
    /// Any separated date, a time, an optional dash, then `Name: text`
    Generic,
}

impl HeaderRule {
    /// Returns the regex pattern for this rule.
    ///
    /// Capture groups are always date, time, sender, content.
    pub fn pattern(self) -> &'static str {
        match self {
            HeaderRule::Bracketed => {
                r"(?i)^\[(\d{1,2}/\d{1,2}/\d{2,4}),?\s+(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)\]\s*([^:]+?):\s*(.*)$"
            }
            HeaderRule::DashSeparated => {
                r"(?i)^(\d{1,2}/\d{1,2}/\d{2,4}),?\s+(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)\s*[-–]\s*([^:]+?):\s*(.*)$"
            }
            HeaderRule::SpaceSeparated => {
                r"(?i)^(\d{1,2}/\d{1,2}/\d{2,4})\s+(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)\s*[-–]\s*([^:]+?):\s*(.*)$"
            }
            HeaderRule::TwelveHour => {
                r"(?i)^(\d{1,2}/\d{1,2}/\d{2,4}),?\s+(\d{1,2}:\d{2}(?::\d{2})?\s?[AP]M)\s*[-–]\s*([^:]+?):\s*(.*)$"
            }
            HeaderRule::Dotted => {
                r"(?i)^(\d{1,2}\.\d{1,2}\.\d{2,4}),?\s+(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)\s*[-–]\s*([^:]+?):\s*(.*)$"
            }
            HeaderRule::Iso => {
                r"(?i)^(\d{4}-\d{1,2}-\d{1,2})\s+(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)\s*[-–]\s*([^:]+?):\s*(.*)$"
            }
            HeaderRule::DashedDate => {
                r"(?i)^(\d{1,2}-\d{1,2}-\d{2,4})\s+(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)\s*[-–]\s*([^:]+?):\s*(.*)$"
            }
            HeaderRule::Unbracketed => {
                r"(?i)^(\d{1,2}/\d{1,2}/\d{2,4})\s+(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)\s+([^:]+?):\s*(.*)$"
            }
            HeaderRule::AtInfixed => {
                r"(?i)^(\d{1,2}/\d{1,2}/\d{2,4})\s+(?:at\s+)?(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)\s*[-–]\s*([^:]+?):\s*(.*)$"
            }
            HeaderRule::Generic => {
                r"(?i)^(\d{1,4}[/\-.]\d{1,2}[/\-.]\d{1,4})[,\s]*(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AP]M)?)\s*[-–]?\s*([^:]+?):\s*(.*)$"
            }
        }
    }

    /// Returns all rules in priority order.
    pub fn all() -> &'static [HeaderRule] {
        &[
            HeaderRule::Bracketed,
            HeaderRule::DashSeparated,
            HeaderRule::SpaceSeparated,
            HeaderRule::TwelveHour,
            HeaderRule::Dotted,
            HeaderRule::Iso,
            HeaderRule::DashedDate,
            HeaderRule::Unbracketed,
            HeaderRule::AtInfixed,
            HeaderRule::Generic,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            HeaderRule::Bracketed => "bracketed",
            HeaderRule::DashSeparated => "dash-separated",
            HeaderRule::SpaceSeparated => "space-separated",
            HeaderRule::TwelveHour => "twelve-hour",
            HeaderRule::Dotted => "dotted",
            HeaderRule::Iso => "iso",
            HeaderRule::DashedDate => "dashed-date",
            HeaderRule::Unbracketed => "unbracketed",
            HeaderRule::AtInfixed => "at-infixed",
            HeaderRule::Generic => "generic",
        }
    }

    fn regex(self) -> &'static Regex {
        // Discriminants follow the order of `all()`.
        &COMPILED[self as usize]
    }

    /// Evaluates this rule against one line.
    pub fn evaluate(self, line: &str, years: &RangeInclusive<i32>) -> RuleOutcome {
        let Some(caps) = self.regex().captures(line) else {
            return RuleOutcome::NoMatch;
        };

        let date = caps.get(1).map_or("", |m| m.as_str());
        let time = caps.get(2).map_or("", |m| m.as_str());
        let sender = caps.get(3).map_or("", |m| m.as_str());
        let content = caps.get(4).map_or("", |m| m.as_str()).trim();

        let Some(timestamp) = resolve_timestamp(date, time, years) else {
            return RuleOutcome::Rejected(Rejection::Date);
        };
        let Some(sender) = normalize_sender(sender) else {
            return RuleOutcome::Rejected(Rejection::Sender);
        };
        if content.is_empty() {
            return RuleOutcome::Rejected(Rejection::EmptyContent);
        }

        RuleOutcome::Matched(HeaderMatch {
            rule: self,
            timestamp,
            sender,
            content: content.to_string(),
        })
    }
}

impl std::fmt::Display for HeaderRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    HeaderRule::all()
        .iter()
        .map(|rule| Regex::new(rule.pattern()).expect("valid header regex"))
        .collect()
});

/// Why a syntactically matching rule was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Date or time did not resolve to an accepted timestamp.
    Date,
    /// Sender was empty after normalization.
    Sender,
    /// Nothing followed the sender.
    EmptyContent,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Date => write!(f, "unresolvable date"),
            Rejection::Sender => write!(f, "empty sender"),
            Rejection::EmptyContent => write!(f, "empty content"),
        }
    }
}

/// Result of trying one rule on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The line does not have this rule's shape.
    NoMatch,
    /// The shape matched but the captured data is unusable.
    Rejected(Rejection),
    /// A valid header.
    Matched(HeaderMatch),
}

/// Validated captures of a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub rule: HeaderRule,
    pub timestamp: NaiveDateTime,
    pub sender: String,
    pub content: String,
}

impl HeaderMatch {
    /// Opens a new message from these captures.
    pub fn into_message(self, id: u64) -> Message {
        let kind = classify(&self.content);
        Message::new(id, self.timestamp, self.sender, self.content, kind)
    }
}

/// Tries every [`HeaderRule`] against a line in priority order.
#[derive(Debug, Clone)]
pub struct HeaderEngine {
    years: RangeInclusive<i32>,
}

impl HeaderEngine {
    pub fn new(years: RangeInclusive<i32>) -> Self {
        Self { years }
    }

    /// Returns the first valid header match for the line, if any rule wins.
    pub fn match_line(&self, line: &str) -> Option<HeaderMatch> {
        for &rule in HeaderRule::all() {
            match rule.evaluate(line, &self.years) {
                RuleOutcome::Matched(found) => return Some(found),
                RuleOutcome::Rejected(reason) => {
                    tracing::debug!(rule = %rule, %reason, line, "header rule rejected line");
                }
                RuleOutcome::NoMatch => {}
            }
        }
        None
    }
}

impl Default for HeaderEngine {
    fn default() -> Self {
        Self::new(ParserConfig::DEFAULT_MIN_YEAR..=ParserConfig::DEFAULT_MAX_YEAR)
    }
}
