//! ISO-8601 parsing and long-form date rendering.
//!
//! Rendering uses two fixed English patterns:
//!
//! | Pattern | Example                        |
//! |---------|--------------------------------|
//! | `PPP`   | `January 15th, 2024`           |
//! | `PPP p` | `January 15th, 2024 3:30 PM`   |
//!
//! Timestamps that carry an offset are shown in local time. Timestamps
//! without one are already local wall time and are rendered as written.

use std::fmt::Write;

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};
use thiserror::Error;

use crate::types::DateFormatOptions;

const LONG_TIME_PATTERN: &str = "%-I:%M %p";

/// Errors raised while parsing or rendering dates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The input is not a valid ISO-8601 date or datetime.
    #[error("Invalid time value: {0:?}")]
    InvalidTime(String),

    /// A custom pattern could not be rendered.
    #[error("Invalid format pattern: {0:?}")]
    InvalidPattern(String),
}

/// A date to render: either an ISO-8601 string or an already-parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput<'a> {
    Iso(&'a str),
    Parsed(NaiveDateTime),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        DateInput::Iso(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        DateInput::Iso(value.as_str())
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Parsed(value)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(value: NaiveDate) -> Self {
        DateInput::Parsed(value.and_time(NaiveTime::MIN))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::Parsed(value.with_timezone(&Local).naive_local())
    }
}

impl DateInput<'_> {
    fn resolve(self) -> Result<NaiveDateTime, DateError> {
        match self {
            DateInput::Iso(raw) => parse_iso(raw),
            DateInput::Parsed(value) => Ok(value),
        }
    }
}

/// Parse an ISO-8601 calendar date with optional time and offset.
///
/// Accepted shapes: `YYYY-MM-DD`, followed optionally by `T` (or a space),
/// `HH`, `HH:MM` or `HH:MM:SS[.fff]`, and optionally `Z` or `±HH[:MM]`.
pub fn parse_iso(raw: &str) -> Result<NaiveDateTime, DateError> {
    let invalid = || DateError::InvalidTime(raw.to_string());
    let trimmed = raw.trim();

    let (date_part, time_part) = match trimmed.find(['T', ' ']) {
        Some(idx) => (&trimmed[..idx], Some(&trimmed[idx + 1..])),
        None => (trimmed, None),
    };

    if date_part.len() != 10 {
        return Err(invalid());
    }
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| invalid())?;

    let Some(time_part) = time_part else {
        return Ok(date.and_time(NaiveTime::MIN));
    };

    let (clock, offset) = split_offset(time_part).ok_or_else(invalid)?;
    let time = parse_clock(clock).ok_or_else(invalid)?;
    let naive = date.and_time(time);

    match offset {
        None => Ok(naive),
        Some(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Local).naive_local())
            .ok_or_else(invalid),
    }
}

fn split_offset(time_part: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(clock) = time_part.strip_suffix(['Z', 'z']) {
        return Some((clock, FixedOffset::east_opt(0)));
    }

    let Some(idx) = time_part.rfind(['+', '-']) else {
        return Some((time_part, None));
    };

    let (clock, zone) = time_part.split_at(idx);
    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let digits: String = zone[1..].chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?;
    Some((clock, Some(offset)))
}

fn parse_clock(clock: &str) -> Option<NaiveTime> {
    match clock.len() {
        2 => NaiveTime::parse_from_str(&format!("{clock}:00"), "%H:%M").ok(),
        5 => NaiveTime::parse_from_str(clock, "%H:%M").ok(),
        len if len >= 8 => NaiveTime::parse_from_str(clock, "%H:%M:%S%.f").ok(),
        _ => None,
    }
}

/// Render as a long date, e.g. `January 15th, 2024`.
pub fn format_date<'a>(input: impl Into<DateInput<'a>>) -> Result<String, DateError> {
    let value = input.into().resolve()?;
    Ok(long_date(&value))
}

/// Render as a long date followed by the time, e.g. `January 15th, 2024 3:30 PM`.
pub fn format_date_time<'a>(input: impl Into<DateInput<'a>>) -> Result<String, DateError> {
    let value = input.into().resolve()?;
    Ok(format!(
        "{} {}",
        long_date(&value),
        value.format(LONG_TIME_PATTERN)
    ))
}

/// Render according to [`DateFormatOptions`].
///
/// A custom `format` is a `chrono` strftime pattern and wins over
/// `include_time`. Without either option this behaves like [`format_date`].
pub fn format_date_with<'a>(
    input: impl Into<DateInput<'a>>,
    options: &DateFormatOptions,
) -> Result<String, DateError> {
    let value = input.into().resolve()?;

    if let Some(pattern) = options.format.as_deref() {
        let mut out = String::new();
        write!(out, "{}", value.format(pattern))
            .map_err(|_| DateError::InvalidPattern(pattern.to_string()))?;
        return Ok(out);
    }

    if options.include_time.unwrap_or(false) {
        format_date_time(value)
    } else {
        Ok(long_date(&value))
    }
}

fn long_date(value: &NaiveDateTime) -> String {
    format!(
        "{} {}, {}",
        value.format("%B"),
        ordinal(value.day()),
        value.year()
    )
}

fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
