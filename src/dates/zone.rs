//! Time-zone identifiers understood by the date formatters.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};

use crate::error::{Error, Result};

const SECONDS_PER_HOUR: i32 = 3600;
const SECONDS_PER_MINUTE: i32 = 60;

/// The zone a formatter reads and writes wall-clock times in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneSpec {
    /// The system time zone
    Local,
    /// A fixed offset from UTC
    Fixed(FixedOffset),
}

impl TimeZoneSpec {
    pub fn utc() -> Self {
        TimeZoneSpec::Fixed(Utc.fix())
    }

    /// Wall-clock time of the instant in this zone.
    pub fn to_naive_local(&self, date: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            TimeZoneSpec::Local => date.with_timezone(&Local).naive_local(),
            TimeZoneSpec::Fixed(offset) => date.with_timezone(offset).naive_local(),
        }
    }

    /// Instant for a wall-clock time in this zone.
    ///
    /// Times skipped by a daylight-saving transition have no instant; times
    /// repeated by one resolve to the earliest.
    pub fn from_naive_local(&self, naive: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            TimeZoneSpec::Local => Local
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            TimeZoneSpec::Fixed(offset) => offset
                .from_local_datetime(naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl fmt::Display for TimeZoneSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSpec::Local => write!(f, "local"),
            TimeZoneSpec::Fixed(offset) => write!(f, "UTC{}", offset),
        }
    }
}

/// Parses `±HH`, `±HHMM` or `±HH:MM` into seconds east of UTC.
fn parse_offset(text: &str) -> Option<i32> {
    let (sign, digits) = match text.chars().next()? {
        '+' => (1, &text[1..]),
        '-' => (-1, &text[1..]),
        _ => return None,
    };

    let digits = digits.replacen(':', "", 1);
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
    Some(sign * (hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE))
}

impl FromStr for TimeZoneSpec {
    type Err = Error;

    fn from_str(identifier: &str) -> Result<Self> {
        let unknown = || Error::UnknownTimeZone(identifier.to_string());
        let trimmed = identifier.trim();
        let upper = trimmed.to_ascii_uppercase();

        match upper.as_str() {
            "UTC" | "GMT" | "Z" => return Ok(TimeZoneSpec::utc()),
            "LOCAL" => return Ok(TimeZoneSpec::Local),
            _ => {}
        }

        let offset = upper
            .strip_prefix("UTC")
            .or_else(|| upper.strip_prefix("GMT"))
            .unwrap_or(&upper);

        parse_offset(offset)
            .and_then(FixedOffset::east_opt)
            .map(TimeZoneSpec::Fixed)
            .ok_or_else(unknown)
    }
}
