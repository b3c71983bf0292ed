//! Date parsing and formatting through cached, locale-aware formatters.
//!
//! Every function that takes an optional locale or time zone falls back to
//! the process-wide configuration (see [`ConfigManager`]) when it is
//! omitted. A configuration without a time zone means the system zone.
//!
//! # Examples
//!
//! ```
//! use stringkit::dates::{format_date, parse_date};
//!
//! let date = parse_date("2023-01-15", "yyyy-MM-dd", None, Some("UTC")).unwrap();
//! assert_eq!(format_date(&date, "dd/MM/yyyy", None, Some("UTC")), "15/01/2023");
//! assert!(parse_date("2023-13-45", "yyyy-MM-dd", None, None).is_none());
//! ```

pub mod cache;
pub mod formatter;
pub mod locale;
pub mod pattern;
pub mod relative;
pub mod zone;

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use strum_macros::Display;

use crate::config_manager::ConfigManager;
use crate::constants::date::ISO8601_FORMAT;
use crate::debug;
use crate::error::Error;
use crate::regex_utils;

pub use cache::{FormatSpec, FormatterCache};
pub use formatter::DateFormatter;
pub use locale::Locale;
pub use zone::TimeZoneSpec;

/// Pattern fields that `extract_dates` turns into digit classes, longest
/// first
static EXTRACT_FIELDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"yyyy|MM|dd|HH|mm|ss").unwrap());

/// Length of a localized date representation.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DateStyle {
    Short,
    Medium,
    Long,
    Full,
}

impl DateStyle {
    fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for DateStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(DateStyle::Short),
            "medium" => Ok(DateStyle::Medium),
            "long" => Ok(DateStyle::Long),
            "full" => Ok(DateStyle::Full),
            _ => Err(Error::Msg(format!("Unknown date style \"{}\"", s))),
        }
    }
}

/// Returns the cached formatter for the pattern, filling the locale and the
/// time zone from the configuration when omitted.
pub fn formatter(format: &str, locale: Option<&str>, time_zone: Option<&str>) -> Arc<DateFormatter> {
    let defaults = ConfigManager::get().snapshot().defaults;
    let spec = FormatSpec {
        pattern: format.to_string(),
        locale: Some(locale.map_or(defaults.locale, String::from)),
        time_zone: time_zone.map(String::from).or(defaults.time_zone),
    };
    FormatterCache::shared().get(&spec)
}

/// The zone a formatter built with the same arguments would use.
fn zone_or_default(time_zone: Option<&str>) -> TimeZoneSpec {
    let identifier = time_zone
        .map(String::from)
        .or_else(|| ConfigManager::get().snapshot().defaults.time_zone);
    match identifier {
        Some(identifier) => identifier.parse().unwrap_or_else(|e| {
            debug!("{}, using the local zone", e);
            TimeZoneSpec::Local
        }),
        None => TimeZoneSpec::Local,
    }
}

/// Parses `text` strictly against `format`.
///
/// # Arguments
/// * `text` - The text holding the date, consumed entirely
/// * `format` - The date pattern
/// * `locale` - Locale for month and weekday names
/// * `time_zone` - Zone the text's wall-clock time is in
///
/// # Returns
/// The instant, or `None` when the text does not match, the date does not
/// exist or the pattern is invalid
pub fn parse_date(
    text: &str,
    format: &str,
    locale: Option<&str>,
    time_zone: Option<&str>,
) -> Option<DateTime<Utc>> {
    formatter(format, locale, time_zone).parse(text)
}

/// Formats `date` with `format`. An invalid pattern or time zone yields an
/// empty string.
pub fn format_date(
    date: &DateTime<Utc>,
    format: &str,
    locale: Option<&str>,
    time_zone: Option<&str>,
) -> String {
    formatter(format, locale, time_zone)
        .format(date)
        .unwrap_or_default()
}

/// Whether `text` parses with `format`.
pub fn is_valid_date(text: &str, format: &str, locale: Option<&str>) -> bool {
    parse_date(text, format, locale, None).is_some()
}

/// Builds the search expression for `extract_dates`: numeric fields become
/// digit classes, everything else is matched literally.
fn extraction_pattern(format: &str) -> String {
    let mut pattern = String::new();
    let mut last = 0;
    for field in EXTRACT_FIELDS.find_iter(format) {
        pattern.push_str(&regex::escape(&format[last..field.start()]));
        pattern.push_str(if field.as_str() == "yyyy" { "[0-9]{4}" } else { "[0-9]{2}" });
        last = field.end();
    }
    pattern.push_str(&regex::escape(&format[last..]));
    pattern
}

/// Finds every date written with `format` in the text, left to right.
/// Candidates that do not parse are skipped.
///
/// # Examples
///
/// ```
/// use stringkit::dates::extract_dates;
///
/// let dates = extract_dates("Meeting on 2023-05-15 and follow-up on 2023-05-20", "yyyy-MM-dd");
/// assert_eq!(dates.len(), 2);
/// assert!(dates[0] < dates[1]);
/// ```
pub fn extract_dates(text: &str, format: &str) -> Vec<DateTime<Utc>> {
    let formatter = formatter(format, None, None);
    regex_utils::extract_matches(text, &extraction_pattern(format))
        .iter()
        .filter_map(|candidate| formatter.parse(candidate))
        .collect()
}

/// Describes `date` relative to the current time, e.g. "5 minutes ago".
pub fn to_relative_string(date: &DateTime<Utc>, locale: Option<&str>) -> String {
    to_relative_string_from(date, &Utc::now(), locale)
}

/// Describes `date` relative to `now`.
pub fn to_relative_string_from(
    date: &DateTime<Utc>,
    now: &DateTime<Utc>,
    locale: Option<&str>,
) -> String {
    let locale = match locale {
        Some(locale) => Locale::resolve(locale),
        None => Locale::resolve(&ConfigManager::get().snapshot().defaults.locale),
    };
    relative::relative_phrase(date, now, locale)
}

/// "Today", "Yesterday" or the date formatted with `format`.
pub fn to_smart_date_string(date: &DateTime<Utc>, format: &str) -> String {
    to_smart_date_string_at(date, format, &Utc::now(), None)
}

/// "Today" or "Yesterday" relative to `now`, in the configured time zone,
/// otherwise the date formatted with `format`.
pub fn to_smart_date_string_at(
    date: &DateTime<Utc>,
    format: &str,
    now: &DateTime<Utc>,
    locale: Option<&str>,
) -> String {
    let formatter = formatter(format, locale, None);
    relative::smart_phrase(date, now, &zone_or_default(None), &formatter)
}

/// `yyyy-MM-dd'T'HH:mm:ss'Z'` in UTC, without fractional seconds.
pub fn to_iso8601_string(date: &DateTime<Utc>) -> String {
    format_date(date, ISO8601_FORMAT, Some("en"), Some("UTC"))
}

/// Parses `yyyy-MM-dd'T'HH:mm:ss'Z'` as UTC.
pub fn parse_iso8601(text: &str) -> Option<DateTime<Utc>> {
    parse_date(text, ISO8601_FORMAT, Some("en"), Some("UTC"))
}

/// Formats `date` with the locale's pattern for `style`.
pub fn to_localized_string(date: &DateTime<Utc>, style: DateStyle, locale: Option<&str>) -> String {
    let pattern = match locale {
        Some(locale) => Locale::resolve(locale).styles[style.index()],
        None => Locale::resolve(&ConfigManager::get().snapshot().defaults.locale).styles[style.index()],
    };
    format_date(date, pattern, locale, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_parse_and_format() {
        let date = parse_date("2023-01-15", "yyyy-MM-dd", Some("en_US"), Some("UTC")).unwrap();
        assert_eq!(date, utc(2023, 1, 15, 0, 0, 0));
        assert_eq!(format_date(&date, "dd.MM.yyyy", Some("en_US"), Some("UTC")), "15.01.2023");
        assert_eq!(format_date(&date, "yyyy-QQ", Some("en_US"), Some("UTC")), "");
    }

    #[test]
    fn test_round_trip_in_local_zone() {
        let date = utc(2023, 7, 4, 10, 30, 0);
        let text = format_date(&date, "yyyy-MM-dd HH:mm:ss", None, Some("local"));
        assert_eq!(parse_date(&text, "yyyy-MM-dd HH:mm:ss", None, Some("local")), Some(date));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2023-01-15", "yyyy-MM-dd", None));
        assert!(is_valid_date("2020-02-29", "yyyy-MM-dd", None));
        assert!(is_valid_date("15/01/2023", "dd/MM/yyyy", None));
        assert!(!is_valid_date("2023-13-45", "yyyy-MM-dd", None));
        assert!(!is_valid_date("2023/01/15", "yyyy-MM-dd", None));
        assert!(!is_valid_date("2021-02-29", "yyyy-MM-dd", None));
        assert!(!is_valid_date("not a date", "yyyy-MM-dd", None));
        assert!(!is_valid_date("", "yyyy-MM-dd", None));
        assert!(is_valid_date("janvier 15, 2023", "MMMM dd, yyyy", Some("fr_FR")));
    }

    #[test]
    fn test_extraction_pattern() {
        assert_eq!(extraction_pattern("yyyy-MM-dd"), r"[0-9]{4}\-[0-9]{2}\-[0-9]{2}");
        assert_eq!(extraction_pattern("dd.MM.yyyy"), r"[0-9]{2}\.[0-9]{2}\.[0-9]{4}");
        assert_eq!(extraction_pattern("HH:mm:ss"), "[0-9]{2}:[0-9]{2}:[0-9]{2}");
    }

    #[test]
    fn test_extraction_pattern_ascii_digits_only() {
        let pattern = extraction_pattern("yyyy-MM-dd");
        assert!(regex_utils::extract_matches("٢٠٢٣-٠١-١٥", &pattern).is_empty());
        assert_eq!(
            regex_utils::extract_matches("٢٠٢٣-٠١-١٥ or 2023-01-15", &pattern),
            vec!["2023-01-15".to_string()]
        );
        assert_eq!(extract_dates("٢٠٢٣-٠١-١٥ or 2023-01-15", "yyyy-MM-dd").len(), 1);
    }

    #[test]
    fn test_extract_dates() {
        let text = "Meeting on 2023-05-15 and follow-up on 2023-05-20";
        let dates = extract_dates(text, "yyyy-MM-dd");
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0], parse_date("2023-05-15", "yyyy-MM-dd", None, None).unwrap());
        assert_eq!(dates[1], parse_date("2023-05-20", "yyyy-MM-dd", None, None).unwrap());

        assert!(extract_dates("No dates here", "yyyy-MM-dd").is_empty());
        assert!(extract_dates("", "yyyy-MM-dd").is_empty());
        // Well-formed but impossible dates are dropped
        assert_eq!(extract_dates("2023-13-45 then 2023-01-02", "yyyy-MM-dd").len(), 1);
    }

    #[test]
    fn test_iso8601() {
        let date = utc(2023, 5, 15, 14, 30, 45);
        assert_eq!(to_iso8601_string(&date), "2023-05-15T14:30:45Z");
        assert_eq!(parse_iso8601("2023-05-15T14:30:45Z"), Some(date));
        assert_eq!(to_iso8601_string(&(date + Duration::milliseconds(500))), "2023-05-15T14:30:45Z");
        assert_eq!(parse_iso8601("2023-05-15 14:30:45"), None);
        assert_eq!(parse_iso8601("2023-05-15T14:30:45+02:00"), None);
    }

    #[test]
    fn test_relative_string_from() {
        let now = utc(2023, 6, 15, 12, 0, 0);
        assert_eq!(
            to_relative_string_from(&(now - Duration::minutes(5)), &now, Some("en")),
            "5 minutes ago"
        );
        assert_eq!(
            to_relative_string_from(&(now + Duration::days(2)), &now, Some("en")),
            "in 2 days"
        );
        assert_eq!(to_relative_string_from(&now, &now, Some("en")), "now");
    }

    #[test]
    fn test_relative_string_against_clock() {
        let past = Utc::now() - Duration::hours(3);
        assert_eq!(to_relative_string(&past, Some("en_US")), "3 hours ago");
    }

    #[test]
    fn test_smart_date_string_at() {
        let now = utc(2023, 6, 15, 12, 0, 0);
        assert_eq!(to_smart_date_string_at(&now, "yyyy-MM-dd", &now, Some("en")), "Today");
        assert_eq!(
            to_smart_date_string_at(&(now - Duration::days(1)), "yyyy-MM-dd", &now, Some("de")),
            "Gestern"
        );
        let old = utc(2023, 1, 10, 12, 0, 0);
        let expected = format_date(&old, "yyyy-MM-dd", Some("en"), None);
        assert_eq!(to_smart_date_string_at(&old, "yyyy-MM-dd", &now, Some("en")), expected);
    }

    #[test]
    fn test_smart_date_string_outside_recent_days() {
        let old = utc(2020, 3, 1, 12, 0, 0);
        assert_eq!(
            to_smart_date_string(&old, "yyyy-MM-dd"),
            format_date(&old, "yyyy-MM-dd", None, None)
        );
    }

    #[test]
    fn test_localized_string() {
        let date = utc(2023, 1, 15, 12, 0, 0);
        let cases = [
            (DateStyle::Short, "en", "1/15/23"),
            (DateStyle::Medium, "en", "Jan 15, 2023"),
            (DateStyle::Long, "en", "January 15, 2023"),
            (DateStyle::Full, "en", "Sunday, January 15, 2023"),
            (DateStyle::Long, "fr", "15 janvier 2023"),
            (DateStyle::Medium, "de", "15.01.2023"),
            (DateStyle::Long, "es", "15 de enero de 2023"),
            (DateStyle::Long, "ru", "15 января 2023 г."),
        ];
        for (style, locale, expected) in cases {
            assert_eq!(to_localized_string(&date, style, Some(locale)), expected);
        }
    }

    #[test]
    fn test_date_style_names() {
        assert_eq!(DateStyle::Medium.to_string(), "medium");
        assert_eq!("FULL".parse::<DateStyle>().unwrap(), DateStyle::Full);
        assert!("tiny".parse::<DateStyle>().is_err());
    }
}
