use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::constants::date::DEFAULT_YEAR;
use crate::dates::cache::FormatSpec;
use crate::dates::locale::Locale;
use crate::dates::pattern::{self, Field, Item};
use crate::dates::zone::TimeZoneSpec;
use crate::debug;
use crate::error::Result;

/// A compiled pattern bound to a locale and a time zone.
///
/// Construction never fails: a formatter built from an invalid pattern or
/// an unknown time zone is inert, parsing nothing and formatting nothing.
#[derive(Debug)]
pub struct DateFormatter {
    spec: FormatSpec,
    locale: &'static Locale,
    compiled: Option<Compiled>,
}

#[derive(Debug)]
struct Compiled {
    items: Vec<Item>,
    zone: TimeZoneSpec,
}

impl DateFormatter {
    pub fn new(spec: &FormatSpec) -> Self {
        let locale = spec
            .locale
            .as_deref()
            .map_or(&crate::dates::locale::ENGLISH, Locale::resolve);

        let compiled = match Self::compile(spec) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                debug!("Inert date formatter: {}", e);
                None
            }
        };

        DateFormatter {
            spec: spec.clone(),
            locale,
            compiled,
        }
    }

    fn compile(spec: &FormatSpec) -> Result<Compiled> {
        let items = pattern::compile(&spec.pattern)?;
        let zone = match spec.time_zone.as_deref() {
            Some(identifier) => identifier.parse::<TimeZoneSpec>()?,
            None => TimeZoneSpec::Local,
        };
        Ok(Compiled { items, zone })
    }

    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    /// Whether the pattern and the time zone were both understood.
    pub fn is_valid(&self) -> bool {
        self.compiled.is_some()
    }

    /// Parses the whole text against the pattern.
    ///
    /// # Arguments
    /// * `text` - The text to parse, which must be consumed entirely
    ///
    /// # Returns
    /// The instant, or `None` if the text does not match or names an
    /// impossible date or time
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let compiled = self.compiled.as_ref()?;
        let mut parsed = ParsedFields::default();
        let mut rest = text;

        for item in &compiled.items {
            rest = match item {
                Item::Literal(literal) => rest.strip_prefix(literal.as_str())?,
                Item::Field(field) => parsed.read(*field, rest, self.locale)?,
            };
        }
        if !rest.is_empty() {
            return None;
        }

        compiled.zone.from_naive_local(&parsed.to_naive()?)
    }

    /// Formats the instant with the pattern, in the formatter's time zone.
    ///
    /// # Returns
    /// The formatted text, or `None` for an inert formatter
    pub fn format(&self, date: &DateTime<Utc>) -> Option<String> {
        let compiled = self.compiled.as_ref()?;
        let local = compiled.zone.to_naive_local(date);
        let mut result = String::new();

        for item in &compiled.items {
            match item {
                Item::Literal(literal) => result.push_str(literal),
                Item::Field(field) => self.write_field(&mut result, *field, &local),
            }
        }
        Some(result)
    }

    fn write_field(&self, out: &mut String, field: Field, local: &NaiveDateTime) {
        let month = local.month0() as usize;
        let weekday = local.weekday().num_days_from_monday() as usize;
        let hour12 = match local.hour() % 12 {
            0 => 12,
            h => h,
        };

        let text = match field {
            Field::Year4 => format!("{:04}", local.year()),
            Field::Year2 => format!("{:02}", local.year().rem_euclid(100)),
            Field::Year => local.year().to_string(),
            Field::MonthName => self.locale.months[month].to_string(),
            Field::MonthAbbr => self.locale.months_short[month].to_string(),
            Field::Month2 => format!("{:02}", local.month()),
            Field::Month => local.month().to_string(),
            Field::Day2 => format!("{:02}", local.day()),
            Field::Day => local.day().to_string(),
            Field::WeekdayName => self.locale.weekdays[weekday].to_string(),
            Field::WeekdayAbbr => self.locale.weekdays_short[weekday].to_string(),
            Field::Hour24Padded => format!("{:02}", local.hour()),
            Field::Hour24 => local.hour().to_string(),
            Field::Hour12Padded => format!("{:02}", hour12),
            Field::Hour12 => hour12.to_string(),
            Field::AmPm => self.locale.am_pm[(local.hour() >= 12) as usize].to_string(),
            Field::Minute2 => format!("{:02}", local.minute()),
            Field::Minute => local.minute().to_string(),
            Field::Second2 => format!("{:02}", local.second()),
            Field::Second => local.second().to_string(),
            // Leap seconds carry nanoseconds past 1e9
            Field::Millis => format!("{:03}", (local.nanosecond() / 1_000_000).min(999)),
        };
        out.push_str(&text);
    }
}

/// Field values collected while parsing.
#[derive(Debug, Default)]
struct ParsedFields {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour24: Option<u32>,
    hour12: Option<u32>,
    pm: Option<bool>,
    minute: Option<u32>,
    second: Option<u32>,
    millis: Option<u32>,
}

/// Reads between `min` and `max` ASCII digits, as many as available.
fn read_digits(text: &str, min: usize, max: usize) -> Option<(u32, &str)> {
    let len = text
        .bytes()
        .take(max)
        .take_while(|b| b.is_ascii_digit())
        .count();
    if len < min {
        return None;
    }
    let value = text[..len].parse().ok()?;
    Some((value, &text[len..]))
}

/// Matches the longest of `names` at the start of the text, ignoring case.
fn read_name<'t>(text: &'t str, names: &[&str]) -> Option<(usize, &'t str)> {
    names
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let len = name.chars().count();
            let end = text.char_indices().nth(len).map_or(text.len(), |(i, _)| i);
            let candidate = &text[..end];
            (candidate.chars().count() == len && candidate.to_lowercase() == name.to_lowercase())
                .then_some((index, end))
        })
        .max_by_key(|(_, end)| *end)
        .map(|(index, end)| (index, &text[end..]))
}

impl ParsedFields {
    fn read<'t>(&mut self, field: Field, text: &'t str, locale: &Locale) -> Option<&'t str> {
        let (value, rest) = match field {
            Field::Year4 => read_digits(text, 4, 4)?,
            Field::Year2 => read_digits(text, 2, 2)?,
            Field::Year => read_digits(text, 1, 4)?,
            Field::Month2
            | Field::Day2
            | Field::Hour24Padded
            | Field::Hour12Padded
            | Field::Minute2
            | Field::Second2 => read_digits(text, 2, 2)?,
            Field::Month | Field::Day | Field::Hour24 | Field::Hour12 | Field::Minute | Field::Second => {
                read_digits(text, 1, 2)?
            }
            Field::Millis => read_digits(text, 3, 3)?,
            Field::MonthName => {
                let (index, rest) = read_name(text, &locale.months)?;
                (index as u32 + 1, rest)
            }
            Field::MonthAbbr => {
                let (index, rest) = read_name(text, &locale.months_short)?;
                (index as u32 + 1, rest)
            }
            Field::WeekdayName => (0, read_name(text, &locale.weekdays)?.1),
            Field::WeekdayAbbr => (0, read_name(text, &locale.weekdays_short)?.1),
            Field::AmPm => {
                let (index, rest) = read_name(text, &locale.am_pm)?;
                (index as u32, rest)
            }
        };

        match field {
            Field::Year4 | Field::Year => self.year = Some(value as i32),
            Field::Year2 => self.year = Some(2000 + value as i32),
            Field::MonthName | Field::MonthAbbr | Field::Month2 | Field::Month => {
                self.month = Some(value)
            }
            Field::Day2 | Field::Day => self.day = Some(value),
            Field::Hour24Padded | Field::Hour24 => self.hour24 = Some(value),
            Field::Hour12Padded | Field::Hour12 => self.hour12 = Some(value),
            Field::AmPm => self.pm = Some(value == 1),
            Field::Minute2 | Field::Minute => self.minute = Some(value),
            Field::Second2 | Field::Second => self.second = Some(value),
            Field::Millis => self.millis = Some(value),
            Field::WeekdayName | Field::WeekdayAbbr => {}
        }
        Some(rest)
    }

    fn hour(&self) -> Option<u32> {
        match (self.hour24, self.hour12) {
            (Some(hour), _) => Some(hour),
            (None, Some(hour)) if (1..=12).contains(&hour) => {
                let base = hour % 12;
                Some(if self.pm == Some(true) { base + 12 } else { base })
            }
            (None, Some(_)) => None,
            (None, None) => Some(0),
        }
    }

    fn to_naive(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(
            self.year.unwrap_or(DEFAULT_YEAR),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
        )?;
        let time = NaiveTime::from_hms_milli_opt(
            self.hour()?,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.millis.unwrap_or(0),
        )?;
        Some(date.and_time(time))
    }
}
