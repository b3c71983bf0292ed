//! Human-friendly descriptions of an instant relative to another.

use chrono::{DateTime, Duration, Utc};

use crate::dates::formatter::DateFormatter;
use crate::dates::locale::{Locale, RelativeUnit};
use crate::dates::zone::TimeZoneSpec;

/// Describes `date` relative to `now`, e.g. "5 minutes ago" or "in 2 days".
///
/// The largest unit with a whole count of at least one is used. Differences
/// below one second read as the locale's "now".
pub fn relative_phrase(date: &DateTime<Utc>, now: &DateTime<Utc>, locale: &Locale) -> String {
    let seconds = date.signed_duration_since(*now).num_seconds();
    let magnitude = seconds.unsigned_abs();
    if magnitude == 0 {
        return locale.now.to_string();
    }

    let unit = RelativeUnit::ALL
        .iter()
        .rev()
        .find(|unit| magnitude >= unit.seconds() as u64)
        .copied()
        .unwrap_or(RelativeUnit::Second);
    let count = magnitude / unit.seconds() as u64;
    let amount = format!("{} {}", count, locale.unit_name(unit, count));

    let template = if seconds < 0 { locale.past } else { locale.future };
    template.replace("{}", &amount)
}

/// The locale's "Today" or "Yesterday" label when `date` falls on the same
/// or the previous calendar day as `now` in `zone`, otherwise the date
/// formatted with `formatter`.
pub fn smart_phrase(
    date: &DateTime<Utc>,
    now: &DateTime<Utc>,
    zone: &TimeZoneSpec,
    formatter: &DateFormatter,
) -> String {
    let day = zone.to_naive_local(date).date();
    let today = zone.to_naive_local(now).date();

    if day == today {
        formatter.locale().today.to_string()
    } else if today.checked_sub_signed(Duration::days(1)) == Some(day) {
        formatter.locale().yesterday.to_string()
    } else {
        formatter.format(date).unwrap_or_default()
    }
}
