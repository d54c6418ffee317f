//! Day-spec parsing: keywords, weekday names, and ISO dates.
//!
//! Anything unparseable falls back to today rather than failing; a typo'd
//! day should degrade to a useful report, not an error.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Resolve a day spec against a reference date.
///
/// Accepted forms: `today`, `tomorrow`, a weekday name (`monday`, `fri`,
/// ...; resolves to the next occurrence, counting today), or `YYYY-MM-DD`.
pub fn parse_day(spec: &str, today: NaiveDate) -> NaiveDate {
    let spec = spec.trim().to_lowercase();
    match spec.as_str() {
        "today" => today,
        "tomorrow" => today + Duration::days(1),
        _ => {
            if let Ok(weekday) = spec.parse::<Weekday>() {
                return next_occurrence(today, weekday);
            }
            NaiveDate::parse_from_str(&spec, "%Y-%m-%d").unwrap_or(today)
        }
    }
}

fn next_occurrence(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (weekday.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7;
    today + Duration::days(i64::from(ahead))
}
