//! Service-date handling.
//!
//! Dates travel through URLs as canonical `YYYY-MM-DD` strings. Date
//! pickers and hand-edited URLs deliver other shapes, which are normalized
//! here before they reach the query string.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Timelike};

/// Canonical date format used in URLs and upstream requests.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Service runs past midnight; trips before this hour belong to the
/// previous service day.
pub const SERVICE_DAY_START_HOUR: u32 = 3;

/// Date formats accepted from user input, tried in order.
const INPUT_FORMATS: [&str; 2] = [DATE_FORMAT, "%m/%d/%Y"];

/// Normalize a user-facing date into the canonical `YYYY-MM-DD` form.
///
/// Accepts `YYYY-MM-DD`, `MM/DD/YYYY` and RFC 3339 timestamps (the date
/// is taken in the timestamp's own offset). Returns `None` for anything
/// else.
///
/// # Examples
///
/// ```
/// use dashboard_server::domain::offset_date;
///
/// assert_eq!(offset_date("2023-02-01").as_deref(), Some("2023-02-01"));
/// assert_eq!(offset_date("02/01/2023").as_deref(), Some("2023-02-01"));
/// assert_eq!(offset_date("not a date"), None);
/// ```
pub fn offset_date(input: &str) -> Option<String> {
    parse_date(input).map(format_date)
}

/// Parse a date in any accepted input shape.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for format in INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date);
        }
    }

    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Format a date in the canonical form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The service date that `now` falls in.
pub fn current_service_date(now: NaiveDateTime) -> NaiveDate {
    if now.hour() < SERVICE_DAY_START_HOUR {
        (now - Duration::days(1)).date()
    } else {
        now.date()
    }
}
