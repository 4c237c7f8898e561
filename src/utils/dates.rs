// ABOUTME: Calendar helpers producing zero-padded YYYY-MM-DD strings and epoch timestamps
// ABOUTME: All values are computed from the local clock at call time

use crate::constants::defaults::YMD_FORMAT;
use chrono::{Duration, Local, NaiveDate, Utc};

/// Format a calendar date as zero-padded `YYYY-MM-DD`
#[must_use]
pub fn format_ymd(date: NaiveDate) -> String {
    date.format(YMD_FORMAT).to_string()
}

/// Today's date on the local clock
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Calendar date `days` days before `date`
#[must_use]
pub fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date - Duration::days(days)
}

/// `(start, end)` pair of `YYYY-MM-DD` strings covering the last `days` days
///
/// The clock is read once so both ends refer to the same "today".
#[must_use]
pub fn ymd_window(days: i64) -> (String, String) {
    let end = today();
    (format_ymd(days_before(end, days)), format_ymd(end))
}

/// Current Unix time in milliseconds
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current Unix time in seconds
#[must_use]
pub fn now_seconds() -> i64 {
    Utc::now().timestamp()
}
