use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::planner::constants::DATE_KEY_FORMAT;

/// Storage key (`yyyy-mm-dd`) for a calendar day.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Today's local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Storage key for today's local date.
pub fn today_key() -> String {
    format_date_key(today())
}

pub fn try_parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT).ok()
}

/// Parse a date key, falling back to today when it is malformed.
pub fn parse_date_key(key: &str) -> NaiveDate {
    try_parse_date_key(key).unwrap_or_else(|| {
        warn!(key, "unparseable date key, using today");
        today()
    })
}
