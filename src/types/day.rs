use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::errors::DateError;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Truncates a timestamp received as text to its calendar day.
///
/// Offset timestamps keep the day as written; no timezone conversion is applied.
pub fn parse_day(value: &str) -> Result<NaiveDate, DateError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(DateError::Empty);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(timestamp.date());
        }
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| DateError::Unrecognized(value.to_string()))
}
