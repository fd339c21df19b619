//! Timestamp fixtures in `yyyy-MM-dd HH:mm:ss` form.
//!
//! Fixture strings carry no zone and are read as UTC.

use crate::error::{HarnessError, HarnessResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::time::SystemTime;

/// chrono format equivalent to `yyyy-MM-dd HH:mm:ss`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a fixture timestamp.
pub fn parse_date_time(input: &str) -> HarnessResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(input, DATE_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| HarnessError::MalformedTimestamp {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a fixture timestamp, panicking at the caller on malformed input.
#[track_caller]
pub fn date_time(input: &str) -> DateTime<Utc> {
    match parse_date_time(input) {
        Ok(instant) => instant,
        Err(e) => panic!("{}", e),
    }
}

/// Same instant as [`date_time`], as a [`SystemTime`].
#[track_caller]
pub fn system_time(input: &str) -> SystemTime {
    SystemTime::from(date_time(input))
}
