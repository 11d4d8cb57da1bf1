//! Fixed-offset local time helpers
//!
//! Provider timestamps are UTC epochs. They are shifted by the location's UTC
//! offset into naive local moments, which are then bucketed by day and
//! formatted for the template.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use log::warn;

use crate::config::HourFormat;

/// Which part of a local moment to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Full weekday name, e.g. "Monday"
    Day,
    /// Hour of day, e.g. "4PM" or "16:00"
    Hour,
    /// Hour and minute, e.g. "04:05PM" or "16:05"
    Minute,
}

/// Converts a UTC epoch timestamp into a naive local moment.
///
/// Timestamps chrono cannot represent become 1970-01-01T00:00:00, and a shift
/// that would leave chrono's range keeps the UTC moment. Both cases are logged.
pub fn shift(epoch_seconds: i64, offset_seconds: i32) -> NaiveDateTime {
    let utc = match DateTime::from_timestamp(epoch_seconds, 0) {
        Some(utc) => utc.naive_utc(),
        None => {
            warn!("Timestamp {epoch_seconds} is out of range, using the epoch");
            NaiveDateTime::default()
        }
    };

    utc.checked_add_signed(Duration::seconds(i64::from(offset_seconds)))
        .unwrap_or_else(|| {
            warn!("Offset {offset_seconds}s overflows {utc}, keeping UTC");
            utc
        })
}

/// Local calendar date of a moment (the moment truncated to midnight)
pub fn truncate_to_day(moment: NaiveDateTime) -> NaiveDate {
    moment.date()
}

/// Local calendar date of a UTC epoch timestamp
pub fn local_date(epoch_seconds: i64, offset_seconds: i32) -> NaiveDate {
    truncate_to_day(shift(epoch_seconds, offset_seconds))
}

/// Renders a local moment for the template.
///
/// # Arguments
/// * `moment` - Local moment to render
/// * `unit` - Which part of the moment to show
/// * `hour_format` - 12- or 24-hour clock
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use weather_stand::config::HourFormat;
/// use weather_stand::time::{format, TimeUnit};
///
/// let moment = NaiveDate::from_ymd_opt(2024, 7, 15)
///     .unwrap()
///     .and_hms_opt(16, 5, 0)
///     .unwrap();
/// assert_eq!(format(moment, TimeUnit::Day, HourFormat::TwentyFour), "Monday");
/// assert_eq!(format(moment, TimeUnit::Hour, HourFormat::Twelve), "4PM");
/// assert_eq!(format(moment, TimeUnit::Minute, HourFormat::TwentyFour), "16:05");
/// ```
pub fn format(moment: NaiveDateTime, unit: TimeUnit, hour_format: HourFormat) -> String {
    let pattern = match (unit, hour_format) {
        (TimeUnit::Day, _) => "%A",
        (TimeUnit::Hour, HourFormat::Twelve) => "%-I%p",
        (TimeUnit::Hour, HourFormat::TwentyFour) => "%-H:%M",
        (TimeUnit::Minute, HourFormat::Twelve) => "%I:%M%p",
        (TimeUnit::Minute, HourFormat::TwentyFour) => "%-H:%M",
    };
    moment.format(pattern).to_string()
}

/// Full weekday name of a local date
pub fn day_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
