//! Hourly-to-daily forecast aggregation
//!
//! The forecast feed is a list of 3-hourly records. This module folds them
//! into one summary per local calendar day: temperature range, mean wind
//! bearing, wind speed range, a combined description and the icon that
//! represents the day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::icons::icon_rank;
use crate::data::{Condition, HourlyRecord};
use crate::time;

/// Finalized statistics for one local calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Local calendar date
    pub date: NaiveDate,
    /// Full weekday name, e.g. "Monday"
    pub day: String,
    /// Highest `temp_max` of the day
    pub high: f64,
    /// Lowest `temp_min` of the day
    pub low: f64,
    /// Mean wind bearing in degrees
    pub wind_bearing: f64,
    pub wind_max: f64,
    pub wind_min: f64,
    /// Distinct descriptions joined into one sentence
    pub description: String,
    /// Condition id behind `icon`
    pub condition_id: Option<u32>,
    /// Provider icon code chosen to represent the day
    pub icon: Option<String>,
}

/// Running statistics for a day that is still receiving records
#[derive(Debug, Clone)]
struct DailyBucket {
    day: String,
    high: f64,
    low: f64,
    /// Keyed by condition id; re-inserting an id keeps its first position
    conditions: IndexMap<u32, Condition>,
    bearing_sum: f64,
    bearing_count: u32,
    wind_max: f64,
    wind_min: f64,
}

impl DailyBucket {
    fn new(date: NaiveDate) -> Self {
        Self {
            day: time::day_name(date),
            high: f64::NEG_INFINITY,
            low: f64::INFINITY,
            conditions: IndexMap::new(),
            bearing_sum: 0.0,
            bearing_count: 0,
            wind_max: 0.0,
            wind_min: f64::INFINITY,
        }
    }

    fn fold(&mut self, record: &HourlyRecord) {
        self.high = self.high.max(record.temp_max);
        self.low = self.low.min(record.temp_min);

        for condition in &record.conditions {
            self.conditions.insert(condition.id, condition.clone());
        }

        self.bearing_sum += record.wind_bearing;
        self.bearing_count += 1;

        self.wind_max = self.wind_max.max(record.wind_speed);
        self.wind_min = self.wind_min.min(record.wind_speed);
    }

    fn finalize(self, date: NaiveDate) -> DailySummary {
        let dominant = dominant_condition(self.conditions.values());
        let description = capitalize(
            &self
                .conditions
                .values()
                .map(|c| c.description.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        );

        DailySummary {
            date,
            day: self.day,
            high: self.high,
            low: self.low,
            wind_bearing: self.bearing_sum / f64::from(self.bearing_count),
            wind_max: self.wind_max,
            wind_min: self.wind_min,
            description,
            condition_id: dominant.map(|c| c.id),
            icon: dominant.map(|c| c.icon.clone()),
        }
    }
}

/// Picks the condition whose icon code has the largest numeric prefix.
///
/// A later condition replaces the current pick only when its prefix is
/// strictly larger, so ties keep the first one seen. Codes without a numeric
/// prefix rank below every numeric one.
pub fn dominant_condition<'a, I>(conditions: I) -> Option<&'a Condition>
where
    I: IntoIterator<Item = &'a Condition>,
{
    let mut dominant: Option<&Condition> = None;
    for condition in conditions {
        let replace = match dominant {
            None => true,
            Some(current) => icon_rank(&current.icon) < icon_rank(&condition.icon),
        };
        if replace {
            dominant = Some(condition);
        }
    }
    dominant
}

/// Upper-cases the first character and lower-cases the rest
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Groups hourly records into local calendar days.
///
/// # Arguments
/// * `records` - Forecast records, in any order
/// * `offset_seconds` - UTC offset of the location
///
/// # Returns
/// One summary per distinct local date, ascending, so index 0 is the
/// nearest day.
///
/// # Example
///
/// ```
/// use weather_stand::daily::aggregate;
///
/// assert!(aggregate(&[], 7200).is_empty());
/// ```
pub fn aggregate(records: &[HourlyRecord], offset_seconds: i32) -> Vec<DailySummary> {
    let mut buckets: BTreeMap<NaiveDate, DailyBucket> = BTreeMap::new();

    for record in records {
        let date = time::local_date(record.timestamp, offset_seconds);
        buckets
            .entry(date)
            .or_insert_with(|| DailyBucket::new(date))
            .fold(record);
    }

    buckets
        .into_iter()
        .map(|(date, bucket)| bucket.finalize(date))
        .collect()
}
