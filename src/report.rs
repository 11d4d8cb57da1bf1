//! Placeholder values for the template
//!
//! Collects the current conditions, the next five forecast records and the
//! next five days into an ordered map of placeholder token to rendered value.

use indexmap::IndexMap;
use log::warn;

use crate::config::Config;
use crate::daily::DailySummary;
use crate::data::icons::NOT_AVAILABLE_ICON;
use crate::data::{map_icon, Condition, CurrentConditions, HourlyRecord, LookupError};
use crate::time::{self, TimeUnit};

/// hPa to mmHg
pub const HPA_TO_MMHG: f64 = 0.750_061_575_845_66;

/// Number of forecast records and days shown by the template
pub const SLOTS: usize = 5;

/// Placeholder token to value, in substitution order
pub type Placeholders = IndexMap<String, String>;

/// Rounds half to even, so 2.5 becomes 2 and 3.5 becomes 4
pub fn round_temp(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Converts hPa to whole mmHg
pub fn pressure_mmhg(hpa: f64) -> i64 {
    (hpa * HPA_TO_MMHG).round() as i64
}

/// Builds the placeholder map for one run.
///
/// # Arguments
/// * `current` - Current conditions
/// * `hourly` - Forecast records, nearest first
/// * `daily` - Daily summaries from [`crate::daily::aggregate`]
/// * `offset_seconds` - The provider's UTC offset for the location
/// * `config` - Unit system and hour format
///
/// # Returns
/// * `Ok(Placeholders)` with every token the template uses
/// * `Err(LookupError)` if a required record, day or icon is missing
pub fn assemble(
    current: &CurrentConditions,
    hourly: &[HourlyRecord],
    daily: &[DailySummary],
    offset_seconds: i32,
    config: &Config,
) -> Result<Placeholders, LookupError> {
    let hour_format = config.hour_format;
    let local = |epoch: i64, unit: TimeUnit| {
        time::format(time::shift(epoch, offset_seconds), unit, hour_format)
    };

    let now = current
        .conditions
        .first()
        .ok_or_else(|| LookupError::MissingCondition("current conditions".to_string()))?;
    let today = daily.first().ok_or(LookupError::MissingDaily(0))?;

    let mut values = Placeholders::new();
    let mut set = |key: &str, value: String| {
        values.insert(key.to_string(), value);
    };

    set("VAR_SUNRISE", local(current.sunrise, TimeUnit::Hour));
    set("VAR_SUNSET", local(current.sunset, TimeUnit::Hour));
    set("VER_NOW_HUMIDITY", current.humidity.to_string());
    set("VER_NOW_PRESSURE", pressure_mmhg(current.pressure).to_string());
    set("VER_NOW_DESCRIPTION", now.description.clone());
    set("VAR_TEMP_UNIT", config.units.temperature_label().to_string());
    set("VAR_SPEED_UNIT", config.units.speed_label().to_string());
    set(
        "VAR_LOCATION",
        format!("{}, {}", current.location, current.country),
    );
    set("VAR_UPDATE_TIME", local(current.timestamp, TimeUnit::Minute));
    set("VAR_NOW_ICON", map_icon(&now.icon)?.to_string());
    set("VAR_NOW_TEMP", round_temp(current.temp).to_string());
    set("VAR_TODAY_HIGH", round_temp(today.high).to_string());
    set("VAR_TODAY_LOW", round_temp(today.low).to_string());

    for slot in 1..=SLOTS {
        let record = hourly
            .get(slot - 1)
            .ok_or(LookupError::MissingHourly(slot - 1))?;
        let condition = last_condition(record, slot - 1)?;

        set(
            &format!("VAR_HOURLY_{slot}_ICON"),
            map_icon(&condition.icon)?.to_string(),
        );
        set(
            &format!("VAR_HOURLY_{slot}_TIME"),
            local(record.timestamp, TimeUnit::Hour),
        );
        set(
            &format!("VAR_HOURLY_{slot}_TEMP"),
            round_temp(record.temp).to_string(),
        );
    }

    for slot in 1..=SLOTS {
        let fields = daily
            .get(slot)
            .ok_or(LookupError::MissingDaily(slot))
            .and_then(|day| daily_fields(day, slot));

        // Any lookup failure on the last slot falls back to placeholders
        let fields = match fields {
            Ok(fields) => fields,
            Err(err) if slot == SLOTS => {
                warn!("Day {slot} unavailable ({err}), using defaults");
                DailyFields::not_available()
            }
            Err(err) => return Err(err),
        };

        set(&format!("VAR_DAILY_{slot}_ICON"), fields.icon);
        set(&format!("VAR_DAILY_{slot}_DAY"), fields.day);
        set(&format!("VAR_DAILY_{slot}_HIGH"), fields.high.to_string());
        set(&format!("VAR_DAILY_{slot}_LOW"), fields.low.to_string());
    }

    Ok(values)
}

/// The condition shown for a forecast record is the last one listed
fn last_condition(record: &HourlyRecord, index: usize) -> Result<&Condition, LookupError> {
    record
        .conditions
        .last()
        .ok_or_else(|| LookupError::MissingCondition(format!("hourly forecast {index}")))
}

/// Rendered values of one daily slot
#[derive(Debug, Clone, PartialEq, Eq)]
struct DailyFields {
    icon: String,
    day: String,
    high: i64,
    low: i64,
}

impl DailyFields {
    /// Values for a day beyond the forecast window
    fn not_available() -> Self {
        Self {
            icon: NOT_AVAILABLE_ICON.to_string(),
            day: String::new(),
            high: 0,
            low: 0,
        }
    }
}

fn daily_fields(day: &DailySummary, index: usize) -> Result<DailyFields, LookupError> {
    let icon = day
        .icon
        .as_deref()
        .ok_or(LookupError::MissingDailyIcon(index))?;

    Ok(DailyFields {
        icon: map_icon(icon)?.to_string(),
        day: day.day.clone(),
        high: round_temp(day.high),
        low: round_temp(day.low),
    })
}
