//! Core data models for the weather stand
//!
//! This module contains the provider-facing types: the conditions observed
//! right now and the 3-hourly forecast records that feed the daily
//! aggregation.

pub mod icons;
pub mod weather;

pub use icons::{map_icon, LookupError};
pub use weather::{WeatherClient, WeatherError};

use serde::{Deserialize, Serialize};

/// One observed weather phenomenon as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Provider condition id (e.g. 500 for light rain)
    pub id: u32,
    /// Provider icon code: numeric prefix plus a `d`/`n` suffix (e.g. "10d")
    pub icon: String,
    /// Human-readable description in the requested language
    pub description: String,
}

/// A single forecast sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// UTC epoch seconds
    pub timestamp: i64,
    /// Average temperature
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Pressure in hPa
    pub pressure: f64,
    pub conditions: Vec<Condition>,
    pub wind_speed: f64,
    /// Wind bearing in degrees
    pub wind_bearing: f64,
}

/// Conditions at the time of the last observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Observation time, UTC epoch seconds
    pub timestamp: i64,
    pub temp: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Pressure in hPa
    pub pressure: f64,
    pub sunrise: i64,
    pub sunset: i64,
    /// Location name as resolved by the provider
    pub location: String,
    /// ISO 3166 country code
    pub country: String,
    pub conditions: Vec<Condition>,
}

/// The forecast window for the queried location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// The provider's UTC offset for the location, in seconds
    pub timezone_offset: i32,
    /// 3-hourly records in ascending time order
    pub records: Vec<HourlyRecord>,
}
