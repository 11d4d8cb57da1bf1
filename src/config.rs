//! Run parameters for the weather stand generator
//!
//! Every parameter has a compile-time default. The command line may override
//! any of them (see [`crate::cli`]).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// OpenWeatherMap API key
pub const DEFAULT_API_KEY: &str = "";

/// Location query appended to every request.
///
/// Accepted forms:
/// - city name and ISO 3166 country code: `q=London,uk`
/// - city id: `id=2172797`
/// - coordinates: `lat=35&lon=139`
/// - zip/post code: `zip=94040,us`
pub const DEFAULT_LOCATION: &str = "lat=50.24&lon=24.14";

/// Initial UTC offset guess in seconds, replaced by the provider's value
pub const DEFAULT_TIME_SHIFT: i32 = 7200;

/// Language for provider descriptions
pub const DEFAULT_LANG: &str = "ua";

/// Template read on every run
pub const DEFAULT_TEMPLATE: &str = "weather-template.svg";

/// Output overwritten on every run
pub const DEFAULT_OUTPUT: &str = "/tmp/weather-latest.svg";

/// Errors raised while validating run parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid unit system: '{0}'. Valid unit systems: metric, imperial")]
    InvalidUnits(String),

    #[error("Invalid hour format: '{0}'. Valid hour formats: 12, 24")]
    InvalidHourFormat(String),
}

/// Unit system requested from the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Value of the `units` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Temperature unit label shown in the template
    pub fn temperature_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "C",
            UnitSystem::Imperial => "F",
        }
    }

    /// Wind speed unit label
    pub fn speed_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/s",
            UnitSystem::Imperial => "mph",
        }
    }
}

impl FromStr for UnitSystem {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(ConfigError::InvalidUnits(s.to_string())),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

/// Clock convention used when formatting hours and minutes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HourFormat {
    /// 11:59PM
    Twelve,
    /// 23:59
    #[default]
    TwentyFour,
}

impl FromStr for HourFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "12" => Ok(HourFormat::Twelve),
            "24" => Ok(HourFormat::TwentyFour),
            _ => Err(ConfigError::InvalidHourFormat(s.to_string())),
        }
    }
}

/// Parameters for a single generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub location: String,
    pub units: UnitSystem,
    pub hour_format: HourFormat,
    /// Offset used until the forecast response supplies the real one
    pub time_shift: i32,
    pub lang: String,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            units: UnitSystem::default(),
            hour_format: HourFormat::default(),
            time_shift: DEFAULT_TIME_SHIFT,
            lang: DEFAULT_LANG.to_string(),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
