//! OpenWeatherMap icon codes to template icon names

use thiserror::Error;

/// A value the report needs is absent or has no known mapping
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The provider returned an icon code outside the mapping table
    #[error("Unknown icon code: '{0}'")]
    UnknownIcon(String),

    /// Fewer hourly records than the report addresses
    #[error("Missing hourly forecast at position {0}")]
    MissingHourly(usize),

    /// Fewer daily summaries than the report addresses
    #[error("Missing daily forecast at position {0}")]
    MissingDaily(usize),

    /// A day was folded without any condition entry
    #[error("Daily forecast at position {0} has no dominant icon")]
    MissingDailyIcon(usize),

    /// An observation or record carried no condition entry
    #[error("Missing condition entry for {0}")]
    MissingCondition(String),
}

/// Icon name used by the template when the sixth day is not in the window
pub const NOT_AVAILABLE_ICON: &str = "na";

/// Maps a provider icon code to the template's icon name.
///
/// Day (`d`) and night (`n`) variants share a name.
///
/// # Returns
/// * `Ok(&str)` - Icon name, e.g. "partlycloudy"
/// * `Err(LookupError::UnknownIcon)` - If the code is not in the table
pub fn map_icon(code: &str) -> Result<&'static str, LookupError> {
    let name = match code {
        "01d" | "01n" => "fair",
        "02d" | "02n" => "partlycloudy",
        "03d" | "03n" => "mostlycloudy",
        "04d" | "04n" => "overcast",
        "09d" | "09n" => "rain",
        "10d" | "10n" => "scatteredshowers",
        "11d" | "11n" => "thunderstorms",
        "13d" | "13n" => "snow",
        "50d" | "50n" => "mist",
        _ => return Err(LookupError::UnknownIcon(code.to_string())),
    };
    Ok(name)
}

/// Numeric part of an icon code, without the trailing day/night suffix.
///
/// Returns `None` for codes that are empty or not numeric.
pub fn icon_rank(code: &str) -> Option<u32> {
    let mut chars = code.chars();
    chars.next_back()?;
    chars.as_str().parse().ok()
}
