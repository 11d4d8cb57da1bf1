//! Command-line interface parsing for the weather stand generator
//!
//! Every flag is optional. Anything not given on the command line falls back
//! to the compile-time defaults in [`crate::config`].

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Weather stand - render OpenWeatherMap data into an SVG template
#[derive(Parser, Debug)]
#[command(name = "weather-stand")]
#[command(about = "Render current weather and a 5-day forecast into an SVG template")]
#[command(version)]
pub struct Cli {
    /// OpenWeatherMap API key
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Location query
    ///
    /// Examples:
    ///   q=London,uk          # city name and country code
    ///   id=2172797           # city id
    ///   lat=35&lon=139       # coordinates
    ///   zip=94040,us         # zip/post code
    #[arg(long, value_name = "QUERY")]
    pub location: Option<String>,

    /// Unit system: metric or imperial
    #[arg(long, value_name = "UNITS")]
    pub units: Option<String>,

    /// Clock convention: 12 or 24
    #[arg(long, value_name = "HOURS")]
    pub hour_format: Option<String>,

    /// Initial UTC offset in seconds, used until the forecast supplies one
    #[arg(long, value_name = "SECONDS", allow_hyphen_values = true)]
    pub time_shift: Option<i32>,

    /// Language for weather descriptions
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Template to render
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Where to write the rendered document
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the daily summaries as JSON
    #[arg(long)]
    pub print_daily: bool,
}

impl Config {
    /// Creates a Config from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(Config)` with CLI values layered over the defaults
    /// * `Err(ConfigError)` if the unit system or hour format is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        Ok(Config {
            api_key: cli.api_key.clone().unwrap_or(defaults.api_key),
            location: cli.location.clone().unwrap_or(defaults.location),
            units: match &cli.units {
                Some(units) => units.parse()?,
                None => defaults.units,
            },
            hour_format: match &cli.hour_format {
                Some(hours) => hours.parse()?,
                None => defaults.hour_format,
            },
            time_shift: cli.time_shift.unwrap_or(defaults.time_shift),
            lang: cli.lang.clone().unwrap_or(defaults.lang),
            template: cli.template.clone().unwrap_or(defaults.template),
            output: cli.output.clone().unwrap_or(defaults.output),
        })
    }
}
