//! One generation run
//!
//! Fetches current conditions and the forecast (in that order), aggregates
//! the forecast into days, assembles the placeholder values and renders the
//! template. Each step completes before the next starts.

use log::info;
use thiserror::Error;

use crate::config::Config;
use crate::daily::{self, DailySummary};
use crate::data::{LookupError, WeatherClient, WeatherError};
use crate::render::{self, RenderError};
use crate::report;

/// Any failure that aborts a run
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Runs the whole pipeline and returns the daily summaries it rendered
pub async fn run(config: &Config) -> Result<Vec<DailySummary>, AppError> {
    let client = WeatherClient::new(config);

    info!("Fetching current conditions for {}", config.location);
    let current = client.fetch_current().await?;

    info!("Fetching forecast for {}", config.location);
    let forecast = client.fetch_forecast().await?;

    let offset = forecast.timezone_offset;
    if offset != config.time_shift {
        info!(
            "Using provider UTC offset {}s instead of {}s",
            offset, config.time_shift
        );
    }

    let daily = daily::aggregate(&forecast.records, offset);
    info!(
        "Aggregated {} forecast records into {} days",
        forecast.records.len(),
        daily.len()
    );

    let values = report::assemble(&current, &forecast.records, &daily, offset, config)?;
    render::render_file(&config.template, &config.output, &values)?;
    info!("Wrote {}", config.output.display());

    Ok(daily)
}
