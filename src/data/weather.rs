//! OpenWeatherMap API client
//!
//! This module fetches the current conditions and the 5 day / 3 hour forecast
//! from the OpenWeatherMap 2.5 API and converts the responses into our
//! [`CurrentConditions`] and [`Forecast`] structures.

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{Condition, CurrentConditions, Forecast, HourlyRecord};
use crate::config::{Config, UnitSystem};

/// Base URL for the OpenWeatherMap API
const OPEN_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The API answered with a non-success status
    #[error("API returned status {status}: {message}")]
    ApiError { status: u16, message: String },
}

/// Client for fetching weather data from OpenWeatherMap
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    location: String,
    units: UnitSystem,
    lang: String,
}

impl WeatherClient {
    /// Create a new WeatherClient for the location and units in `config`
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: OPEN_WEATHER_BASE_URL.to_string(),
            api_key: config.api_key.clone(),
            location: config.location.clone(),
            units: config.units,
            lang: config.lang.clone(),
        }
    }

    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the request URL for an endpoint (`weather` or `forecast`)
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}?APPID={}&units={}&{}&lang={}",
            self.base_url,
            endpoint,
            self.api_key,
            self.units.as_query(),
            self.location,
            self.lang
        )
    }

    /// Fetch the body of an endpoint, mapping error statuses to `ApiError`
    async fn get_text(&self, endpoint: &str) -> Result<String, WeatherError> {
        let url = self.endpoint_url(endpoint);
        debug!("GET {}", redact_key(&url, &self.api_key));

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &text));
        }

        Ok(text)
    }

    /// Fetch the current conditions
    ///
    /// # Returns
    /// * `Ok(CurrentConditions)` - Conditions at the last observation
    /// * `Err(WeatherError)` - If the request or parsing fails
    pub async fn fetch_current(&self) -> Result<CurrentConditions, WeatherError> {
        let text = self.get_text("weather").await?;
        parse_current(&text)
    }

    /// Fetch the 5 day / 3 hour forecast
    ///
    /// # Returns
    /// * `Ok(Forecast)` - Records plus the location's UTC offset
    /// * `Err(WeatherError)` - If the request or parsing fails
    pub async fn fetch_forecast(&self) -> Result<Forecast, WeatherError> {
        let text = self.get_text("forecast").await?;
        parse_forecast(&text)
    }
}

/// Replace the API key in a URL so it can be logged
fn redact_key(url: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        url.to_string()
    } else {
        url.replace(api_key, "***")
    }
}

/// Build an `ApiError` from an error body, falling back to the raw text
fn api_error(status: u16, body: &str) -> WeatherError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.trim().to_string());
    WeatherError::ApiError { status, message }
}

/// Parse a `weather` response body
pub fn parse_current(text: &str) -> Result<CurrentConditions, WeatherError> {
    let response: CurrentResponse = serde_json::from_str(text)?;

    Ok(CurrentConditions {
        timestamp: response.dt,
        temp: response.main.temp,
        humidity: response.main.humidity,
        pressure: response.main.pressure,
        sunrise: response.sys.sunrise,
        sunset: response.sys.sunset,
        location: response.name,
        country: response.sys.country,
        conditions: response.weather.into_iter().map(Condition::from).collect(),
    })
}

/// Parse a `forecast` response body
pub fn parse_forecast(text: &str) -> Result<Forecast, WeatherError> {
    let response: ForecastResponse = serde_json::from_str(text)?;

    let records = response
        .list
        .into_iter()
        .map(|item| HourlyRecord {
            timestamp: item.dt,
            temp: item.main.temp,
            temp_min: item.main.temp_min,
            temp_max: item.main.temp_max,
            humidity: item.main.humidity,
            pressure: item.main.pressure,
            conditions: item.weather.into_iter().map(Condition::from).collect(),
            wind_speed: item.wind.speed,
            wind_bearing: item.wind.deg,
        })
        .collect();

    Ok(Forecast {
        timezone_offset: response.city.timezone,
        records,
    })
}

impl From<WeatherEntry> for Condition {
    fn from(entry: WeatherEntry) -> Self {
        Self {
            id: entry.id,
            icon: entry.icon,
            description: entry.description,
        }
    }
}

/// Error body returned with non-success statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// `weather` endpoint response
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    dt: i64,
    name: String,
    main: MainBlock,
    sys: SysBlock,
    weather: Vec<WeatherEntry>,
}

/// `forecast` endpoint response
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    city: CityBlock,
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct CityBlock {
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    main: MainBlock,
    weather: Vec<WeatherEntry>,
    wind: WindBlock,
}

/// Temperature, humidity and pressure block shared by both endpoints
#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct WeatherEntry {
    id: u32,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
    deg: f64,
}
