//! Weather Stand Library
//!
//! Turns OpenWeatherMap current conditions and the 5 day / 3 hour forecast
//! into a rendered SVG. This module exposes the building blocks for use in
//! integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod daily;
pub mod data;
pub mod render;
pub mod report;
pub mod time;
