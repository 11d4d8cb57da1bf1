//! Weather Stand - render current weather and a 5-day forecast into an SVG
//!
//! Fetches OpenWeatherMap data for the configured location, folds the 3-hourly
//! forecast into days and writes the filled-in template.

use clap::Parser;

use weather_stand::app;
use weather_stand::cli::Cli;
use weather_stand::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let daily = app::run(&config).await?;

    if cli.print_daily {
        println!("{}", serde_json::to_string_pretty(&daily)?);
    }

    Ok(())
}
