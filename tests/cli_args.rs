//! Integration tests for CLI argument handling
//!
//! Only argument validation is exercised here; these runs fail before any
//! network request is made.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_weather-stand"))
        .args(args)
        .output()
        .expect("Failed to execute weather-stand")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("weather-stand"), "Help should mention weather-stand");
    assert!(stdout.contains("--units"), "Help should mention --units flag");
    assert!(stdout.contains("--template"), "Help should mention --template flag");
}

#[test]
fn test_invalid_units_prints_error_and_exits() {
    let output = run_cli(&["--units", "kelvin"]);
    assert!(!output.status.success(), "Expected invalid units to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("kelvin"),
        "Should print error message about invalid units: {}",
        stderr
    );
}

#[test]
fn test_invalid_hour_format_prints_error_and_exits() {
    let output = run_cli(&["--hour-format", "36"]);
    assert!(!output.status.success(), "Expected invalid hour format to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("36"), "Should mention the bad value: {}", stderr);
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = run_cli(&["--no-such-flag"]);
    assert!(!output.status.success());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use weather_stand::cli::Cli;
    use weather_stand::config::{Config, HourFormat, UnitSystem};

    #[test]
    fn test_cli_units_and_hours() {
        let cli = Cli::parse_from(["weather-stand", "--units", "metric", "--hour-format", "24"]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.units, UnitSystem::Metric);
        assert_eq!(config.hour_format, HourFormat::TwentyFour);
    }

    #[test]
    fn test_cli_location_with_ampersand() {
        let cli = Cli::parse_from(["weather-stand", "--location", "lat=35&lon=139"]);
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.location, "lat=35&lon=139");
    }
}
