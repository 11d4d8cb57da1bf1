//! Integration tests for the hourly-to-daily aggregation

use weather_stand::daily::aggregate;
use weather_stand::data::{Condition, HourlyRecord};

/// 2024-07-15T00:00:00Z
const DAY_START: i64 = 1_721_001_600;
const HOUR: i64 = 3600;
const DAY: i64 = 24 * HOUR;

fn condition(id: u32, icon: &str, description: &str) -> Condition {
    Condition {
        id,
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

fn record(timestamp: i64, temp_min: f64, temp_max: f64, bearing: f64) -> HourlyRecord {
    HourlyRecord {
        timestamp,
        temp: (temp_min + temp_max) / 2.0,
        temp_min,
        temp_max,
        humidity: 55,
        pressure: 1015.0,
        conditions: vec![condition(800, "01d", "clear sky")],
        wind_speed: 4.0,
        wind_bearing: bearing,
    }
}

#[test]
fn test_two_days_of_four_records() {
    let day_one = [10.0, 12.0, 14.0, 9.0];
    let day_two = [20.0, 22.0, 24.0, 19.0];

    let mut records = Vec::new();
    for (i, temp) in day_one.iter().enumerate() {
        records.push(record(DAY_START + 3 * HOUR * i as i64, *temp, *temp, 90.0));
    }
    for (i, temp) in day_two.iter().enumerate() {
        records.push(record(DAY_START + DAY + 3 * HOUR * i as i64, *temp, *temp, 90.0));
    }

    let daily = aggregate(&records, 0);
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].high, 14.0);
    assert_eq!(daily[0].low, 9.0);
    assert_eq!(daily[1].high, 24.0);
    assert_eq!(daily[1].low, 19.0);
}

#[test]
fn test_one_summary_per_local_day_in_order() {
    // Five days of 3-hourly records starting mid-afternoon
    let records: Vec<HourlyRecord> = (0..40)
        .map(|i| record(DAY_START + 15 * HOUR + i * 3 * HOUR, 5.0, 8.0, 0.0))
        .collect();

    let daily = aggregate(&records, 7200);
    // 17:00 local on day one through 14:00 local on day six
    assert_eq!(daily.len(), 6);
    for pair in daily.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
    assert_eq!(daily[0].day, "Monday");
    assert_eq!(daily[5].day, "Saturday");
}

#[test]
fn test_high_and_low_bound_every_record() {
    let temps = [(3.0, 7.5), (-1.5, 2.0), (6.0, 11.25), (0.0, 0.5)];
    let records: Vec<HourlyRecord> = temps
        .iter()
        .enumerate()
        .map(|(i, (min, max))| record(DAY_START + 3 * HOUR * i as i64, *min, *max, 0.0))
        .collect();

    let daily = aggregate(&records, 0);
    assert_eq!(daily.len(), 1);
    for r in &records {
        assert!(daily[0].high >= r.temp_max);
        assert!(daily[0].low <= r.temp_min);
    }
    assert_eq!(daily[0].high, 11.25);
    assert_eq!(daily[0].low, -1.5);
}

#[test]
fn test_wind_bearing_is_mean() {
    let bearings = [10.0, 350.0, 200.0, 45.5];
    let records: Vec<HourlyRecord> = bearings
        .iter()
        .enumerate()
        .map(|(i, b)| record(DAY_START + 3 * HOUR * i as i64, 1.0, 2.0, *b))
        .collect();

    let daily = aggregate(&records, 0);
    let mean = bearings.iter().sum::<f64>() / bearings.len() as f64;
    assert!((daily[0].wind_bearing - mean).abs() < 1e-9);
}

#[test]
fn test_description_follows_first_appearance() {
    let mut first = record(DAY_START, 1.0, 2.0, 0.0);
    first.conditions = vec![condition(804, "04d", "overcast clouds")];
    let mut second = record(DAY_START + 3 * HOUR, 1.0, 2.0, 0.0);
    second.conditions = vec![
        condition(600, "13d", "light snow"),
        condition(804, "04d", "overcast clouds"),
    ];
    let mut third = record(DAY_START + 6 * HOUR, 1.0, 2.0, 0.0);
    third.conditions = vec![condition(701, "50d", "Mist")];

    let daily = aggregate(&[first, second, third], 0);
    assert_eq!(daily[0].description, "Overcast clouds, light snow, mist");
    assert_eq!(daily[0].icon.as_deref(), Some("50d"));
    assert_eq!(daily[0].condition_id, Some(701));
}

#[test]
fn test_dominant_icon_is_deterministic() {
    let mut a = record(DAY_START, 1.0, 2.0, 0.0);
    a.conditions = vec![
        condition(520, "09d", "light intensity shower rain"),
        condition(301, "09n", "drizzle"),
    ];
    let mut b = record(DAY_START + 3 * HOUR, 1.0, 2.0, 0.0);
    b.conditions = vec![condition(802, "03d", "scattered clouds")];
    let records = vec![a, b];

    let first = aggregate(&records, 0);
    let second = aggregate(&records, 0);
    assert_eq!(first, second);
    // 09d and 09n tie, the first one seen is kept
    assert_eq!(first[0].icon.as_deref(), Some("09d"));
    assert_eq!(first[0].condition_id, Some(520));
}

#[test]
fn test_negative_offset_moves_records_back_a_day() {
    // 02:00Z on the 15th is the evening of the 14th at UTC-7
    let records = vec![
        record(DAY_START + 2 * HOUR, 1.0, 2.0, 0.0),
        record(DAY_START + 8 * HOUR, 3.0, 4.0, 0.0),
    ];

    let daily = aggregate(&records, -7 * 3600);
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].day, "Sunday");
    assert_eq!(daily[1].day, "Monday");
}
