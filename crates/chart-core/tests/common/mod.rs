// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use glucose_chart_core::{DaySeries, Reading};

pub const MINUTE: f64 = 60_000.0;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;

/// 2024-03-05 12:00:00 UTC
pub fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap()
}

pub fn ms(dt: &DateTime<Utc>) -> f64 {
    dt.timestamp_millis() as f64
}

/// Sensor readings every five minutes ending at `end`.
pub fn sensor_run(end: f64, values: &[f64]) -> DaySeries {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Reading::sensor(end - (n - 1 - i) as f64 * 5.0 * MINUTE, *v))
        .collect()
}

/// Today plus yesterday, each a short run of readings.
pub fn two_days(now: f64) -> Vec<DaySeries> {
    vec![
        sensor_run(now, &[110.0, 120.0, 135.0, 150.0]),
        sensor_run(now - DAY, &[90.0, 95.0, 100.0]),
    ]
}
