//! Headway records and summary statistics.

use serde::{Deserialize, Serialize};

/// Time between two successive departures, as reported by the data API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadwayRecord {
    /// Departure timestamp of the later vehicle (ISO-like, local time).
    pub current_dep_dt: String,
    /// Observed headway in seconds.
    pub headway_time_sec: f64,
    /// Scheduled headway in seconds, when a benchmark exists.
    #[serde(default)]
    pub benchmark_headway_time_sec: Option<f64>,
}

/// Mean headway in seconds. Zero for an empty series.
pub fn average_headway(records: &[HeadwayRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(|r| r.headway_time_sec).sum();
    total / records.len() as f64
}

/// Longest headway in seconds. Zero for an empty series.
pub fn longest_headway(records: &[HeadwayRecord]) -> f64 {
    records
        .iter()
        .map(|r| r.headway_time_sec)
        .fold(0.0, f64::max)
}

/// Whole minutes in `seconds`, rounded down.
pub fn seconds_to_minutes(seconds: f64) -> i64 {
    (seconds / 60.0).floor() as i64
}
