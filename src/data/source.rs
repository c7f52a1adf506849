//! Snapshot sources
//!
//! A source returns the current snapshot of counts and a bounded window of
//! points, or reports that data is unavailable. The dashboard only ever ships
//! with [`MockSource`]; [`JsonSource`] validates a serialized snapshot the way
//! a live feed would have to.

use chrono::NaiveTime;
use serde::Deserialize;

use super::types::{validate_points, DashboardSnapshot, SummaryMetric, TimeSeriesPoint};
use crate::error::DashboardResult;

pub const TOTAL_EVENTS_LABEL: &str = "Total Events (Last 24h)";
pub const UNIQUE_USERS_LABEL: &str = "Unique Users";
pub const ACTIVE_WEBHOOKS_LABEL: &str = "Active Webhooks";

/// Anything that can produce a dashboard snapshot
pub trait SnapshotSource {
    /// Fetch the current snapshot
    fn fetch(&self) -> DashboardResult<DashboardSnapshot>;

    /// Name used in log output
    fn name(&self) -> &str {
        "source"
    }
}

/// Compile-time mock data
#[derive(Debug, Clone)]
pub struct MockSource {
    snapshot: DashboardSnapshot,
}

impl MockSource {
    pub fn new() -> Self {
        Self::with_series(vec![
            TimeSeriesPoint::new("00:00", 120.0),
            TimeSeriesPoint::new("01:00", 150.0),
            TimeSeriesPoint::new("02:00", 180.0),
        ])
    }

    /// Default summary cards with a custom chart series
    pub fn with_series(series: Vec<TimeSeriesPoint>) -> Self {
        Self {
            snapshot: DashboardSnapshot {
                summaries: default_summaries(),
                series,
            },
        }
    }

    /// A full day of hourly points labelled `00:00` through `23:00`
    pub fn hourly(start: f64, step: f64) -> Self {
        let series = (0..24u32)
            .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .enumerate()
            .map(|(i, time)| {
                TimeSeriesPoint::new(time.format("%H:%M").to_string(), start + step * i as f64)
            })
            .collect();
        Self::with_series(series)
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSource for MockSource {
    fn fetch(&self) -> DashboardResult<DashboardSnapshot> {
        Ok(self.snapshot.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn default_summaries() -> Vec<SummaryMetric> {
    vec![
        SummaryMetric::new(TOTAL_EVENTS_LABEL, 12_456u64),
        SummaryMetric::new(UNIQUE_USERS_LABEL, 8_921u64),
        SummaryMetric::new(ACTIVE_WEBHOOKS_LABEL, 23u64),
    ]
}

#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    summaries: Vec<SummaryMetric>,
    /// Elements are validated one by one so a bad one only costs itself
    #[serde(default)]
    series: Vec<serde_json::Value>,
}

/// Snapshot parsed from a JSON document
///
/// Malformed points are dropped; an unparsable document is reported as
/// unavailable data.
#[derive(Debug, Clone)]
pub struct JsonSource {
    document: String,
}

impl JsonSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl SnapshotSource for JsonSource {
    fn fetch(&self) -> DashboardResult<DashboardSnapshot> {
        let raw: RawSnapshot = serde_json::from_str(&self.document)?;
        let validated = validate_points(raw.series);

        Ok(DashboardSnapshot {
            summaries: raw.summaries,
            series: validated.points,
        })
    }

    fn name(&self) -> &str {
        "json"
    }
}
