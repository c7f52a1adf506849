//! Core data types for the dashboard
//!
//! - `TimeSeriesPoint`: one (label, value) observation plotted on the chart
//! - `SummaryMetric` and `DisplayValue`: the label/value pair behind a card
//! - `DashboardSnapshot`: one consistent set of card values and chart points
//! - `RawPoint`: an untrusted point awaiting validation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DashboardError, DashboardResult};

/// A single chart observation
///
/// Ordering is positional: the sequence a point sits in is chronological.
/// Neither labels nor values are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A precomputed card value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    /// Integer count, shown with thousands separators
    Count(u64),
    /// Already formatted text, shown verbatim
    Text(String),
}

impl DisplayValue {
    /// Text shown on the card
    pub fn format(&self) -> String {
        match self {
            DisplayValue::Count(n) => group_thousands(*n),
            DisplayValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl From<u64> for DisplayValue {
    fn from(n: u64) -> Self {
        DisplayValue::Count(n)
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        DisplayValue::Text(s.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(s: String) -> Self {
        DisplayValue::Text(s)
    }
}

/// Insert `,` every three digits from the right
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Label and value behind one summary card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetric {
    pub label: String,
    pub value: DisplayValue,
}

impl SummaryMetric {
    pub fn new(label: impl Into<String>, value: impl Into<DisplayValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Card values plus one bounded window of chart points
///
/// A snapshot is always replaced whole, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub summaries: Vec<SummaryMetric>,
    #[serde(default)]
    pub series: Vec<TimeSeriesPoint>,
}

impl DashboardSnapshot {
    /// Placeholder shown before any data has arrived
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty() && self.series.is_empty()
    }
}

/// A point as it arrives from an untrusted source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPoint {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl RawPoint {
    /// Validate into a chart point; `index` is only used for the error
    pub fn into_point(self, index: usize) -> DashboardResult<TimeSeriesPoint> {
        let malformed = |reason: &str| DashboardError::MalformedPoint {
            index,
            reason: reason.to_string(),
        };

        let label = self.label.ok_or_else(|| malformed("missing label"))?;
        let value = match self.value {
            None | Some(serde_json::Value::Null) => return Err(malformed("missing value")),
            Some(v) => v.as_f64().ok_or_else(|| malformed("value is not a number"))?,
        };
        if !value.is_finite() {
            return Err(malformed("value is not finite"));
        }

        Ok(TimeSeriesPoint { label, value })
    }

    /// Validate one element of an untrusted series, whatever its JSON shape
    pub fn parse_point(element: serde_json::Value, index: usize) -> DashboardResult<TimeSeriesPoint> {
        let raw: RawPoint =
            serde_json::from_value(element).map_err(|e| DashboardError::MalformedPoint {
                index,
                reason: e.to_string(),
            })?;
        raw.into_point(index)
    }
}

/// Outcome of validating a batch of raw points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedSeries {
    pub points: Vec<TimeSeriesPoint>,
    pub dropped: usize,
}

/// Validate a batch, dropping malformed points and keeping the rest in order.
///
/// Emits a single warning per batch regardless of how many points were dropped.
pub fn validate_points(raw: Vec<serde_json::Value>) -> ValidatedSeries {
    let mut points = Vec::with_capacity(raw.len());
    let mut first_error = None;
    let mut dropped = 0;

    for (index, element) in raw.into_iter().enumerate() {
        match RawPoint::parse_point(element, index) {
            Ok(p) => points.push(p),
            Err(e) => {
                dropped += 1;
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(err) = first_error {
        tracing::warn!(
            dropped,
            kept = points.len(),
            first = %err,
            "Dropped malformed time-series points"
        );
    }

    ValidatedSeries { points, dropped }
}
