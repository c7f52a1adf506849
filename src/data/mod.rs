//! Dashboard data
//!
//! Data model, snapshot sources and the last-known snapshot store.

pub mod source;
pub mod store;
pub mod types;

pub use source::{
    JsonSource, MockSource, SnapshotSource, ACTIVE_WEBHOOKS_LABEL, TOTAL_EVENTS_LABEL,
    UNIQUE_USERS_LABEL,
};
pub use store::{Freshness, SnapshotStore};
pub use types::{
    validate_points, DashboardSnapshot, DisplayValue, RawPoint, SummaryMetric, TimeSeriesPoint,
    ValidatedSeries,
};
