//! # Eventdash
//!
//! View model for the Realtime Event Analytics Dashboard: three summary cards
//! and an events-over-time line chart.
//!
//! Everything in this crate is a pure function of its inputs. The browser
//! front-end (`eventdash-ui`) walks the [`DashboardView`] produced here and
//! draws it; no layout or chart math lives in the UI layer.
//!
//! ## Modules
//!
//! - [`data`]: time-series points, summary metrics, snapshot sources and store
//! - [`chart`]: scales, monotone line path and chart geometry
//! - [`theme`]: light/dark palettes and the type scale
//! - [`layout`]: responsive container and 12-column grid
//! - [`view`]: the render function and view descriptions
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use eventdash::{render_dashboard, Config, MockSource, SnapshotStore};
//!
//! let config = Config::default();
//! let mut store = SnapshotStore::new();
//! store.refresh(&MockSource::new());
//!
//! let view = render_dashboard(&config.theme(), &store.current(), &config);
//! assert_eq!(view.cards.len(), 3);
//! assert_eq!(view.chart.geometry.x_ticks.len(), 3);
//! ```

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod layout;
pub mod theme;
pub mod view;

// Re-export top-level types for convenience
pub use chart::{AxisDomain, AxisTick, ChartGeometry, ChartStyle, Marker, PlotArea, Tooltip};

pub use config::{
    generate_default_config, ChartConfig, Config, ConfigError, DashboardConfig, LoggingConfig,
    ThemeConfig,
};

pub use data::{
    DashboardSnapshot, DisplayValue, Freshness, JsonSource, MockSource, SnapshotSource,
    SnapshotStore, SummaryMetric, TimeSeriesPoint,
};

pub use error::{DashboardError, DashboardResult};

pub use layout::{Breakpoint, GridSpan, LayoutContainer};

pub use theme::{Palette, Theme, ThemeMode, Typography};

pub use view::{render_dashboard, ChartPanelView, DashboardView, SummaryCardView};
