//! Time-series chart
//!
//! Scales, the monotone line path and the full chart geometry.

pub mod curve;
pub mod geometry;
pub mod scale;

pub use curve::{monotone_path, to_svg_path, PathCommand, Point};
pub use geometry::{
    AxisTick, ChartGeometry, ChartStyle, GridLine, Margin, Marker, PlotArea, Tooltip,
    EMPTY_CAPTION,
};
pub use scale::{format_tick, tick_step, AxisDomain, LinearScale, PointScale};
