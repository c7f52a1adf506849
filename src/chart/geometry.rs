//! Chart geometry
//!
//! `ChartGeometry::layout` turns an ordered point sequence into everything the
//! chart panel draws: axis ticks, gridlines, the line path, point markers and
//! the data behind hover tooltips. It is a pure function of its inputs and is
//! recomputed on every render.

use super::curve::{monotone_path, to_svg_path, PathCommand, Point};
use super::scale::{format_tick, AxisDomain, LinearScale, PointScale, MAX_TICK_COUNT};
use crate::config::ChartConfig;
use crate::data::TimeSeriesPoint;

/// Caption drawn over an empty chart
pub const EMPTY_CAPTION: &str = "No data";

/// Space reserved around the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 5.0,
            right: 30.0,
            bottom: 5.0,
            left: 20.0,
        }
    }
}

/// Drawing parameters for the line chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub dot_radius: f64,
    pub grid_dash: String,
    pub tick_count: usize,
    pub include_zero: bool,
    pub margin: Margin,
    /// Width reserved for y tick labels
    pub y_axis_width: f64,
    /// Height reserved for x tick labels
    pub x_axis_height: f64,
}

impl ChartStyle {
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            stroke: config.stroke.clone(),
            stroke_width: config.stroke_width,
            dot_radius: config.dot_radius,
            tick_count: config.tick_count.clamp(1, MAX_TICK_COUNT),
            include_zero: config.include_zero,
            ..Self::default()
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            stroke: "#8884d8".to_string(),
            stroke_width: 2.0,
            dot_radius: 3.0,
            grid_dash: "3 3".to_string(),
            tick_count: 5,
            include_zero: true,
            margin: Margin::default(),
            y_axis_width: 60.0,
            x_axis_height: 30.0,
        }
    }
}

/// Rectangle the data is drawn in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Labelled tick on either axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub label: String,
    /// x for the category axis, y for the value axis
    pub position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
}

/// Dot drawn on a data point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub center: Point,
}

/// Tooltip content for one point
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub label: String,
    pub value: f64,
    /// Where the tooltip is anchored
    pub anchor: Point,
}

/// Everything the chart panel draws
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub plot: PlotArea,
    pub y_domain: AxisDomain,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub grid: Vec<GridLine>,
    pub path: Vec<PathCommand>,
    pub markers: Vec<Marker>,
    points: Vec<TimeSeriesPoint>,
    x_scale: PointScale,
}

impl ChartGeometry {
    /// Lay out `points` in a `width` x `height` box.
    ///
    /// Points keep their given order on the x axis; labels are neither sorted
    /// nor deduplicated.
    pub fn layout(points: &[TimeSeriesPoint], style: &ChartStyle, width: f64, height: f64) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);

        let left = style.margin.left + style.y_axis_width;
        let top = style.margin.top;
        let plot = PlotArea {
            left,
            top,
            width: (width - left - style.margin.right).max(0.0),
            height: (height - top - style.margin.bottom - style.x_axis_height).max(0.0),
        };

        let y_domain = AxisDomain::fit(
            points.iter().map(|p| p.value),
            style.tick_count,
            style.include_zero,
        );
        debug_assert!(points
            .iter()
            .filter(|p| p.value.is_finite())
            .all(|p| y_domain.contains(p.value)));
        let y_scale = LinearScale::new((y_domain.min, y_domain.max), (plot.bottom(), plot.top));
        let x_scale = PointScale::new(points.len(), (plot.left, plot.right()));

        let x_ticks: Vec<AxisTick> = points
            .iter()
            .enumerate()
            .map(|(i, p)| AxisTick {
                label: p.label.clone(),
                position: x_scale.position(i),
            })
            .collect();

        let y_ticks: Vec<AxisTick> = y_domain
            .ticks()
            .into_iter()
            .map(|v| AxisTick {
                label: format_tick(v, y_domain.step),
                position: y_scale.map(v),
            })
            .collect();

        let horizontal = y_ticks.iter().map(|t| GridLine {
            from: Point::new(plot.left, t.position),
            to: Point::new(plot.right(), t.position),
        });
        let vertical = x_ticks.iter().map(|t| GridLine {
            from: Point::new(t.position, plot.top),
            to: Point::new(t.position, plot.bottom()),
        });
        let grid = horizontal.chain(vertical).collect();

        let markers: Vec<Marker> = points
            .iter()
            .enumerate()
            .map(|(index, p)| Marker {
                index,
                center: Point::new(x_scale.position(index), y_scale.map(p.value)),
            })
            .collect();

        let centers: Vec<Point> = markers.iter().map(|m| m.center).collect();
        let path = monotone_path(&centers);

        tracing::debug!(
            points = points.len(),
            y_min = y_domain.min,
            y_max = y_domain.max,
            "Chart laid out"
        );

        Self {
            width,
            height,
            plot,
            y_domain,
            x_ticks,
            y_ticks,
            grid,
            path,
            markers,
            points: points.to_vec(),
            x_scale,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Caption to show when there is nothing to plot
    pub fn empty_caption(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_CAPTION)
    }

    pub fn has_line(&self) -> bool {
        !self.path.is_empty()
    }

    /// SVG `d` attribute for the line, if there is one
    pub fn line_path(&self) -> Option<String> {
        self.has_line().then(|| to_svg_path(&self.path))
    }

    /// Index of the point under the pointer.
    ///
    /// Anywhere inside the plot area activates the point with the nearest x.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        if !self.plot.contains(x, y) {
            return None;
        }
        self.x_scale.nearest(x)
    }

    /// Tooltip for the point at `index`
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let point = self.points.get(index)?;
        let marker = self.markers.get(index)?;
        Some(Tooltip {
            label: point.label.clone(),
            value: point.value,
            anchor: marker.center,
        })
    }

    /// Tooltip for whatever is under the pointer
    pub fn hover(&self, x: f64, y: f64) -> Option<Tooltip> {
        self.hit_test(x, y).and_then(|i| self.tooltip(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[(&str, f64)]) -> Vec<TimeSeriesPoint> {
        values
            .iter()
            .map(|(label, value)| TimeSeriesPoint::new(*label, *value))
            .collect()
    }

    fn layout(points: &[TimeSeriesPoint]) -> ChartGeometry {
        ChartGeometry::layout(points, &ChartStyle::default(), 800.0, 300.0)
    }

    fn scenario() -> Vec<TimeSeriesPoint> {
        series(&[("00:00", 120.0), ("01:00", 150.0), ("02:00", 180.0)])
    }

    #[test]
    fn test_plot_area() {
        let geometry = layout(&scenario());
        assert_eq!(
            geometry.plot,
            PlotArea {
                left: 80.0,
                top: 5.0,
                width: 690.0,
                height: 260.0,
            }
        );
    }

    #[test]
    fn test_scenario() {
        let geometry = layout(&scenario());

        let labels: Vec<_> = geometry.x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["00:00", "01:00", "02:00"]);

        assert!(geometry.y_domain.min <= 120.0);
        assert!(geometry.y_domain.max >= 180.0);

        assert!(geometry.has_line());
        let moves = geometry
            .path
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count();
        assert_eq!(moves, 1);
        assert_eq!(geometry.path.len(), 3);
        assert_eq!(geometry.markers.len(), 3);
    }

    #[test]
    fn test_one_tick_per_point_in_order() {
        let points = series(&[
            ("b", 3.0),
            ("a", 1.0),
            ("b", 3.0),
            ("c", 2.0),
            ("a", 5.0),
        ]);
        let geometry = layout(&points);

        assert_eq!(geometry.x_ticks.len(), points.len());
        for (tick, point) in geometry.x_ticks.iter().zip(&points) {
            assert_eq!(tick.label, point.label);
        }
        let positions: Vec<_> = geometry.x_ticks.iter().map(|t| t.position).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_series() {
        let geometry = layout(&[]);
        assert!(geometry.is_empty());
        assert!(!geometry.has_line());
        assert!(geometry.line_path().is_none());
        assert!(geometry.markers.is_empty());
        assert!(geometry.x_ticks.is_empty());
        assert!(!geometry.y_ticks.is_empty());
        assert_eq!(geometry.empty_caption(), Some(EMPTY_CAPTION));
        assert_eq!(geometry.hover(400.0, 100.0), None);
    }

    #[test]
    fn test_single_point_has_marker_but_no_line() {
        let geometry = layout(&series(&[("00:00", 120.0)]));
        assert_eq!(geometry.markers.len(), 1);
        assert!(!geometry.has_line());
        assert_eq!(geometry.markers[0].center.x, 425.0);
        assert_eq!(geometry.empty_caption(), None);
    }

    #[test]
    fn test_tooltip_returns_exact_point() {
        let points = scenario();
        let geometry = layout(&points);

        for (i, point) in points.iter().enumerate() {
            let tip = geometry.tooltip(i).unwrap();
            assert_eq!(tip.label, point.label);
            assert_eq!(tip.value, point.value);
        }
        assert!(geometry.tooltip(points.len()).is_none());
    }

    #[test]
    fn test_hover_on_marker_hits_that_point() {
        let points = series(&[
            ("00:00", 120.0),
            ("01:00", 150.0),
            ("02:00", 180.0),
            ("03:00", 90.0),
        ]);
        let geometry = layout(&points);

        for marker in &geometry.markers {
            let hit = geometry.hit_test(marker.center.x, marker.center.y);
            assert_eq!(hit, Some(marker.index));
            let tip = geometry.hover(marker.center.x, marker.center.y + 1.0).unwrap();
            assert_eq!(tip.label, points[marker.index].label);
            assert_eq!(tip.value, points[marker.index].value);
        }
    }

    #[test]
    fn test_hover_outside_plot() {
        let geometry = layout(&scenario());
        assert_eq!(geometry.hit_test(10.0, 100.0), None);
        assert_eq!(geometry.hit_test(400.0, 295.0), None);
    }

    #[test]
    fn test_markers_within_plot() {
        let geometry = layout(&series(&[("a", -20.0), ("b", 75.5), ("c", 12.0)]));
        for marker in &geometry.markers {
            assert!(geometry.plot.contains(marker.center.x, marker.center.y));
        }
    }

    #[test]
    fn test_grid_lines() {
        let geometry = layout(&scenario());
        // 5 y ticks (0..200 by 50) + 3 category lines
        assert_eq!(geometry.y_ticks.len(), 5);
        assert_eq!(geometry.grid.len(), 8);

        let y_labels: Vec<_> = geometry.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(y_labels, vec!["0", "50", "100", "150", "200"]);
    }

    #[test]
    fn test_style_from_config() {
        let config = ChartConfig {
            stroke: "#ff0000".to_string(),
            include_zero: false,
            ..ChartConfig::default()
        };
        let style = ChartStyle::from_config(&config);
        assert_eq!(style.stroke, "#ff0000");
        assert!(!style.include_zero);
        assert_eq!(style.grid_dash, "3 3");

        let geometry = ChartGeometry::layout(&scenario(), &style, 800.0, 300.0);
        assert_eq!(geometry.y_domain.min, 120.0);
    }

    #[test]
    fn test_oversized_tick_count_is_clamped() {
        let config = ChartConfig {
            tick_count: 1_000_000_000,
            ..ChartConfig::default()
        };
        let style = ChartStyle::from_config(&config);
        assert_eq!(style.tick_count, MAX_TICK_COUNT);

        let zero = ChartStyle::from_config(&ChartConfig {
            tick_count: 0,
            ..ChartConfig::default()
        });
        assert_eq!(zero.tick_count, 1);
    }

    #[test]
    fn test_extreme_values_lay_out() {
        let points = series(&[("a", -1.7e308), ("b", 0.0), ("c", 1.7e308)]);
        let geometry = layout(&points);

        assert_eq!(geometry.markers.len(), 3);
        assert!(!geometry.y_ticks.is_empty());
        assert!(geometry.y_ticks.len() <= 4 * MAX_TICK_COUNT + 1);
        for marker in &geometry.markers {
            assert!(geometry.plot.contains(marker.center.x, marker.center.y));
        }
    }
}
