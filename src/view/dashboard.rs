//! Dashboard view tree
//!
//! [`render_dashboard`] is a pure function from theme, snapshot and config to
//! the description of everything on the page. The UI layer only walks the
//! result.

use super::card::SummaryCardView;
use crate::chart::{ChartGeometry, ChartStyle};
use crate::config::Config;
use crate::data::DashboardSnapshot;
use crate::layout::{GridSpan, LayoutContainer};
use crate::theme::Theme;

/// Full-width panel holding the line chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanelView {
    pub title: String,
    pub title_style: String,
    pub panel_style: String,
    pub geometry: ChartGeometry,
    pub style: ChartStyle,
    pub series_name: String,
    pub grid_color: String,
    pub axis_color: String,
    pub tooltip_style: String,
    pub span: GridSpan,
}

/// Description of the whole page
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub title: String,
    pub title_style: String,
    pub page_style: String,
    pub layout: LayoutContainer,
    pub cards: Vec<SummaryCardView>,
    pub chart: ChartPanelView,
}

/// Build the page description for one render pass
pub fn render_dashboard(theme: &Theme, snapshot: &DashboardSnapshot, config: &Config) -> DashboardView {
    let palette = &theme.palette;
    let typography = &theme.typography;

    let cards: Vec<SummaryCardView> = snapshot
        .summaries
        .iter()
        .map(|metric| SummaryCardView::new(metric, theme))
        .collect();

    let style = ChartStyle::from_config(&config.chart);
    let geometry = ChartGeometry::layout(
        &snapshot.series,
        &style,
        config.dashboard.chart_width,
        config.dashboard.chart_height,
    );

    let chart = ChartPanelView {
        title: config.dashboard.chart_title.clone(),
        title_style: format!(
            "color: {}; margin: 0 0 0.35em; {}",
            palette.text_primary,
            typography.h6.css()
        ),
        panel_style: format!(
            "background: {}; border-radius: {}px; box-shadow: {}; padding: 16px; position: relative;",
            palette.paper, theme.border_radius, palette.card_shadow
        ),
        geometry,
        style,
        series_name: config.chart.series_name.clone(),
        grid_color: palette.grid_stroke.to_string(),
        axis_color: palette.axis_text.to_string(),
        tooltip_style: format!(
            "position: absolute; pointer-events: none; background: {}; border: 1px solid {}; \
             padding: 10px; white-space: nowrap; color: {}; {}",
            palette.tooltip_background,
            palette.tooltip_border,
            palette.text_primary,
            typography.body1.css()
        ),
        span: GridSpan::FULL,
    };

    tracing::debug!(
        mode = %theme.mode,
        cards = cards.len(),
        points = snapshot.series.len(),
        "Dashboard rendered"
    );

    DashboardView {
        title: config.dashboard.title.clone(),
        title_style: format!(
            "color: {}; margin: 0 0 0.35em; {}",
            palette.text_primary,
            typography.h4.css()
        ),
        page_style: format!(
            "background: {}; color: {}; font-family: {}; min-height: 100vh; margin: 0;",
            palette.background, palette.text_primary, typography.font_family
        ),
        layout: LayoutContainer::new(theme, config.dashboard.max_width),
        cards,
        chart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MockSource, SnapshotSource, TimeSeriesPoint};
    use crate::theme::ThemeMode;

    fn mock_view(theme: &Theme) -> DashboardView {
        let snapshot = MockSource::new().fetch().unwrap();
        render_dashboard(theme, &snapshot, &Config::default())
    }

    #[test]
    fn test_page_structure() {
        let view = mock_view(&Theme::default());

        assert_eq!(view.title, "Realtime Event Analytics Dashboard");
        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.chart.title, "Events Over Time");
        assert_eq!(view.chart.span, GridSpan::FULL);
        assert_eq!(view.chart.geometry.height, 300.0);

        let texts: Vec<_> = view.cards.iter().map(|c| c.visible_text()).collect();
        assert_eq!(
            texts,
            vec![
                "Total Events (Last 24h)\n12,456",
                "Unique Users\n8,921",
                "Active Webhooks\n23",
            ]
        );
    }

    #[test]
    fn test_render_is_pure() {
        let theme = Theme::default();
        assert_eq!(mock_view(&theme), mock_view(&theme));
    }

    #[test]
    fn test_theme_flows_into_view() {
        let light = mock_view(&Theme::new(ThemeMode::Light));
        let dark = mock_view(&Theme::new(ThemeMode::Dark));

        assert!(light.page_style.contains("background: #fff"));
        assert!(dark.page_style.contains("background: #121212"));
        assert_ne!(light.chart.grid_color, dark.chart.grid_color);
        // Data does not depend on the palette
        assert_eq!(light.chart.geometry, dark.chart.geometry);
    }

    #[test]
    fn test_empty_snapshot_renders_placeholder_panel() {
        let view = render_dashboard(
            &Theme::default(),
            &DashboardSnapshot::empty(),
            &Config::default(),
        );
        assert!(view.cards.is_empty());
        assert!(view.chart.geometry.is_empty());
        assert!(view.chart.geometry.empty_caption().is_some());
    }

    #[test]
    fn test_new_snapshot_replaces_whole_series() {
        let theme = Theme::default();
        let config = Config::default();
        let first = render_dashboard(&theme, &MockSource::new().fetch().unwrap(), &config);

        let replacement = MockSource::with_series(vec![TimeSeriesPoint::new("09:00", 7.0)])
            .fetch()
            .unwrap();
        let second = render_dashboard(&theme, &replacement, &config);

        assert_eq!(first.chart.geometry.x_ticks.len(), 3);
        assert_eq!(second.chart.geometry.x_ticks.len(), 1);
        assert_eq!(second.chart.geometry.x_ticks[0].label, "09:00");
    }
}
