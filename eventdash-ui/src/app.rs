//! App Root Component
//!
//! Builds the theme from configuration, takes one snapshot and renders the
//! resulting view tree.

use eventdash::{
    render_dashboard, Config, DashboardResult, DashboardView, MockSource, SnapshotStore,
};
use leptos::*;

use crate::components::{ChartPanel, Container, Grid, GridItem, SummaryCard};

const EMBEDDED_CONFIG: &str = include_str!("../dashboard.toml");

fn parse_config(document: &str) -> DashboardResult<Config> {
    Ok(Config::from_toml_str(document)?)
}

/// Parse the embedded configuration, falling back to defaults
pub fn load_config() -> Config {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet
            web_sys::console::error_1(&format!("Invalid dashboard.toml, using defaults: {}", e).into());
            Config::default()
        }
    }
}

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    let theme = config.theme();

    let mut store = SnapshotStore::new();
    let freshness = store.refresh(&MockSource::new());
    tracing::info!(?freshness, mode = %theme.mode, "Dashboard mounted");

    let dashboard = render_dashboard(&theme, &store.current(), &config);

    view! { <DashboardPage dashboard=dashboard /> }
}

/// Page shell: themed background, container, title and grid
#[component]
fn DashboardPage(dashboard: DashboardView) -> impl IntoView {
    let DashboardView {
        title,
        title_style,
        page_style,
        layout,
        cards,
        chart,
    } = dashboard;
    let chart_span = chart.span;

    view! {
        <div style=page_style>
            <Container layout=layout>
                <h1 style=title_style>{title}</h1>

                <Grid>
                    // Summary cards
                    {cards
                        .into_iter()
                        .map(|card| view! { <SummaryCard card=card /> })
                        .collect_view()}

                    // Events chart
                    <GridItem span=chart_span>
                        <ChartPanel panel=chart />
                    </GridItem>
                </Grid>
            </Container>
        </div>
    }
}
