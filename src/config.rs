//! Configuration System
//!
//! Dashboard settings loaded from TOML. Every field has a default, so an empty
//! document (or a missing section) is a valid configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::theme::{Theme, ThemeMode};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Theme selection
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
}

/// Page text and panel sizes
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_chart_title")]
    pub chart_title: String,

    /// Logical chart width; the rendered chart scales to its panel
    #[serde(default = "default_chart_width")]
    pub chart_width: f64,

    #[serde(default = "default_chart_height")]
    pub chart_height: f64,

    #[serde(default = "default_max_width")]
    pub max_width: f64,
}

fn default_title() -> String {
    "Realtime Event Analytics Dashboard".to_string()
}

fn default_chart_title() -> String {
    "Events Over Time".to_string()
}

fn default_chart_width() -> f64 {
    800.0
}

fn default_chart_height() -> f64 {
    300.0
}

fn default_max_width() -> f64 {
    1200.0 // lg container
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            chart_title: default_chart_title(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            max_width: default_max_width(),
        }
    }
}

/// Line chart drawing options
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_stroke")]
    pub stroke: String,

    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,

    #[serde(default = "default_tick_count")]
    pub tick_count: usize,

    /// Stretch the y axis down (or up) to zero
    #[serde(default = "default_include_zero")]
    pub include_zero: bool,

    /// Name shown next to the value in the tooltip
    #[serde(default = "default_series_name")]
    pub series_name: String,
}

fn default_stroke() -> String {
    "#8884d8".to_string()
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_dot_radius() -> f64 {
    3.0
}

fn default_tick_count() -> usize {
    5
}

fn default_include_zero() -> bool {
    true
}

fn default_series_name() -> String {
    "events".to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            stroke: default_stroke(),
            stroke_width: default_stroke_width(),
            dot_radius: default_dot_radius(),
            tick_count: default_tick_count(),
            include_zero: default_include_zero(),
            series_name: default_series_name(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `eventdash=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            origin: "<inline>".to_string(),
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            origin: path.display().to_string(),
            error: e.to_string(),
        })?;

        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Theme selected by this configuration
    pub fn theme(&self) -> Theme {
        Theme::new(self.theme.mode)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config {origin}: {error}")]
    Parse { origin: String, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# Dashboard Configuration

[theme]
# Palette: light or dark
mode = "light"

[dashboard]
title = "Realtime Event Analytics Dashboard"
chart_title = "Events Over Time"

# Logical chart size in pixels
chart_width = 800.0
chart_height = 300.0

# Maximum page width in pixels
max_width = 1200.0

[chart]
# Line color
stroke = "#8884d8"
stroke_width = 2.0

# Radius of the dot drawn on every point
dot_radius = 3.0

# Approximate number of y-axis ticks
tick_count = 5

# Anchor the y axis at zero
include_zero = true

# Series name shown in the tooltip
series_name = "events"

[logging]
# Filter directive: trace, debug, info, warn, error
level = "info"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dashboard.title, "Realtime Event Analytics Dashboard");
        assert_eq!(config.dashboard.chart_height, 300.0);
        assert_eq!(config.chart.stroke, "#8884d8");
        assert_eq!(config.theme.mode, ThemeMode::Light);
    }

    #[test]
    fn test_generated_config_round_trips_to_defaults() {
        let config = Config::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml_str(
            r#"
            [theme]
            mode = "dark"

            [chart]
            include_zero = false
            "#,
        )
        .unwrap();

        assert_eq!(config.theme().mode, ThemeMode::Dark);
        assert!(!config.chart.include_zero);
        assert_eq!(config.chart.tick_count, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let err = Config::from_toml_str("[theme]\nmode = \"sepia\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\ntitle = \"Ops\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dashboard.title, "Ops");
        assert_eq!(config.dashboard.chart_title, "Events Over Time");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
