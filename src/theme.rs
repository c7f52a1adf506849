//! Visual theme
//!
//! A `Theme` is a plain value handed down to every display component. Light
//! and dark palettes follow the stock component-library defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Palette selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// Color tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub card_shadow: &'static str,
    pub grid_stroke: &'static str,
    pub axis_text: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_border: &'static str,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: "#fff",
            paper: "#fff",
            text_primary: "rgba(0, 0, 0, 0.87)",
            text_secondary: "rgba(0, 0, 0, 0.6)",
            card_shadow: "0px 2px 1px -1px rgba(0,0,0,0.2), 0px 1px 1px 0px rgba(0,0,0,0.14), 0px 1px 3px 0px rgba(0,0,0,0.12)",
            grid_stroke: "#ccc",
            axis_text: "#666",
            tooltip_background: "#fff",
            tooltip_border: "#ccc",
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#121212",
            paper: "#121212",
            text_primary: "#fff",
            text_secondary: "rgba(255, 255, 255, 0.7)",
            card_shadow: "0px 2px 1px -1px rgba(0,0,0,0.2), 0px 1px 1px 0px rgba(0,0,0,0.14), 0px 1px 3px 0px rgba(0,0,0,0.12)",
            grid_stroke: "rgba(255, 255, 255, 0.2)",
            axis_text: "#aaa",
            tooltip_background: "#1e1e1e",
            tooltip_border: "#444",
        }
    }
}

/// One step of the type scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeStyle {
    pub size_rem: f32,
    pub weight: u16,
    pub line_height: f32,
}

impl TypeStyle {
    const fn new(size_rem: f32, weight: u16, line_height: f32) -> Self {
        Self {
            size_rem,
            weight,
            line_height,
        }
    }

    /// Inline CSS declarations for this style
    pub fn css(&self) -> String {
        format!(
            "font-size: {}rem; font-weight: {}; line-height: {};",
            self.size_rem, self.weight, self.line_height
        )
    }
}

/// Type scale
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub font_family: &'static str,
    pub h4: TypeStyle,
    pub h5: TypeStyle,
    pub h6: TypeStyle,
    pub body1: TypeStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif",
            h4: TypeStyle::new(2.125, 400, 1.235),
            h5: TypeStyle::new(1.5, 400, 1.334),
            h6: TypeStyle::new(1.25, 500, 1.6),
            body1: TypeStyle::new(1.0, 400, 1.5),
        }
    }
}

/// Shared visual tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub typography: Typography,
    /// Base spacing unit in pixels
    pub spacing_unit: f64,
    pub border_radius: f64,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        let palette = match mode {
            ThemeMode::Light => Palette::light(),
            ThemeMode::Dark => Palette::dark(),
        };
        Self {
            mode,
            palette,
            typography: Typography::default(),
            spacing_unit: 8.0,
            border_radius: 4.0,
        }
    }

    /// `factor` spacing units, in pixels
    pub fn spacing(&self, factor: f64) -> f64 {
        self.spacing_unit * factor
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_palette() {
        assert_eq!(Theme::new(ThemeMode::Light).palette, Palette::light());
        assert_eq!(Theme::new(ThemeMode::Dark).palette.background, "#121212");
        assert_eq!(Theme::default().mode, ThemeMode::Light);
    }

    #[test]
    fn test_spacing() {
        let theme = Theme::default();
        assert_eq!(theme.spacing(3.0), 24.0);
        assert_eq!(theme.spacing(4.0), 32.0);
    }

    #[test]
    fn test_type_style_css() {
        let h5 = Typography::default().h5;
        assert_eq!(h5.css(), "font-size: 1.5rem; font-weight: 400; line-height: 1.334;");
    }

    #[test]
    fn test_mode_serde() {
        let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.to_string(), "dark");
    }
}
