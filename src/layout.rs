//! Responsive layout
//!
//! A centered container holding a 12-column grid. Items declare how many
//! columns they span below and at/above the `md` breakpoint.

use crate::theme::Theme;

pub const GRID_COLUMNS: u8 = 12;

/// Viewport width classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Smallest viewport width (px) at which this breakpoint applies
    pub fn min_width(self) -> f64 {
        match self {
            Breakpoint::Xs => 0.0,
            Breakpoint::Sm => 600.0,
            Breakpoint::Md => 900.0,
            Breakpoint::Lg => 1200.0,
            Breakpoint::Xl => 1536.0,
        }
    }

    pub fn for_width(width: f64) -> Self {
        [Breakpoint::Xl, Breakpoint::Lg, Breakpoint::Md, Breakpoint::Sm]
            .into_iter()
            .find(|bp| width >= bp.min_width())
            .unwrap_or(Breakpoint::Xs)
    }
}

/// Column span of one grid item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpan {
    pub xs: u8,
    pub md: Option<u8>,
}

impl GridSpan {
    pub const FULL: GridSpan = GridSpan::new(GRID_COLUMNS, None);

    pub const fn new(xs: u8, md: Option<u8>) -> Self {
        Self { xs, md }
    }

    /// Columns occupied at the given breakpoint
    pub fn columns_at(&self, breakpoint: Breakpoint) -> u8 {
        let columns = if breakpoint >= Breakpoint::Md {
            self.md.unwrap_or(self.xs)
        } else {
            self.xs
        };
        columns.clamp(1, GRID_COLUMNS)
    }

    /// Class names matching [`LayoutContainer::stylesheet`]
    pub fn class_names(&self) -> String {
        match self.md {
            Some(md) => format!("ed-col-xs-{} ed-col-md-{}", self.xs, md),
            None => format!("ed-col-xs-{}", self.xs),
        }
    }
}

/// Centered page container with a spaced grid
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContainer {
    pub max_width: f64,
    /// Top and bottom margin (px)
    pub margin_y: f64,
    /// Gap between grid items (px)
    pub spacing: f64,
}

impl LayoutContainer {
    pub fn new(theme: &Theme, max_width: f64) -> Self {
        Self {
            max_width,
            margin_y: theme.spacing(4.0),
            spacing: theme.spacing(3.0),
        }
    }

    /// Horizontal padding at the given viewport width
    pub fn gutter(&self, viewport_width: f64) -> f64 {
        if Breakpoint::for_width(viewport_width) >= Breakpoint::Sm {
            24.0
        } else {
            16.0
        }
    }

    /// Width available to the grid
    pub fn content_width(&self, viewport_width: f64) -> f64 {
        let outer = viewport_width.min(self.max_width);
        (outer - 2.0 * self.gutter(viewport_width)).max(0.0)
    }

    /// Rendered width of an item spanning `span` columns
    pub fn item_width(&self, span: GridSpan, viewport_width: f64) -> f64 {
        let columns = span.columns_at(Breakpoint::for_width(viewport_width)) as f64;
        let content = self.content_width(viewport_width);
        let column = (content - self.spacing * (GRID_COLUMNS as f64 - 1.0)) / GRID_COLUMNS as f64;
        (column * columns + self.spacing * (columns - 1.0)).max(0.0)
    }

    /// Inline style for the outer container
    pub fn container_style(&self) -> String {
        format!(
            "max-width: {}px; margin: {}px auto; box-sizing: border-box;",
            self.max_width, self.margin_y
        )
    }

    /// Stylesheet for the container gutters, the grid and the span classes
    pub fn stylesheet(&self) -> String {
        let mut css = format!(
            ".ed-container {{ padding: 0 {xs}px; }}\n\
             @media (min-width: {sm}px) {{ .ed-container {{ padding: 0 {wide}px; }} }}\n\
             .ed-grid {{ display: grid; grid-template-columns: repeat({cols}, minmax(0, 1fr)); gap: {gap}px; }}\n",
            xs = self.gutter(0.0),
            sm = Breakpoint::Sm.min_width(),
            wide = self.gutter(Breakpoint::Sm.min_width()),
            cols = GRID_COLUMNS,
            gap = self.spacing
        );
        for n in 1..=GRID_COLUMNS {
            css.push_str(&format!(".ed-col-xs-{n} {{ grid-column: span {n}; }}\n"));
        }
        css.push_str(&format!(
            "@media (min-width: {}px) {{\n",
            Breakpoint::Md.min_width()
        ));
        for n in 1..=GRID_COLUMNS {
            css.push_str(&format!("  .ed-col-md-{n} {{ grid-column: span {n}; }}\n"));
        }
        css.push_str("}\n");
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: GridSpan = GridSpan::new(12, Some(4));

    #[test]
    fn test_breakpoints() {
        assert_eq!(Breakpoint::for_width(320.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(600.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(899.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(900.0), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(1440.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1920.0), Breakpoint::Xl);
    }

    #[test]
    fn test_card_span_is_responsive() {
        assert_eq!(CARD.columns_at(Breakpoint::Xs), 12);
        assert_eq!(CARD.columns_at(Breakpoint::Sm), 12);
        assert_eq!(CARD.columns_at(Breakpoint::Md), 4);
        assert_eq!(CARD.columns_at(Breakpoint::Xl), 4);
        assert_eq!(GridSpan::FULL.columns_at(Breakpoint::Lg), 12);
    }

    #[test]
    fn test_three_cards_share_a_row_on_desktop() {
        let layout = LayoutContainer::new(&Theme::default(), 1200.0);
        let card = layout.item_width(CARD, 1280.0);
        let full = layout.item_width(GridSpan::FULL, 1280.0);

        assert!((3.0 * card + 2.0 * layout.spacing - full).abs() < 1e-9);
        assert!((full - layout.content_width(1280.0)).abs() < 1e-9);
        assert_eq!(layout.content_width(1280.0), 1152.0);
    }

    #[test]
    fn test_cards_stack_on_mobile() {
        let layout = LayoutContainer::new(&Theme::default(), 1200.0);
        assert_eq!(
            layout.item_width(CARD, 375.0),
            layout.item_width(GridSpan::FULL, 375.0)
        );
    }

    #[test]
    fn test_stylesheet_and_classes() {
        let layout = LayoutContainer::new(&Theme::default(), 1200.0);
        let css = layout.stylesheet();
        assert!(css.contains("gap: 24px"));
        assert!(css.contains(".ed-container { padding: 0 16px; }"));
        assert!(css.contains("@media (min-width: 600px) { .ed-container { padding: 0 24px; } }"));
        assert!(css.contains("@media (min-width: 900px)"));
        assert!(css.contains(".ed-col-md-4 { grid-column: span 4; }"));
        assert_eq!(CARD.class_names(), "ed-col-xs-12 ed-col-md-4");
        assert_eq!(GridSpan::FULL.class_names(), "ed-col-xs-12");
    }
}
