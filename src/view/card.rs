//! Summary card view

use crate::data::SummaryMetric;
use crate::layout::GridSpan;
use crate::theme::Theme;

/// Full width on small screens, a third of the row from `md` up
pub const CARD_SPAN: GridSpan = GridSpan::new(12, Some(4));

/// A label in secondary color above a value in `h5`
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCardView {
    pub label: String,
    pub value_text: String,
    pub label_style: String,
    pub value_style: String,
    pub card_style: String,
    pub span: GridSpan,
}

impl SummaryCardView {
    pub fn new(metric: &SummaryMetric, theme: &Theme) -> Self {
        let palette = &theme.palette;
        let typography = &theme.typography;

        Self {
            label: metric.label.clone(),
            value_text: metric.value.format(),
            label_style: format!(
                "color: {}; margin: 0 0 0.35em; {}",
                palette.text_secondary,
                typography.body1.css()
            ),
            value_style: format!(
                "color: {}; margin: 0; {}",
                palette.text_primary,
                typography.h5.css()
            ),
            card_style: format!(
                "background: {}; border-radius: {}px; box-shadow: {}; padding: 16px;",
                palette.paper, theme.border_radius, palette.card_shadow
            ),
            span: CARD_SPAN,
        }
    }

    /// Text a viewer sees, label first
    pub fn visible_text(&self) -> String {
        format!("{}\n{}", self.label, self.value_text)
    }
}
