//! Summary Card Component
//!
//! Displays one label above one pre-formatted value.

use eventdash::SummaryCardView;
use leptos::*;

use super::GridItem;

/// Summary card component
#[component]
pub fn SummaryCard(
    /// Themed card description
    card: SummaryCardView,
) -> impl IntoView {
    let SummaryCardView {
        label,
        value_text,
        label_style,
        value_style,
        card_style,
        span,
    } = card;

    view! {
        <GridItem span=span>
            <div style=card_style>
                <p style=label_style>{label}</p>
                <p style=value_style>{value_text}</p>
            </div>
        </GridItem>
    }
}
