//! View descriptions consumed by the UI layer

pub mod card;
pub mod dashboard;

pub use card::{SummaryCardView, CARD_SPAN};
pub use dashboard::{render_dashboard, ChartPanelView, DashboardView};
