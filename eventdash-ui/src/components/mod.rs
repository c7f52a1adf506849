//! UI Components
//!
//! Leptos components for the dashboard page.

pub mod chart;
pub mod layout;
pub mod summary_card;

pub use chart::ChartPanel;
pub use layout::{Container, Grid, GridItem};
pub use summary_card::SummaryCard;
