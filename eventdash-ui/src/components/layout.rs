//! Layout Components
//!
//! Centered container and the 12-column responsive grid.

use eventdash::{GridSpan, LayoutContainer};
use leptos::*;

/// Centered page container; also carries the grid stylesheet
#[component]
pub fn Container(layout: LayoutContainer, children: Children) -> impl IntoView {
    let stylesheet = layout.stylesheet();

    view! {
        <div class="ed-container" style=layout.container_style()>
            <style>{stylesheet}</style>
            {children()}
        </div>
    }
}

/// Grid row holding cards and panels
#[component]
pub fn Grid(children: Children) -> impl IntoView {
    view! { <div class="ed-grid">{children()}</div> }
}

/// One grid cell
#[component]
pub fn GridItem(span: GridSpan, children: Children) -> impl IntoView {
    view! { <div class=span.class_names()>{children()}</div> }
}
