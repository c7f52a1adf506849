//! Realtime Event Analytics Dashboard
//!
//! Leptos (WASM) front-end drawing the `eventdash` view model.
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All layout and chart math happens in the `eventdash` crate;
//! the components here only turn its view description into DOM and SVG, and
//! track which chart point the pointer is over.

use leptos::*;

mod app;
mod components;
mod logging;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = app::load_config();
    logging::init_logging(&config.logging);

    mount_to_body(move || view! { <app::App config=config /> });
}
