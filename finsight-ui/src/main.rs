//! Finsight Dashboard
//!
//! Financial Insights Platform front end built with Leptos (WASM).
//!
//! # Features
//!
//! - CSV transaction upload
//! - Spending summary, category pie chart and anomaly list
//! - AI-written spending summary
//! - Chat with the analysis backend about your finances
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. View state lives in the `finsight` crate; this crate wires it
//! to signals and talks to the analysis backend over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
