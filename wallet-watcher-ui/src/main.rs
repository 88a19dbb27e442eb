//! Wallet Watcher Dashboard
//!
//! Wallet monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - API key login and logout
//! - Totals and wallet cards for every monitored wallet
//! - Wallet detail modal with transaction and alert tabs
//! - Alert creation and deletion
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Request handling, aggregation and formatting come from the
//! `wallet-watcher` core; this crate supplies the browser transport, storage,
//! dialogs and markup. Requests go to the origin the page was served from.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    logging::init();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
