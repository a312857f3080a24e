//! Accountdash Dashboard
//!
//! Browser frontend for the account dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and registration
//! - Profile card with inline editing and avatar upload
//! - User statistics and the activity log
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. All behavior lives in the
//! `accountdash` core controller; this crate supplies its three seams:
//! `fetch` via gloo-net, `localStorage` via web-sys, and signals for
//! rendering.

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

    mount_to_body(|| view! { <app::App /> });
}
