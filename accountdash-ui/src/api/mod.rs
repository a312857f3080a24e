//! API Access
//!
//! `fetch`-backed transport for the core API client plus the stored API base.

pub mod client;

pub use client::{get_api_base, set_api_base, GlooTransport};
