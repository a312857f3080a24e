//! Pages
//!
//! One component per dashboard section.

pub mod auth;
pub mod dashboard;

pub use auth::{Login, Register};
pub use dashboard::Dashboard;
