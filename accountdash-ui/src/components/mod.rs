//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod alerts;
pub mod edit_dialog;
pub mod loading;
pub mod nav;

pub use alerts::Alerts;
pub use edit_dialog::EditDialog;
pub use loading::{LogRowsSkeleton, ProfileSkeleton, Spinner};
pub use nav::Nav;
