//! State Management
//!
//! The core controller, its render signals and the `localStorage` store.

pub mod global;
pub mod storage;

pub use global::{provide_global_state, use_global_state};
