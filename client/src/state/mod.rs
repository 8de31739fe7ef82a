//! Client-side state modules.
//!
//! ARCHITECTURE
//! ============
//! Plain Rust models wrapped in `RwSignal`s by components. Transition logic
//! lives here so it can be tested without a browser.

pub mod form;
pub mod notifications;
pub mod ui;
pub mod upload;
