//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the analyzer surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod footer;
pub mod form_field;
pub mod navigation;
pub mod notification_stack;
pub mod report_view;
pub mod upload_widget;
