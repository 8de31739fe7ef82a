//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches stored analysis reports. Uploads do not go through here:
//! the dashboard form posts natively so the browser handles the multipart
//! body and the redirect.

pub mod api;
