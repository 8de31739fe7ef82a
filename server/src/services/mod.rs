//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the analysis pipeline so route handlers can stay
//! focused on multipart parsing and status mapping.

pub mod analysis;
pub mod guidance;
