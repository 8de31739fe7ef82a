//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The marketing pages are static markup; `contact`, `demo`
//! and the two analyzer pages carry state.

pub mod about;
pub mod analysis_result;
pub mod analyze;
pub mod contact;
pub mod demo;
pub mod gemma;
pub mod home;
pub mod not_found;
pub mod product;
pub mod technology;
