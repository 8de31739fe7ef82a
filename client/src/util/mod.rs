//! Browser helpers and pure UI utilities.
//!
//! ARCHITECTURE
//! ============
//! Pure logic (`nav`, `timing`, constants in `reveal` and `viewport`) is
//! testable natively; browser wiring sits behind `#[cfg(feature = "hydrate")]`
//! and no-ops during SSR.

pub mod bridge;
#[cfg(feature = "hydrate")]
pub mod file_preview;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod timing;
pub mod viewport;
