//! Local UI chrome state (mobile menu, viewport class).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of page state so the nav and
//! the responsive helpers can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile link list expanded.
    pub menu_open: bool,
    /// Viewport is at or below the mobile breakpoint.
    pub mobile: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following any nav link closes the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
