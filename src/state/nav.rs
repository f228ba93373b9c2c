//! Mobile navigation menu state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state shared by the hamburger button and the menu panel.
/// Both elements carry `active` exactly when the menu is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
