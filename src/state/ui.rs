#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Open/closed state for the collapsible mobile navigation menu.
///
/// Owned by the navigation bar instance; never provided via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip the menu between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu. Used after every mobile link click and after logout.
    pub fn close(&mut self) {
        self.open = false;
    }
}
