//! Responsive (small-viewport) menu state
//!
//! A single boolean; rendering responds to it declaratively. `toggle` is
//! only ever driven by explicit user interaction, while `close` is forced
//! by scroll events, in-menu link selection, and route changes.

/// Responsive menu visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip open/closed (burger click, or selecting a link while open)
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force closed
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
