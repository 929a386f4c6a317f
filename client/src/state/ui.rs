//! Local UI chrome state (navbar menu, XP info panel).
//!
//! DESIGN
//! ======
//! Keeps transient presentation toggles out of the leaderboard and browse
//! state so chrome can change without touching domain data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Collapsed navbar menu on narrow screens.
    pub menu_open: bool,
    /// "How to earn XP" panel on the leaderboard page.
    pub xp_info_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Navigation always collapses the menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_xp_info(&mut self) {
        self.xp_info_open = !self.xp_info_open;
    }
}
