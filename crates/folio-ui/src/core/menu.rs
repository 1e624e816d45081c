//! Mobile navigation menu toggle.

/// Class added to the menu panel while open.
pub const MENU_OPEN_CLASS: &str = "show";
/// Class added to the toggle button while the menu is open.
pub const TOGGLE_ACTIVE_CLASS: &str = "active";

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Whether the menu panel is currently shown.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu and return the new open state.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu; a closed menu stays closed.
    pub const fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::MobileMenu;

    #[test]
    fn toggle_flips_and_close_is_idempotent() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
