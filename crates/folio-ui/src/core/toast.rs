//! Single-slot toast notification.
//!
//! # Design
//! - One toast at a time; a new show overwrites the previous content.
//! - Every show schedules its own hide. A hide clears whatever is on screen, so
//!   a second toast inside the first one's window disappears when the first
//!   window ends.

/// Class that makes the toast visible.
pub const TOAST_VISIBLE_CLASS: &str = "show";

/// Identifies the show call that scheduled a hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastTicket(pub u64);

/// Toast content and visibility.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    title: String,
    message: String,
    visible: bool,
    shown: u64,
}

impl ToastState {
    /// Display a toast and return the ticket its auto-hide should carry.
    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>) -> ToastTicket {
        self.title = title.into();
        self.message = message.into();
        self.visible = true;
        self.shown += 1;
        ToastTicket(self.shown)
    }

    /// Hide the toast. Returns whether it was visible.
    pub const fn hide(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        was_visible
    }

    /// Whether the toast is on screen.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last shown title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Last shown message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of toasts shown so far.
    #[must_use]
    pub const fn shown(&self) -> u64 {
        self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_show_wins_and_tickets_increase() {
        let mut toast = ToastState::default();
        let first = toast.show("One", "first");
        let second = toast.show("Two", "second");
        assert_ne!(first, second);
        assert_eq!(toast.title(), "Two");
        assert_eq!(toast.message(), "second");
        assert_eq!(toast.shown(), 2);
    }

    #[test]
    fn hide_keeps_content_and_reports_visibility() {
        let mut toast = ToastState::default();
        assert!(!toast.hide());
        toast.show("Title", "Body");
        assert!(toast.hide());
        assert!(!toast.is_visible());
        assert_eq!(toast.title(), "Title");
    }
}
