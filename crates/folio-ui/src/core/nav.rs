//! Navigation bar state: scroll marker and active-section tracking.
//!
//! # Design
//! - Sections are tracked in document order, captured once at startup.
//! - When several sections meet the visibility threshold, the topmost one wins.
//! - A section leaving the viewport never clears the active link on its own.

use crate::core::visibility::Intersection;

/// Class added to the navigation bar once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Class marking the nav link for the section in view.
pub const ACTIVE_LINK_CLASS: &str = "active";

/// Whether a vertical scroll offset puts the navigation bar in its scrolled state.
#[must_use]
pub fn is_scrolled(offset_y: f64, threshold_px: f64) -> bool {
    offset_y > threshold_px
}

/// Visibility bookkeeping for the sections the nav links point at.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionTracker {
    order: Vec<String>,
    visible: Vec<bool>,
    active: Option<String>,
}

impl SectionTracker {
    /// Track `sections`, given in document order.
    #[must_use]
    pub fn new(sections: Vec<String>) -> Self {
        let visible = vec![false; sections.len()];
        Self {
            order: sections,
            visible,
            active: None,
        }
    }

    /// Section whose nav link is currently highlighted.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Fold one observer batch into the tracker.
    ///
    /// Returns the newly active section id when the highlight moves.
    pub fn apply(&mut self, entries: &[Intersection<String>], threshold: f64) -> Option<&str> {
        for entry in entries {
            let Some(index) = self.order.iter().position(|id| *id == entry.key) else {
                continue;
            };
            self.visible[index] = entry.meets(threshold);
        }

        let topmost = self
            .visible
            .iter()
            .position(|visible| *visible)
            .map(|index| self.order[index].clone())?;
        if self.active.as_deref() == Some(topmost.as_str()) {
            return None;
        }
        tracing::debug!(section = %topmost, "active section changed");
        self.active = Some(topmost);
        self.active.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SectionTracker {
        SectionTracker::new(vec![
            "home".to_string(),
            "about".to_string(),
            "projects".to_string(),
        ])
    }

    fn seen(id: &str, ratio: f64) -> Intersection<String> {
        Intersection::new(id.to_string(), ratio > 0.0, ratio)
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
        assert!(is_scrolled(900.0, 50.0));
    }

    #[test]
    fn topmost_visible_section_wins_ties() {
        let mut tracker = tracker();
        let batch = [seen("projects", 0.6), seen("about", 0.4)];
        assert_eq!(tracker.apply(&batch, 0.3), Some("about"));
        assert_eq!(tracker.active(), Some("about"));
    }

    #[test]
    fn leaving_sections_keep_last_highlight() {
        let mut tracker = tracker();
        tracker.apply(&[seen("home", 1.0)], 0.3);
        assert_eq!(tracker.apply(&[seen("home", 0.0)], 0.3), None);
        assert_eq!(tracker.active(), Some("home"));
    }

    #[test]
    fn highlight_moves_when_upper_section_exits() {
        let mut tracker = tracker();
        tracker.apply(&[seen("home", 0.5), seen("about", 0.5)], 0.3);
        assert_eq!(tracker.active(), Some("home"));
        assert_eq!(tracker.apply(&[seen("home", 0.1)], 0.3), Some("about"));
    }

    #[test]
    fn unknown_and_repeat_entries_do_not_emit() {
        let mut tracker = tracker();
        assert_eq!(tracker.apply(&[seen("footer", 1.0)], 0.3), None);
        tracker.apply(&[seen("about", 0.9)], 0.3);
        assert_eq!(tracker.apply(&[seen("about", 0.8)], 0.3), None);
    }
}
