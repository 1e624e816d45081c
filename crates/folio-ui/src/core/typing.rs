//! Hero caption typing animation and blinking cursor.

/// Progress of the caption reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingAnimation {
    chars: Vec<char>,
    revealed: usize,
}

impl TypingAnimation {
    /// Start a reveal of `caption` with nothing shown.
    #[must_use]
    pub fn new(caption: &str) -> Self {
        Self {
            chars: caption.chars().collect(),
            revealed: 0,
        }
    }

    /// Reveal one more character and return the visible prefix.
    ///
    /// Returns `None` once the whole caption is shown.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        self.revealed += 1;
        Some(self.text())
    }

    /// Currently visible prefix.
    #[must_use]
    pub fn text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// Whether every character has been revealed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed >= self.chars.len()
    }
}

/// Cursor visibility, flipped on every blink tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorBlink {
    /// Flip visibility and return the new state.
    pub const fn tick(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Whether the cursor is currently shown.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.visible
    }

    /// Inline opacity value for the current state.
    #[must_use]
    pub const fn opacity(self) -> &'static str {
        if self.visible { "1" } else { "0" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_step_then_stops() {
        let mut typing = TypingAnimation::new("Hey");
        assert_eq!(typing.text(), "");
        assert_eq!(typing.advance().as_deref(), Some("H"));
        assert_eq!(typing.advance().as_deref(), Some("He"));
        assert_eq!(typing.advance().as_deref(), Some("Hey"));
        assert!(typing.is_complete());
        assert_eq!(typing.advance(), None);
    }

    #[test]
    fn multibyte_captions_advance_by_char() {
        let mut typing = TypingAnimation::new("né");
        typing.advance();
        assert_eq!(typing.advance().as_deref(), Some("né"));
        assert!(typing.is_complete());
    }

    #[test]
    fn cursor_first_tick_hides() {
        let mut cursor = CursorBlink::default();
        assert_eq!(cursor.opacity(), "1");
        assert!(!cursor.tick());
        assert_eq!(cursor.opacity(), "0");
        assert!(cursor.tick());
    }
}
