//! Theme preference and its persisted representation.

use serde::{Deserialize, Serialize};

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    #[default]
    Dark,
}

impl ThemeMode {
    /// String identifier used for the root class and the stored preference.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference. Accepts JSON-quoted values written by serde-backed storage.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().trim_matches('"') {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve the theme to apply at startup from whatever storage returned.
    #[must_use]
    pub fn from_stored(stored: Option<&str>, fallback: Self) -> Self {
        let Some(value) = stored else {
            return fallback;
        };
        Self::parse(value).unwrap_or_else(|| {
            tracing::warn!(value, "ignoring unrecognised stored theme");
            fallback
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn toggling_twice_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn stored_values_resolve_with_fallback() {
        assert_eq!(
            ThemeMode::from_stored(None, ThemeMode::Dark),
            ThemeMode::Dark
        );
        assert_eq!(
            ThemeMode::from_stored(Some("light"), ThemeMode::Dark),
            ThemeMode::Light
        );
        assert_eq!(
            ThemeMode::from_stored(Some("\"light\""), ThemeMode::Dark),
            ThemeMode::Light
        );
        assert_eq!(
            ThemeMode::from_stored(Some("sepia"), ThemeMode::Dark),
            ThemeMode::Dark
        );
    }
}
