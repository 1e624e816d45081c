//! Page configuration document.
//!
//! # Design
//! - Every section defaults independently, so a partial document overrides only what it names.
//! - Defaults reproduce the stock page: dark theme, 50px scroll marker, 5s toasts.
//! - Link tables back the placeholder actions; nothing is hard-wired in handlers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::theme::ThemeMode;
use crate::error::ConfigError;

/// Element id of the optional embedded configuration document.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Root configuration for the page controller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Logging verbosity.
    pub logging: LogSettings,
    /// Theme persistence.
    pub theme: ThemeConfig,
    /// Navigation bar behaviour.
    pub nav: NavConfig,
    /// Hero caption animation.
    pub typing: TypingConfig,
    /// Skill bar reveal.
    pub skills: SkillsConfig,
    /// Active-section tracking.
    pub sections: SectionsConfig,
    /// Toast notifications.
    pub toast: ToastConfig,
    /// Icon library integration.
    pub icons: IconsConfig,
    /// Destinations for the placeholder link actions.
    pub links: LinkConfig,
}

/// Logging verbosity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive (e.g. `info`, `folio_ui=debug`).
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: folio_telemetry::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Theme persistence settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Local-storage key holding the preference.
    pub storage_key: String,
    /// Theme applied when nothing usable is stored.
    pub default_theme: ThemeMode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            default_theme: ThemeMode::Dark,
        }
    }
}

/// Navigation bar settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset beyond which the bar is marked scrolled.
    pub scroll_threshold_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50.0,
        }
    }
}

/// Hero caption animation settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    /// Caption revealed one character at a time.
    pub caption: String,
    /// Delay before the first character.
    pub start_delay_ms: u32,
    /// Delay between characters.
    pub step_ms: u32,
    /// Cursor blink period.
    pub cursor_blink_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            caption: "Full Stack Developer".to_string(),
            start_delay_ms: 1000,
            step_ms: 100,
            cursor_blink_ms: 500,
        }
    }
}

/// Skill bar reveal settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    /// Visible fraction that triggers the reveal.
    pub visibility_threshold: f64,
    /// Delay between qualifying and applying the width.
    pub reveal_delay_ms: u32,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.5,
            reveal_delay_ms: 200,
        }
    }
}

/// Active-section tracking settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    /// Visible fraction at which a section counts as in view.
    pub visibility_threshold: f64,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.3,
        }
    }
}

/// Toast settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// How long a toast stays up before its auto-hide fires.
    pub display_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { display_ms: 5000 }
    }
}

/// Icon library integration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    /// Global object exposing `createIcons()`; skipped when absent.
    pub library_global: String,
    /// Delay before the second render pass that picks up late content.
    pub rerender_delay_ms: u32,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            library_global: "lucide".to_string(),
            rerender_delay_ms: 100,
        }
    }
}

/// Destinations for the placeholder link actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Project links keyed by kind (`github`, `demo`) then project id.
    pub projects: BTreeMap<String, BTreeMap<String, String>>,
    /// Social profiles keyed by platform.
    pub social: BTreeMap<String, String>,
    /// Contact channels keyed by kind (`email`, `phone`, `location`).
    pub contact: BTreeMap<String, String>,
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

impl Default for LinkConfig {
    fn default() -> Self {
        let github = table(&[
            ("ecommerce", "https://github.com/example/ecommerce"),
            ("taskmanager", "https://github.com/example/taskmanager"),
            ("weather", "https://github.com/example/weather"),
            ("api-gateway", "https://github.com/example/api-gateway"),
            ("chat-app", "https://github.com/example/chat-app"),
            ("analytics", "https://github.com/example/analytics"),
        ]);
        let demo = table(&[
            ("ecommerce", "https://demo-ecommerce.com"),
            ("taskmanager", "https://demo-taskmanager.com"),
            ("weather", "https://demo-weather.com"),
            ("chat-app", "https://demo-chat.com"),
        ]);
        Self {
            projects: BTreeMap::from([("github".to_string(), github), ("demo".to_string(), demo)]),
            social: table(&[
                ("github", "https://github.com/johndoe"),
                ("linkedin", "https://linkedin.com/in/johndoe"),
                ("twitter", "https://twitter.com/johndoe"),
            ]),
            contact: table(&[
                ("email", "mailto:john.doe@example.com"),
                ("phone", "tel:+15551234567"),
                ("location", "https://maps.google.com?q=San Francisco, CA"),
            ]),
        }
    }
}

impl PortfolioConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidField`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.storage_key.trim().is_empty() {
            return Err(invalid("theme", "storage_key", "must not be empty"));
        }
        if !self.nav.scroll_threshold_px.is_finite() || self.nav.scroll_threshold_px < 0.0 {
            return Err(invalid(
                "nav",
                "scroll_threshold_px",
                "must be a non-negative number",
            ));
        }
        if self.typing.step_ms == 0 {
            return Err(invalid("typing", "step_ms", "must be positive"));
        }
        if self.typing.cursor_blink_ms == 0 {
            return Err(invalid("typing", "cursor_blink_ms", "must be positive"));
        }
        if !is_ratio(self.skills.visibility_threshold) {
            return Err(invalid(
                "skills",
                "visibility_threshold",
                "must be within (0, 1]",
            ));
        }
        if !is_ratio(self.sections.visibility_threshold) {
            return Err(invalid(
                "sections",
                "visibility_threshold",
                "must be within (0, 1]",
            ));
        }
        Ok(())
    }
}

fn is_ratio(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

const fn invalid(section: &'static str, field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        section,
        field,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_page() {
        let config = PortfolioConfig::default();
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.default_theme, ThemeMode::Dark);
        assert_eq!(config.typing.caption, "Full Stack Developer");
        assert_eq!(config.toast.display_ms, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_document_overrides_named_fields_only() -> Result<(), ConfigError> {
        let config = PortfolioConfig::from_json(
            r#"{"typing": {"caption": "Rustacean"}, "links": {"social": {"mastodon": "https://example.social/@me"}}}"#,
        )?;
        assert_eq!(config.typing.caption, "Rustacean");
        assert_eq!(config.typing.step_ms, 100);
        assert_eq!(config.links.social.len(), 1);
        assert_eq!(config.links.contact.len(), 3);
        Ok(())
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            PortfolioConfig::from_json("{not json"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let result = PortfolioConfig::from_json(r#"{"skills": {"visibility_threshold": 1.5}}"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidField {
                section: "skills",
                field: "visibility_threshold",
                ..
            })
        ));
    }

    #[test]
    fn zero_step_is_rejected() {
        let result = PortfolioConfig::from_json(r#"{"typing": {"step_ms": 0}}"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidField { field: "step_ms", .. })
        ));
    }
}
