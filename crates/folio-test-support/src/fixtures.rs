//! Sample page structure and form input.

use folio_ui::config::PortfolioConfig;
use folio_ui::core::contact::ContactMessage;
use folio_ui::core::page::{PageLayout, PageState};

/// Section ids of the stock page, in document order.
pub const SECTIONS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

/// Filter button values of the stock page, in document order.
pub const FILTERS: [&str; 4] = ["all", "frontend", "backend", "fullstack"];

/// Index of the stock filter button carrying `value`.
///
/// # Panics
///
/// Panics when no stock button carries `value`.
#[must_use]
pub fn filter_button(value: &str) -> usize {
    FILTERS
        .iter()
        .position(|filter| *filter == value)
        .unwrap_or_else(|| panic!("no stock filter button for {value}"))
}

/// Layout of the stock page.
///
/// Skill items: `90`, `85%`, a malformed level and an item without a bar.
/// Cards: frontend, backend, fullstack, frontend, and one without a category.
#[must_use]
pub fn sample_layout() -> PageLayout {
    PageLayout {
        sections: SECTIONS.iter().map(ToString::to_string).collect(),
        skill_levels: vec![
            Some("90".to_string()),
            Some("85%".to_string()),
            Some("lots".to_string()),
            None,
        ],
        filter_buttons: FILTERS.iter().map(|value| Some((*value).to_string())).collect(),
        project_categories: vec![
            Some("frontend".to_string()),
            Some("backend".to_string()),
            Some("fullstack".to_string()),
            Some("frontend".to_string()),
            None,
        ],
    }
}

/// Defaults with a short caption so typing tests stay readable.
#[must_use]
pub fn sample_config() -> PortfolioConfig {
    let mut config = PortfolioConfig::default();
    config.typing.caption = "Dev".to_string();
    config
}

/// A page over [`sample_layout`] and [`sample_config`].
#[must_use]
pub fn sample_page(stored_theme: Option<&str>) -> PageState {
    PageState::new(sample_config(), sample_layout(), stored_theme)
}

/// A filled-in contact form.
#[must_use]
pub fn sample_contact() -> ContactMessage {
    ContactMessage {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        subject: "S".to_string(),
        message: "M".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_layout_lines_up_with_sections() {
        let layout = sample_layout();
        assert_eq!(layout.sections.len(), SECTIONS.len());
        assert_eq!(layout.filter_buttons[filter_button("all")].as_deref(), Some("all"));
    }

    #[test]
    fn sample_config_is_valid() {
        assert!(sample_config().validate().is_ok());
    }
}
