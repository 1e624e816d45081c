//! Project category filtering.

/// Filter value that shows every card.
pub const ALL_FILTER: &str = "all";
/// Class marking the selected filter button.
pub const ACTIVE_BUTTON_CLASS: &str = "active";
/// Button style for the selected filter.
pub const PRIMARY_BUTTON_CLASS: &str = "btn-primary";
/// Button style for unselected filters.
pub const OUTLINE_BUTTON_CLASS: &str = "btn-outline";
/// Class added to filtered-out cards.
pub const HIDDEN_CARD_CLASS: &str = "hidden";

/// Whether a card in `category` is shown under `filter`.
///
/// A button without a filter value shows exactly the uncategorised cards.
#[must_use]
pub fn card_matches(filter: Option<&str>, category: Option<&str>) -> bool {
    filter == Some(ALL_FILTER) || category == filter
}

/// Result of selecting a filter, index-aligned with the page's buttons and cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSelection {
    /// `true` for the single button that becomes active.
    pub buttons: Vec<bool>,
    /// `true` for every card left visible.
    pub cards: Vec<bool>,
}

/// Filter buttons and project cards captured from the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterBoard {
    buttons: Vec<Option<String>>,
    categories: Vec<Option<String>>,
    active: Option<String>,
}

impl FilterBoard {
    /// Build from the buttons' filter values and the cards' categories.
    #[must_use]
    pub fn new(buttons: Vec<Option<String>>, categories: Vec<Option<String>>) -> Self {
        Self {
            buttons,
            categories,
            active: Some(ALL_FILTER.to_string()),
        }
    }

    /// Currently applied filter value; `None` after a button without one.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Apply the filter of the clicked `button`, which becomes the only active one.
    ///
    /// Returns `None` when no button sits at that index.
    pub fn select(&mut self, button: usize) -> Option<FilterSelection> {
        let filter = self.buttons.get(button)?.clone();
        let buttons = (0..self.buttons.len()).map(|index| index == button).collect();
        let cards = self
            .categories
            .iter()
            .map(|category| card_matches(filter.as_deref(), category.as_deref()))
            .collect();
        self.active = filter;
        Some(FilterSelection { buttons, cards })
    }
}
