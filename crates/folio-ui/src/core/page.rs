//! Page controller state and its event reducer.
//!
//! # Design
//! - `PageState` is owned by whoever hosts the page; there is no global instance.
//! - `handle` is a pure transition returning [`Effect`]s; the host renders them.
//! - Render effects describe DOM changes as data so transitions test without a document.

use crate::config::PortfolioConfig;
use crate::core::actions::{ActionOutcome, PageAction};
use crate::core::contact::{CONFIRMATION_MESSAGE, CONFIRMATION_TITLE, ContactMessage};
use crate::core::filter::FilterBoard;
use crate::core::menu::MobileMenu;
use crate::core::nav::{SectionTracker, is_scrolled};
use crate::core::schedule::{Schedule, Task};
use crate::core::skills::{SkillBoard, SkillId, SkillPhase};
use crate::core::theme::ThemeMode;
use crate::core::toast::ToastState;
use crate::core::typing::{CursorBlink, TypingAnimation};
use crate::core::visibility::Intersection;

/// Static structure captured from the document at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// Ids of tracked sections in document order.
    pub sections: Vec<String>,
    /// Raw declared level for each skill item, in document order.
    pub skill_levels: Vec<Option<String>>,
    /// Filter value for each filter button, in document order; `None` when a
    /// button declares no value.
    pub filter_buttons: Vec<Option<String>>,
    /// Category for each project card, in document order.
    pub project_categories: Vec<Option<String>>,
}

/// Inputs to the page controller.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// Document structure is ready.
    Initialize,
    /// Window scrolled to a vertical offset.
    Scrolled {
        /// Vertical scroll offset in pixels.
        offset_y: f64,
    },
    /// A nav link was clicked; `target` is its `href` selector, if any.
    NavLinkClicked {
        /// Selector for the destination element.
        target: Option<String>,
    },
    /// A theme toggle was clicked.
    ThemeToggled,
    /// The mobile menu button was clicked.
    MobileMenuToggled,
    /// A scheduled task came due.
    TimerFired(Task),
    /// Skill item observer batch.
    SkillsIntersected(Vec<Intersection<SkillId>>),
    /// Section observer batch.
    SectionsIntersected(Vec<Intersection<String>>),
    /// The filter button at this index was clicked.
    FilterSelected(usize),
    /// The contact form was submitted.
    ContactSubmitted(ContactMessage),
    /// An action invoked from page markup.
    Action(PageAction),
    /// The host is shutting the page down.
    Teardown,
}

/// A DOM change, described as data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Render {
    /// Set the root theme class.
    Theme(ThemeMode),
    /// Toggle the navigation bar's scrolled marker.
    NavScrolled(bool),
    /// Open or close the mobile menu.
    MobileMenu(bool),
    /// Replace the caption text.
    TypingText(String),
    /// Set the caption cursor's opacity.
    CursorOpacity(&'static str),
    /// Set a skill bar's width.
    SkillWidth {
        /// Skill item.
        id: SkillId,
        /// CSS width value.
        width: String,
    },
    /// Filter button active states, index-aligned with the buttons.
    FilterButtons(Vec<bool>),
    /// Project card visibility, index-aligned with the cards.
    ProjectCards(Vec<bool>),
    /// Highlight the nav links pointing at this section.
    ActiveSection(String),
    /// Show the toast with this content.
    ToastShown {
        /// Toast title.
        title: String,
        /// Toast body.
        message: String,
    },
    /// Hide the toast.
    ToastHidden,
}

/// Where to scroll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    /// First element matching a CSS selector.
    Selector(String),
    /// Element with this id.
    ElementId(String),
    /// Top of the page.
    Top,
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Mutate the document.
    Render(Render),
    /// Start a timer.
    Schedule(Schedule),
    /// Store the theme preference.
    PersistTheme {
        /// Storage key.
        key: String,
        /// Theme to store.
        theme: ThemeMode,
    },
    /// Smooth-scroll the viewport.
    ScrollTo(ScrollTarget),
    /// Clear the contact form.
    ResetContactForm,
    /// Ask the icon library to render icons.
    RenderIcons,
    /// Stop observing a skill item.
    Unobserve(SkillId),
    /// Cancel every timer, listener and observer the host holds.
    Teardown,
}

/// The page controller's application state.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    config: PortfolioConfig,
    theme: ThemeMode,
    nav_scrolled: bool,
    menu: MobileMenu,
    typing: TypingAnimation,
    cursor: CursorBlink,
    skills: SkillBoard,
    sections: SectionTracker,
    filters: FilterBoard,
    toast: ToastState,
    torn_down: bool,
}

impl PageState {
    /// Build the controller from configuration, captured layout and the stored theme.
    #[must_use]
    pub fn new(config: PortfolioConfig, layout: PageLayout, stored_theme: Option<&str>) -> Self {
        let theme = ThemeMode::from_stored(stored_theme, config.theme.default_theme);
        Self {
            theme,
            nav_scrolled: false,
            menu: MobileMenu::default(),
            typing: TypingAnimation::new(&config.typing.caption),
            cursor: CursorBlink::default(),
            skills: SkillBoard::new(&layout.skill_levels),
            sections: SectionTracker::new(layout.sections),
            filters: FilterBoard::new(layout.filter_buttons, layout.project_categories),
            toast: ToastState::default(),
            torn_down: false,
            config,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    /// Active theme.
    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Whether the navigation bar carries the scrolled marker.
    #[must_use]
    pub const fn nav_scrolled(&self) -> bool {
        self.nav_scrolled
    }

    /// Whether the mobile menu is open.
    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Caption text revealed so far.
    #[must_use]
    pub fn typed_text(&self) -> String {
        self.typing.text()
    }

    /// Whether the caption cursor is visible.
    #[must_use]
    pub const fn cursor_visible(&self) -> bool {
        self.cursor.is_visible()
    }

    /// Phase of a skill item.
    #[must_use]
    pub fn skill_phase(&self, id: SkillId) -> Option<SkillPhase> {
        self.skills.phase(id)
    }

    /// Section whose nav link is highlighted.
    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.sections.active()
    }

    /// Applied project filter; `None` after a button without a value.
    #[must_use]
    pub fn active_filter(&self) -> Option<&str> {
        self.filters.active()
    }

    /// Toast slot.
    #[must_use]
    pub const fn toast(&self) -> &ToastState {
        &self.toast
    }

    /// Whether teardown has run; a torn-down page ignores every event.
    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Apply one event and return the effects the host must carry out, in order.
    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        if self.torn_down {
            return Vec::new();
        }
        match event {
            PageEvent::Initialize => self.initialize(),
            PageEvent::Scrolled { offset_y } => {
                self.nav_scrolled = is_scrolled(offset_y, self.config.nav.scroll_threshold_px);
                vec![Effect::Render(Render::NavScrolled(self.nav_scrolled))]
            }
            PageEvent::NavLinkClicked { target } => {
                self.menu.close();
                let mut effects: Vec<Effect> = target
                    .map(|target| Effect::ScrollTo(ScrollTarget::Selector(target)))
                    .into_iter()
                    .collect();
                effects.push(Effect::Render(Render::MobileMenu(false)));
                effects
            }
            PageEvent::ThemeToggled => {
                self.theme = self.theme.toggled();
                tracing::debug!(theme = self.theme.as_str(), "theme toggled");
                vec![
                    Effect::Render(Render::Theme(self.theme)),
                    Effect::PersistTheme {
                        key: self.config.theme.storage_key.clone(),
                        theme: self.theme,
                    },
                ]
            }
            PageEvent::MobileMenuToggled => {
                let open = self.menu.toggle();
                vec![Effect::Render(Render::MobileMenu(open))]
            }
            PageEvent::TimerFired(task) => self.run_task(task),
            PageEvent::SkillsIntersected(entries) => {
                let threshold = self.config.skills.visibility_threshold;
                let delay = self.config.skills.reveal_delay_ms;
                self.skills
                    .intersect(&entries, threshold)
                    .into_iter()
                    .flat_map(|id| {
                        [
                            Effect::Unobserve(id),
                            Effect::Schedule(Schedule::Once {
                                after_ms: delay,
                                task: Task::RevealSkill(id),
                            }),
                        ]
                    })
                    .collect()
            }
            PageEvent::SectionsIntersected(entries) => {
                let threshold = self.config.sections.visibility_threshold;
                self.sections
                    .apply(&entries, threshold)
                    .map(|id| vec![Effect::Render(Render::ActiveSection(id.to_string()))])
                    .unwrap_or_default()
            }
            PageEvent::FilterSelected(button) => {
                let Some(selection) = self.filters.select(button) else {
                    tracing::debug!(button, "no filter button at index");
                    return Vec::new();
                };
                tracing::debug!(button, filter = ?self.filters.active(), "project filter applied");
                vec![
                    Effect::Render(Render::FilterButtons(selection.buttons)),
                    Effect::Render(Render::ProjectCards(selection.cards)),
                ]
            }
            PageEvent::ContactSubmitted(message) => {
                tracing::info!(
                    name = %message.name,
                    email = %message.email,
                    subject = %message.subject,
                    message_len = message.message.len(),
                    "contact form submitted"
                );
                let mut effects = self.show_toast(CONFIRMATION_TITLE, CONFIRMATION_MESSAGE);
                effects.push(Effect::ResetContactForm);
                effects
            }
            PageEvent::Action(action) => self.run_action(&action),
            PageEvent::Teardown => {
                self.torn_down = true;
                vec![Effect::Teardown]
            }
        }
    }

    fn initialize(&self) -> Vec<Effect> {
        let typing = &self.config.typing;
        vec![
            Effect::Render(Render::Theme(self.theme)),
            Effect::Schedule(Schedule::Once {
                after_ms: typing.start_delay_ms,
                task: Task::TypeNext,
            }),
            Effect::Schedule(Schedule::Every {
                period_ms: typing.cursor_blink_ms,
                task: Task::BlinkCursor,
            }),
            Effect::RenderIcons,
            Effect::Schedule(Schedule::Once {
                after_ms: self.config.icons.rerender_delay_ms,
                task: Task::RerenderIcons,
            }),
        ]
    }

    fn run_task(&mut self, task: Task) -> Vec<Effect> {
        match task {
            Task::TypeNext => {
                let Some(text) = self.typing.advance() else {
                    return Vec::new();
                };
                let mut effects = vec![Effect::Render(Render::TypingText(text))];
                if !self.typing.is_complete() {
                    effects.push(Effect::Schedule(Schedule::Once {
                        after_ms: self.config.typing.step_ms,
                        task: Task::TypeNext,
                    }));
                }
                effects
            }
            Task::BlinkCursor => {
                self.cursor.tick();
                vec![Effect::Render(Render::CursorOpacity(self.cursor.opacity()))]
            }
            Task::RevealSkill(id) => self
                .skills
                .reveal(id)
                .map(|width| vec![Effect::Render(Render::SkillWidth { id, width })])
                .unwrap_or_default(),
            Task::HideToast(ticket) => {
                // Hides whatever is showing, even a toast shown after this ticket.
                let was_visible = self.toast.hide();
                tracing::debug!(
                    ticket = ticket.0,
                    latest = self.toast.shown(),
                    was_visible,
                    "toast auto-hide"
                );
                vec![Effect::Render(Render::ToastHidden)]
            }
            Task::RerenderIcons => vec![Effect::RenderIcons],
        }
    }

    fn run_action(&mut self, action: &PageAction) -> Vec<Effect> {
        match action.resolve(&self.config.links) {
            ActionOutcome::Toast { title, message } => {
                tracing::info!(?action, "simulated page action");
                self.show_toast(&title, &message)
            }
            ActionOutcome::ScrollToElement(id) => {
                vec![Effect::ScrollTo(ScrollTarget::ElementId(id))]
            }
            ActionOutcome::ScrollToTop => vec![Effect::ScrollTo(ScrollTarget::Top)],
            ActionOutcome::HideToast => {
                let was_visible = self.toast.hide();
                tracing::debug!(was_visible, "toast hidden on request");
                vec![Effect::Render(Render::ToastHidden)]
            }
            ActionOutcome::Ignored => {
                tracing::debug!(?action, "no link configured for action");
                Vec::new()
            }
        }
    }

    fn show_toast(&mut self, title: &str, message: &str) -> Vec<Effect> {
        let ticket = self.toast.show(title, message);
        vec![
            Effect::Render(Render::ToastShown {
                title: title.to_string(),
                message: message.to_string(),
            }),
            Effect::Schedule(Schedule::Once {
                after_ms: self.config.toast.display_ms,
                task: Task::HideToast(ticket),
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(stored_theme: Option<&str>) -> PageState {
        let layout = PageLayout {
            sections: vec!["home".to_string(), "about".to_string()],
            skill_levels: vec![Some("80".to_string())],
            filter_buttons: vec![Some("all".to_string()), Some("web".to_string())],
            project_categories: vec![Some("web".to_string()), Some("cli".to_string())],
        };
        PageState::new(PortfolioConfig::default(), layout, stored_theme)
    }

    #[test]
    fn initialize_applies_theme_first_and_icons_last() {
        let mut page = page(Some("light"));
        let effects = page.handle(PageEvent::Initialize);
        assert_eq!(effects.first(), Some(&Effect::Render(Render::Theme(ThemeMode::Light))));
        assert_eq!(
            effects.last(),
            Some(&Effect::Schedule(Schedule::Once {
                after_ms: 100,
                task: Task::RerenderIcons,
            }))
        );
        assert!(effects.contains(&Effect::Schedule(Schedule::Every {
            period_ms: 500,
            task: Task::BlinkCursor,
        })));
    }

    #[test]
    fn scroll_marker_tracks_threshold() {
        let mut page = page(None);
        page.handle(PageEvent::Scrolled { offset_y: 51.0 });
        assert!(page.nav_scrolled());
        let effects = page.handle(PageEvent::Scrolled { offset_y: 50.0 });
        assert!(!page.nav_scrolled());
        assert_eq!(effects, vec![Effect::Render(Render::NavScrolled(false))]);
    }

    #[test]
    fn theme_toggle_persists_new_value() {
        let mut page = page(None);
        assert_eq!(page.theme(), ThemeMode::Dark);
        let effects = page.handle(PageEvent::ThemeToggled);
        assert_eq!(
            effects,
            vec![
                Effect::Render(Render::Theme(ThemeMode::Light)),
                Effect::PersistTheme {
                    key: "theme".to_string(),
                    theme: ThemeMode::Light,
                },
            ]
        );
    }

    #[test]
    fn nav_click_scrolls_and_closes_menu() {
        let mut page = page(None);
        page.handle(PageEvent::MobileMenuToggled);
        assert!(page.menu_open());
        let effects = page.handle(PageEvent::NavLinkClicked {
            target: Some("#about".to_string()),
        });
        assert!(!page.menu_open());
        assert_eq!(
            effects,
            vec![
                Effect::ScrollTo(ScrollTarget::Selector("#about".to_string())),
                Effect::Render(Render::MobileMenu(false)),
            ]
        );
    }

    #[test]
    fn nav_click_without_href_still_closes_menu() {
        let mut page = page(None);
        page.handle(PageEvent::MobileMenuToggled);
        let effects = page.handle(PageEvent::NavLinkClicked { target: None });
        assert!(!page.menu_open());
        assert_eq!(effects, vec![Effect::Render(Render::MobileMenu(false))]);
    }

    #[test]
    fn typing_stops_scheduling_after_last_char() {
        let mut config = PortfolioConfig::default();
        config.typing.caption = "ab".to_string();
        let mut page = PageState::new(config, PageLayout::default(), None);
        let first = page.handle(PageEvent::TimerFired(Task::TypeNext));
        assert_eq!(first.len(), 2);
        let last = page.handle(PageEvent::TimerFired(Task::TypeNext));
        assert_eq!(last, vec![Effect::Render(Render::TypingText("ab".to_string()))]);
        assert!(page.handle(PageEvent::TimerFired(Task::TypeNext)).is_empty());
    }

    #[test]
    fn skill_reveal_is_unobserved_then_deferred() {
        let mut page = page(None);
        let effects = page.handle(PageEvent::SkillsIntersected(vec![Intersection::new(
            SkillId(0),
            true,
            0.75,
        )]));
        assert_eq!(
            effects,
            vec![
                Effect::Unobserve(SkillId(0)),
                Effect::Schedule(Schedule::Once {
                    after_ms: 200,
                    task: Task::RevealSkill(SkillId(0)),
                }),
            ]
        );
        assert_eq!(
            page.handle(PageEvent::TimerFired(Task::RevealSkill(SkillId(0)))),
            vec![Effect::Render(Render::SkillWidth {
                id: SkillId(0),
                width: "80%".to_string(),
            })]
        );
    }

    #[test]
    fn skill_just_below_threshold_stays_observed() {
        let mut page = page(None);
        let effects = page.handle(PageEvent::SkillsIntersected(vec![Intersection::new(
            SkillId(0),
            true,
            0.4992,
        )]));
        assert!(effects.is_empty());
        assert_eq!(page.skill_phase(SkillId(0)), Some(SkillPhase::Watching));
    }

    #[test]
    fn filter_click_marks_only_clicked_button() {
        let mut page = page(None);
        let effects = page.handle(PageEvent::FilterSelected(1));
        assert_eq!(
            effects,
            vec![
                Effect::Render(Render::FilterButtons(vec![false, true])),
                Effect::Render(Render::ProjectCards(vec![true, false])),
            ]
        );
        assert_eq!(page.active_filter(), Some("web"));
        assert!(page.handle(PageEvent::FilterSelected(5)).is_empty());
    }

    #[test]
    fn teardown_is_reported_once_and_silences_events() {
        let mut page = page(None);
        page.handle(PageEvent::Initialize);
        assert_eq!(page.handle(PageEvent::Teardown), vec![Effect::Teardown]);
        assert!(page.is_torn_down());
        assert!(page.handle(PageEvent::Teardown).is_empty());
        assert!(page.handle(PageEvent::TimerFired(Task::TypeNext)).is_empty());
        assert!(page.handle(PageEvent::ThemeToggled).is_empty());
        assert_eq!(page.theme(), ThemeMode::Dark);
    }

    #[test]
    fn ignored_actions_produce_nothing() {
        let mut page = page(None);
        let effects = page.handle(PageEvent::Action(PageAction::OpenSocial(
            "friendster".to_string(),
        )));
        assert!(effects.is_empty());
        assert_eq!(page.toast().shown(), 0);
    }

    #[test]
    fn manual_hide_clears_toast() {
        let mut page = page(None);
        page.handle(PageEvent::Action(PageAction::DownloadCv));
        assert!(page.toast().is_visible());
        let effects = page.handle(PageEvent::Action(PageAction::HideToast));
        assert!(!page.toast().is_visible());
        assert_eq!(effects, vec![Effect::Render(Render::ToastHidden)]);
    }
}
