//! Element lookup and render application for the live document.
//!
//! # Design
//! - Elements are captured once at startup; the page is static markup.
//! - Every lookup is optional here. Features that cannot run without an
//!   element report it through [`require`] during setup.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, FormData, HtmlElement, HtmlFormElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions,
};

use crate::core::contact::ContactMessage;
use crate::core::filter::{
    ACTIVE_BUTTON_CLASS, HIDDEN_CARD_CLASS, OUTLINE_BUTTON_CLASS, PRIMARY_BUTTON_CLASS,
};
use crate::core::menu::{MENU_OPEN_CLASS, TOGGLE_ACTIVE_CLASS};
use crate::core::nav::{ACTIVE_LINK_CLASS, SCROLLED_CLASS};
use crate::core::page::{PageLayout, Render, ScrollTarget};
use crate::core::theme::ThemeMode;
use crate::core::toast::TOAST_VISIBLE_CLASS;
use crate::error::{UiError, UiResult};

pub(crate) const NAV_SELECTOR: &str = ".nav";
pub(crate) const NAV_LINK_SELECTOR: &str = ".nav-link, .mobile-nav-link";
pub(crate) const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub(crate) const MOBILE_MENU_SELECTOR: &str = "#mobileMenu";
pub(crate) const MOBILE_MENU_TOGGLE_SELECTOR: &str = "#mobileMenuToggle";
pub(crate) const TYPING_TEXT_SELECTOR: &str = "#typingText";
pub(crate) const TYPING_CURSOR_SELECTOR: &str = "#typingCursor";
pub(crate) const SKILL_ITEM_SELECTOR: &str = ".skill-item";
pub(crate) const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub(crate) const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub(crate) const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub(crate) const CONTACT_FORM_SELECTOR: &str = "#contactForm";
pub(crate) const TOAST_SELECTOR: &str = "#toast";
pub(crate) const TOAST_TITLE_SELECTOR: &str = "#toastTitle";
pub(crate) const TOAST_MESSAGE_SELECTOR: &str = "#toastMessage";
pub(crate) const SECTION_SELECTOR: &str = "section[id]";

/// Elements the controller reads or mutates.
pub(crate) struct PageDom {
    pub(crate) document: Document,
    pub(crate) nav: Option<Element>,
    pub(crate) nav_links: Vec<Element>,
    pub(crate) theme_toggles: Vec<Element>,
    pub(crate) mobile_menu: Option<Element>,
    pub(crate) menu_toggle: Option<Element>,
    pub(crate) typing_text: Option<Element>,
    pub(crate) typing_cursor: Option<HtmlElement>,
    pub(crate) skill_items: Vec<Element>,
    pub(crate) skill_bars: Vec<Option<HtmlElement>>,
    pub(crate) filter_buttons: Vec<Element>,
    pub(crate) project_cards: Vec<HtmlElement>,
    pub(crate) contact_form: Option<HtmlFormElement>,
    pub(crate) toast: Option<Element>,
    pub(crate) toast_title: Option<Element>,
    pub(crate) toast_message: Option<Element>,
    pub(crate) sections: Vec<Element>,
}

impl PageDom {
    pub(crate) fn capture(document: Document) -> Self {
        let skill_items = query_all(&document, SKILL_ITEM_SELECTOR);
        let skill_bars = skill_items
            .iter()
            .map(|item| {
                item.query_selector(SKILL_BAR_SELECTOR)
                    .ok()
                    .flatten()
                    .and_then(|bar| bar.dyn_into::<HtmlElement>().ok())
            })
            .collect();
        Self {
            nav: query_one(&document, NAV_SELECTOR),
            nav_links: query_all(&document, NAV_LINK_SELECTOR),
            theme_toggles: query_all(&document, THEME_TOGGLE_SELECTOR),
            mobile_menu: query_one(&document, MOBILE_MENU_SELECTOR),
            menu_toggle: query_one(&document, MOBILE_MENU_TOGGLE_SELECTOR),
            typing_text: query_one(&document, TYPING_TEXT_SELECTOR),
            typing_cursor: query_one(&document, TYPING_CURSOR_SELECTOR)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            skill_items,
            skill_bars,
            filter_buttons: query_all(&document, FILTER_BUTTON_SELECTOR),
            project_cards: query_all(&document, PROJECT_CARD_SELECTOR)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect(),
            contact_form: query_one(&document, CONTACT_FORM_SELECTOR)
                .and_then(|el| el.dyn_into::<HtmlFormElement>().ok()),
            toast: query_one(&document, TOAST_SELECTOR),
            toast_title: query_one(&document, TOAST_TITLE_SELECTOR),
            toast_message: query_one(&document, TOAST_MESSAGE_SELECTOR),
            sections: query_all(&document, SECTION_SELECTOR),
            document,
        }
    }

    /// Snapshot the structure the page model needs.
    pub(crate) fn layout(&self) -> PageLayout {
        PageLayout {
            sections: self.sections.iter().map(Element::id).collect(),
            skill_levels: self
                .skill_bars
                .iter()
                .map(|bar| bar.as_ref().and_then(|bar| bar.get_attribute("data-level")))
                .collect(),
            filter_buttons: self
                .filter_buttons
                .iter()
                .map(|button| button.get_attribute("data-filter"))
                .collect(),
            project_categories: self
                .project_cards
                .iter()
                .map(|card| card.get_attribute("data-category"))
                .collect(),
        }
    }

    pub(crate) fn render(&self, render: Render) {
        match render {
            Render::Theme(theme) => self.render_theme(theme),
            Render::NavScrolled(scrolled) => {
                if let Some(nav) = &self.nav {
                    set_class(nav, SCROLLED_CLASS, scrolled);
                }
            }
            Render::MobileMenu(open) => {
                if let Some(menu) = &self.mobile_menu {
                    set_class(menu, MENU_OPEN_CLASS, open);
                }
                if let Some(toggle) = &self.menu_toggle {
                    set_class(toggle, TOGGLE_ACTIVE_CLASS, open);
                }
            }
            Render::TypingText(text) => {
                if let Some(target) = &self.typing_text {
                    target.set_text_content(Some(&text));
                }
            }
            Render::CursorOpacity(opacity) => {
                if let Some(cursor) = &self.typing_cursor {
                    set_style(cursor, "opacity", opacity);
                }
            }
            Render::SkillWidth { id, width } => {
                if let Some(Some(bar)) = self.skill_bars.get(id.0) {
                    set_style(bar, "width", &width);
                }
            }
            Render::FilterButtons(states) => {
                for (button, active) in self.filter_buttons.iter().zip(states) {
                    set_class(button, ACTIVE_BUTTON_CLASS, active);
                    set_class(button, PRIMARY_BUTTON_CLASS, active);
                    set_class(button, OUTLINE_BUTTON_CLASS, !active);
                }
            }
            Render::ProjectCards(visible) => {
                for (card, shown) in self.project_cards.iter().zip(visible) {
                    set_class(card, HIDDEN_CARD_CLASS, !shown);
                    set_style(card, "display", if shown { "block" } else { "none" });
                }
            }
            Render::ActiveSection(section) => {
                for link in &self.nav_links {
                    let active =
                        link.get_attribute("data-section").as_deref() == Some(section.as_str());
                    set_class(link, ACTIVE_LINK_CLASS, active);
                }
            }
            Render::ToastShown { title, message } => {
                if let Some(target) = &self.toast_title {
                    target.set_text_content(Some(&title));
                }
                if let Some(target) = &self.toast_message {
                    target.set_text_content(Some(&message));
                }
                if let Some(toast) = &self.toast {
                    set_class(toast, TOAST_VISIBLE_CLASS, true);
                }
            }
            Render::ToastHidden => {
                if let Some(toast) = &self.toast {
                    set_class(toast, TOAST_VISIBLE_CLASS, false);
                }
            }
        }
    }

    fn render_theme(&self, theme: ThemeMode) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        set_class(&root, theme.toggled().as_str(), false);
        set_class(&root, theme.as_str(), true);
    }

    pub(crate) fn scroll_to(&self, target: &ScrollTarget) {
        match target {
            ScrollTarget::Selector(selector) => {
                if let Some(element) = query_one(&self.document, selector) {
                    scroll_into_view(&element);
                }
            }
            ScrollTarget::ElementId(id) => {
                if let Some(element) = self.document.get_element_by_id(id) {
                    scroll_into_view(&element);
                }
            }
            ScrollTarget::Top => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                gloo::utils::window().scroll_to_with_scroll_to_options(&options);
            }
        }
    }

    pub(crate) fn read_contact_form(&self) -> Option<ContactMessage> {
        let form = self.contact_form.as_ref()?;
        let data = match FormData::new_with_form(form) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(detail = %js_detail(&err), "contact form could not be read");
                return None;
            }
        };
        Some(ContactMessage::from_lookup(|field| data.get(field).as_string()))
    }

    pub(crate) fn reset_contact_form(&self) {
        if let Some(form) = &self.contact_form {
            form.reset();
        }
    }
}

/// Fail setup for a feature whose element is missing.
pub(crate) fn require<'a, T>(element: Option<&'a T>, selector: &'static str) -> UiResult<&'a T> {
    element.ok_or(UiError::MissingElement { selector })
}

/// Call `createIcons()` on the named global icon library when the page loaded one.
pub(crate) fn render_icons(library: &str) {
    let global = js_sys::global();
    let Ok(library_value) = Reflect::get(&global, &JsValue::from_str(library)) else {
        return;
    };
    if library_value.is_undefined() || library_value.is_null() {
        return;
    }
    let Ok(create) = Reflect::get(&library_value, &JsValue::from_str("createIcons")) else {
        return;
    };
    let Ok(create) = create.dyn_into::<Function>() else {
        return;
    };
    if let Err(err) = create.call0(&library_value) {
        tracing::warn!(library, detail = %js_detail(&err), "icon render failed");
    }
}

pub(crate) fn js_detail(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        tracing::warn!(class, detail = %js_detail(&err), "class toggle failed");
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        tracing::warn!(property, detail = %js_detail(&err), "style update failed");
    }
}

fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
