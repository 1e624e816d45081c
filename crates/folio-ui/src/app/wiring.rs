//! Event listeners and observers for each page feature.
//!
//! Every routine reports the element it could not find; list-driven features
//! simply attach nothing when their list is empty.

use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;
use web_sys::Element;

use crate::app::Runtime;
use crate::app::dom::{
    CONTACT_FORM_SELECTOR, MOBILE_MENU_SELECTOR, MOBILE_MENU_TOGGLE_SELECTOR, NAV_SELECTOR,
    TOAST_MESSAGE_SELECTOR, TOAST_SELECTOR, TOAST_TITLE_SELECTOR, TYPING_CURSOR_SELECTOR,
    TYPING_TEXT_SELECTOR, require,
};
use crate::app::observers::{ObserverHandle, Sample};
use crate::core::page::PageEvent;
use crate::core::skills::SkillId;
use crate::core::visibility::Intersection;
use crate::error::UiResult;

pub(crate) fn setup_navigation(runtime: &Rc<Runtime>) -> UiResult<()> {
    for link in &runtime.dom.nav_links {
        let weak = Rc::downgrade(runtime);
        let href = link.get_attribute("href");
        let listener = EventListener::new_with_options(
            link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                send(&weak, PageEvent::NavLinkClicked { target: href.clone() });
            },
        );
        runtime.listen(listener);
    }

    require(runtime.dom.nav.as_ref(), NAV_SELECTOR)?;
    let weak = Rc::downgrade(runtime);
    let listener = EventListener::new(&window(), "scroll", move |_| {
        let offset_y = window().scroll_y().unwrap_or_default();
        send(&weak, PageEvent::Scrolled { offset_y });
    });
    runtime.listen(listener);
    Ok(())
}

pub(crate) fn setup_theme_toggle(runtime: &Rc<Runtime>) -> UiResult<()> {
    for toggle in &runtime.dom.theme_toggles {
        let weak = Rc::downgrade(runtime);
        runtime.listen(EventListener::new(toggle, "click", move |_| {
            send(&weak, PageEvent::ThemeToggled);
        }));
    }
    Ok(())
}

pub(crate) fn setup_mobile_menu(runtime: &Rc<Runtime>) -> UiResult<()> {
    require(runtime.dom.mobile_menu.as_ref(), MOBILE_MENU_SELECTOR)?;
    let toggle = require(runtime.dom.menu_toggle.as_ref(), MOBILE_MENU_TOGGLE_SELECTOR)?;
    let weak = Rc::downgrade(runtime);
    runtime.listen(EventListener::new(toggle, "click", move |_| {
        send(&weak, PageEvent::MobileMenuToggled);
    }));
    Ok(())
}

/// The caption animation itself starts from the initial page transition.
pub(crate) fn setup_hero(runtime: &Rc<Runtime>) -> UiResult<()> {
    require(runtime.dom.typing_text.as_ref(), TYPING_TEXT_SELECTOR)?;
    require(runtime.dom.typing_cursor.as_ref(), TYPING_CURSOR_SELECTOR)?;
    Ok(())
}

pub(crate) fn setup_skills(runtime: &Rc<Runtime>) -> UiResult<()> {
    if runtime.dom.skill_items.is_empty() {
        return Ok(());
    }
    let threshold = runtime.page.borrow().config().skills.visibility_threshold;
    let weak = Rc::downgrade(runtime);
    let observer = ObserverHandle::observe(&runtime.dom.skill_items, threshold, move |samples| {
        let Some(runtime) = weak.upgrade() else {
            return;
        };
        let entries = match_samples(&runtime.dom.skill_items, samples, |index, _| SkillId(index));
        runtime.dispatch(PageEvent::SkillsIntersected(entries));
    })?;
    *runtime.skill_observer.borrow_mut() = Some(observer);
    Ok(())
}

pub(crate) fn setup_project_filters(runtime: &Rc<Runtime>) -> UiResult<()> {
    for (index, button) in runtime.dom.filter_buttons.iter().enumerate() {
        let weak = Rc::downgrade(runtime);
        runtime.listen(EventListener::new(button, "click", move |_| {
            send(&weak, PageEvent::FilterSelected(index));
        }));
    }
    Ok(())
}

pub(crate) fn setup_contact_form(runtime: &Rc<Runtime>) -> UiResult<()> {
    let form = require(runtime.dom.contact_form.as_ref(), CONTACT_FORM_SELECTOR)?;
    let weak = Rc::downgrade(runtime);
    let listener = EventListener::new_with_options(
        form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let Some(runtime) = weak.upgrade() else {
                return;
            };
            if let Some(message) = runtime.dom.read_contact_form() {
                runtime.dispatch(PageEvent::ContactSubmitted(message));
            }
        },
    );
    runtime.listen(listener);
    Ok(())
}

pub(crate) fn setup_sections(runtime: &Rc<Runtime>) -> UiResult<()> {
    if runtime.dom.sections.is_empty() {
        return Ok(());
    }
    let threshold = runtime.page.borrow().config().sections.visibility_threshold;
    let weak = Rc::downgrade(runtime);
    let observer = ObserverHandle::observe(&runtime.dom.sections, threshold, move |samples| {
        let Some(runtime) = weak.upgrade() else {
            return;
        };
        let entries = match_samples(&runtime.dom.sections, samples, |_, element| element.id());
        runtime.dispatch(PageEvent::SectionsIntersected(entries));
    })?;
    *runtime.section_observer.borrow_mut() = Some(observer);
    Ok(())
}

/// Showing and hiding run through page actions; this only checks the markup.
pub(crate) fn setup_toast(runtime: &Rc<Runtime>) -> UiResult<()> {
    require(runtime.dom.toast.as_ref(), TOAST_SELECTOR)?;
    require(runtime.dom.toast_title.as_ref(), TOAST_TITLE_SELECTOR)?;
    require(runtime.dom.toast_message.as_ref(), TOAST_MESSAGE_SELECTOR)?;
    Ok(())
}

fn send(runtime: &Weak<Runtime>, event: PageEvent) {
    if let Some(runtime) = runtime.upgrade() {
        runtime.dispatch(event);
    }
}

fn match_samples<K>(
    elements: &[Element],
    samples: Vec<Sample>,
    key: impl Fn(usize, &Element) -> K,
) -> Vec<Intersection<K>> {
    samples
        .into_iter()
        .filter_map(|sample| {
            let index = elements.iter().position(|element| *element == sample.target)?;
            Some(Intersection::new(
                key(index, &elements[index]),
                sample.is_intersecting,
                sample.ratio,
            ))
        })
        .collect()
}
