//! wasm32 runtime binding the page model to the live document.
//!
//! # Design
//! - One [`Runtime`] per started page, owned by the [`Portfolio`] handle.
//! - Listeners, timers and observers capture a `Weak` runtime so a dropped
//!   handle stops every callback.
//! - Teardown is a page transition; its effect releases everything the runtime owns.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use folio_telemetry::{LogFormat, LoggingConfig, init_logging};
use gloo::console;
use gloo::events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::PortfolioConfig;
use crate::core::actions::PageAction;
use crate::core::page::{Effect, PageEvent, PageState};
use crate::core::schedule::Schedule;
use crate::error::UiResult;
use dom::PageDom;
use globals::GlobalActions;
use observers::ObserverHandle;
use timers::TimerRegistry;

mod dom;
mod globals;
mod observers;
mod preferences;
mod timers;
mod wiring;

/// Global name the page markup calls through.
const WINDOW_HANDLE: &str = "portfolio";

pub(crate) struct Runtime {
    page: RefCell<PageState>,
    dom: PageDom,
    timers: RefCell<TimerRegistry>,
    listeners: RefCell<Vec<EventListener>>,
    skill_observer: RefCell<Option<ObserverHandle>>,
    section_observer: RefCell<Option<ObserverHandle>>,
    globals: RefCell<Option<GlobalActions>>,
    icon_library: String,
}

impl Runtime {
    fn new(config: PortfolioConfig, dom: PageDom, stored_theme: Option<&str>) -> Self {
        let icon_library = config.icons.library_global.clone();
        let page = PageState::new(config, dom.layout(), stored_theme);
        Self {
            page: RefCell::new(page),
            dom,
            timers: RefCell::new(TimerRegistry::default()),
            listeners: RefCell::new(Vec::new()),
            skill_observer: RefCell::new(None),
            section_observer: RefCell::new(None),
            globals: RefCell::new(None),
            icon_library,
        }
    }

    pub(crate) fn dispatch(self: &Rc<Self>, event: PageEvent) {
        let effects = self.page.borrow_mut().handle(event);
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::Render(render) => self.dom.render(render),
            Effect::Schedule(schedule) => self.schedule(schedule),
            Effect::PersistTheme { key, theme } => preferences::persist_theme(&key, theme),
            Effect::ScrollTo(target) => self.dom.scroll_to(&target),
            Effect::ResetContactForm => self.dom.reset_contact_form(),
            Effect::RenderIcons => dom::render_icons(&self.icon_library),
            Effect::Unobserve(id) => {
                let observer = self.skill_observer.borrow();
                if let (Some(observer), Some(item)) = (observer.as_ref(), self.dom.skill_items.get(id.0))
                {
                    observer.unobserve(item);
                }
            }
            Effect::Teardown => self.release(),
        }
    }

    fn schedule(self: &Rc<Self>, schedule: Schedule) {
        let runtime = Rc::downgrade(self);
        match schedule {
            Schedule::Once { after_ms, task } => {
                let mut timers = self.timers.borrow_mut();
                let id = timers.next_id();
                let timeout = Timeout::new(after_ms, move || {
                    if let Some(runtime) = runtime.upgrade() {
                        runtime.timers.borrow_mut().finish(id);
                        runtime.dispatch(PageEvent::TimerFired(task));
                    }
                });
                timers.insert_timeout(id, timeout);
            }
            Schedule::Every { period_ms, task } => {
                let interval = Interval::new(period_ms, move || {
                    if let Some(runtime) = runtime.upgrade() {
                        runtime.dispatch(PageEvent::TimerFired(task));
                    }
                });
                self.timers.borrow_mut().push_interval(interval);
            }
        }
    }

    fn listen(&self, listener: EventListener) {
        self.listeners.borrow_mut().push(listener);
    }

    fn release(&self) {
        let mut timers = self.timers.borrow_mut();
        tracing::info!(timers = timers.pending(), "portfolio torn down");
        timers.cancel_all();
        self.listeners.borrow_mut().clear();
        self.skill_observer.borrow_mut().take();
        self.section_observer.borrow_mut().take();
        self.globals.borrow_mut().take();
    }
}

/// Handle to a running page; exposes the actions page markup invokes.
#[wasm_bindgen]
pub struct Portfolio {
    runtime: Rc<Runtime>,
}

impl Portfolio {
    fn act(&self, action: PageAction) {
        self.runtime.dispatch(PageEvent::Action(action));
    }
}

#[wasm_bindgen]
impl Portfolio {
    /// Smooth-scroll to the element with this id.
    #[wasm_bindgen(js_name = scrollToSection)]
    pub fn scroll_to_section(&self, section_id: String) {
        self.act(PageAction::ScrollToSection(section_id));
    }

    /// Smooth-scroll to the top of the page.
    #[wasm_bindgen(js_name = scrollToTop)]
    pub fn scroll_to_top(&self) {
        self.act(PageAction::ScrollToTop);
    }

    /// Simulate the CV download.
    #[wasm_bindgen(js_name = downloadCV)]
    pub fn download_cv(&self) {
        self.act(PageAction::DownloadCv);
    }

    /// Simulate opening a project link of `kind` (`github` or `demo`).
    #[wasm_bindgen(js_name = openProject)]
    pub fn open_project(&self, kind: String, project: String) {
        self.act(PageAction::OpenProject { kind, project });
    }

    /// Simulate opening the full project listing.
    #[wasm_bindgen(js_name = viewAllProjects)]
    pub fn view_all_projects(&self) {
        self.act(PageAction::ViewAllProjects);
    }

    /// Simulate a contact channel.
    #[wasm_bindgen(js_name = contactAction)]
    pub fn contact_action(&self, kind: String) {
        self.act(PageAction::ContactAction(kind));
    }

    /// Simulate opening a social profile.
    #[wasm_bindgen(js_name = openSocial)]
    pub fn open_social(&self, platform: String) {
        self.act(PageAction::OpenSocial(platform));
    }

    /// Show a toast that auto-hides after the configured delay.
    #[wasm_bindgen(js_name = showToast)]
    pub fn show_toast(&self, title: String, message: String) {
        self.act(PageAction::ShowToast { title, message });
    }

    /// Hide the toast now.
    #[wasm_bindgen(js_name = hideToast)]
    pub fn hide_toast(&self) {
        self.act(PageAction::HideToast);
    }

    /// Stop all timers, listeners and observers and remove the global functions.
    pub fn teardown(&self) {
        self.runtime.dispatch(PageEvent::Teardown);
    }
}

/// Start the controller against the current document.
///
/// # Errors
///
/// Fails when no document is reachable.
#[wasm_bindgen(js_name = startPortfolio)]
pub fn start_portfolio() -> Result<Portfolio, JsValue> {
    console_error_panic_hook::set_once();
    bootstrap()
        .map(|runtime| Portfolio { runtime })
        .map_err(|err| JsValue::from_str(&format!("{err:#}")))
}

/// Entrypoint for wasm32 builds; mounts once the document is parsed, publishes
/// the handle as `window.portfolio` and installs the markup's global functions.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = gloo::utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| mount()).forget();
    } else {
        mount();
    }
}

fn mount() {
    let portfolio = match start_portfolio() {
        Ok(portfolio) => portfolio,
        Err(err) => {
            console::error!("portfolio failed to start", err);
            return;
        }
    };
    let window = gloo::utils::window();
    let runtime = Rc::clone(&portfolio.runtime);
    match GlobalActions::publish(window.clone(), &Rc::downgrade(&runtime)) {
        Ok(globals) => *runtime.globals.borrow_mut() = Some(globals),
        Err(err) => tracing::warn!(error = ?err, "markup functions unavailable"),
    }
    if let Err(err) = Reflect::set(&window, &JsValue::from_str(WINDOW_HANDLE), &portfolio.into()) {
        console::error!("portfolio handle could not be published", err);
    }
}

fn bootstrap() -> anyhow::Result<Rc<Runtime>> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .context("no document available to bind the portfolio to")?;

    let config = preferences::load_config(&document).unwrap_or_else(|err| {
        console::error!("portfolio config rejected; using defaults", format!("{err:?}"));
        PortfolioConfig::default()
    });
    if let Err(err) = init_logging(&LoggingConfig {
        level: &config.logging.level,
        format: LogFormat::infer(),
    }) {
        console::error!("logging unavailable", format!("{err:?}"));
    }

    let stored_theme = preferences::load_theme(&config.theme.storage_key);
    let dom = PageDom::capture(document);
    let runtime = Rc::new(Runtime::new(config, dom, stored_theme.as_deref()));

    let setups: [(&str, fn(&Rc<Runtime>) -> UiResult<()>); 9] = [
        ("navigation", wiring::setup_navigation),
        ("theme toggle", wiring::setup_theme_toggle),
        ("mobile menu", wiring::setup_mobile_menu),
        ("hero caption", wiring::setup_hero),
        ("skills", wiring::setup_skills),
        ("project filters", wiring::setup_project_filters),
        ("contact form", wiring::setup_contact_form),
        ("section tracking", wiring::setup_sections),
        ("toast", wiring::setup_toast),
    ];
    for (feature, setup) in setups {
        if let Err(err) = setup(&runtime) {
            tracing::warn!(feature, error = ?err, "page feature disabled");
        }
    }

    runtime.dispatch(PageEvent::Initialize);
    tracing::info!("portfolio started");
    Ok(runtime)
}
