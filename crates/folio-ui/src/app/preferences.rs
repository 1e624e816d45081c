//! Persistence and environment helpers for the page runtime.

use gloo::console;
use gloo::utils::window;
use web_sys::{Document, Storage};

use crate::app::dom::js_detail;
use crate::config::{CONFIG_ELEMENT_ID, PortfolioConfig};
use crate::core::theme::ThemeMode;
use crate::error::UiResult;

/// Raw stored theme value, if storage is reachable and holds one.
pub(crate) fn load_theme(key: &str) -> Option<String> {
    let storage = local_storage("get", key)?;
    match storage.get_item(key) {
        Ok(value) => value,
        Err(err) => {
            log_storage_error("get", key, &js_detail(&err));
            None
        }
    }
}

pub(crate) fn persist_theme(key: &str, theme: ThemeMode) {
    let Some(storage) = local_storage("set", key) else {
        return;
    };
    if let Err(err) = storage.set_item(key, theme.as_str()) {
        log_storage_error("set", key, &js_detail(&err));
    }
}

/// Read the embedded JSON configuration block, falling back to defaults when absent.
pub(crate) fn load_config(document: &Document) -> UiResult<PortfolioConfig> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PortfolioConfig::default());
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(PortfolioConfig::default());
    }
    Ok(PortfolioConfig::from_json(&raw)?)
}

fn local_storage(operation: &'static str, key: &str) -> Option<Storage> {
    match window().local_storage() {
        Ok(Some(storage)) => Some(storage),
        Ok(None) => {
            log_storage_error(operation, key, "local storage unavailable");
            None
        }
        Err(err) => {
            log_storage_error(operation, key, &js_detail(&err));
            None
        }
    }
}

// Goes straight to the console so it still reports before logging is installed.
fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
