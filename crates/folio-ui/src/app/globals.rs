//! Global functions for inline `onclick` attributes.

use std::rc::Weak;

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::Window;

use crate::app::Runtime;
use crate::app::dom::js_detail;
use crate::core::actions::{MARKUP_FUNCTIONS, PageAction};
use crate::core::page::PageEvent;
use crate::error::{UiError, UiResult};

type MarkupCallback = Closure<dyn FnMut(JsValue, JsValue)>;

/// Functions installed on `window`; removed again when dropped.
pub(crate) struct GlobalActions {
    window: Window,
    installed: Vec<(&'static str, MarkupCallback)>,
}

impl GlobalActions {
    pub(crate) fn publish(window: Window, runtime: &Weak<Runtime>) -> UiResult<Self> {
        let mut actions = Self {
            window,
            installed: Vec::with_capacity(MARKUP_FUNCTIONS.len()),
        };
        for function in MARKUP_FUNCTIONS {
            let weak = runtime.clone();
            let callback = MarkupCallback::wrap(Box::new(move |first: JsValue, second: JsValue| {
                let args = [first.as_string(), second.as_string()];
                let Some(action) = PageAction::from_markup(function, &args) else {
                    tracing::warn!(function, "markup call missing arguments");
                    return;
                };
                if let Some(runtime) = weak.upgrade() {
                    runtime.dispatch(PageEvent::Action(action));
                }
            }));
            Reflect::set(
                &actions.window,
                &JsValue::from_str(function),
                callback.as_ref(),
            )
            .map_err(|err| UiError::Dom {
                operation: "publish markup function",
                detail: js_detail(&err),
            })?;
            actions.installed.push((function, callback));
        }
        Ok(actions)
    }
}

impl Drop for GlobalActions {
    fn drop(&mut self) {
        for (function, _) in &self.installed {
            if let Err(err) = Reflect::delete_property(&self.window, &JsValue::from_str(function)) {
                tracing::debug!(function, detail = %js_detail(&err), "markup function not removed");
            }
        }
    }
}
