//! Viewport intersection observers.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::app::dom::js_detail;
use crate::error::{UiError, UiResult};

/// One entry of an observer batch.
pub(crate) struct Sample {
    pub(crate) target: Element,
    pub(crate) is_intersecting: bool,
    pub(crate) ratio: f64,
}

/// Observer plus the callback it calls; disconnects when dropped.
pub(crate) struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObserverHandle {
    pub(crate) fn observe<F>(elements: &[Element], threshold: f64, mut on_batch: F) -> UiResult<Self>
    where
        F: FnMut(Vec<Sample>) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let samples = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| Sample {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                    .collect();
                on_batch(samples);
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| UiError::Dom {
                    operation: "create intersection observer",
                    detail: js_detail(&err),
                })?;
        for element in elements {
            observer.observe(element);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub(crate) fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
