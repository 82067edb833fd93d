//! Viewport watching: one IntersectionObserver over a selector, handed back
//! as a disposable subscription so pages can tear it down on unmount.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub struct ViewportWatch {
    observer: IntersectionObserver,
    _on_enter: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportWatch {
    /// Observes every current match of `selector`. `prepare` runs once per
    /// element at install time, `on_enter` every time an element crosses into
    /// the viewport. Returns `None` when the document has no matches, which
    /// silently disables the behavior.
    pub fn install(
        selector: &str,
        root_margin: &str,
        threshold: f64,
        prepare: impl Fn(&Element),
        on_enter: impl Fn(&Element) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let matches = document.query_selector_all(selector).ok()?;
        if matches.length() == 0 {
            return None;
        }

        let callback = Closure::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        on_enter(&entry.target());
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;

        for i in 0..matches.length() {
            if let Some(node) = matches.item(i) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    prepare(&element);
                    observer.observe(&element);
                }
            }
        }

        Some(Self {
            observer,
            _on_enter: callback,
        })
    }

    pub fn dispose(self) {
        self.observer.disconnect();
    }
}
