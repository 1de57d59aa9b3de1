use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Wraps the browser's IntersectionObserver for a single element. The
/// callback runs the first time the configured fraction of the target is
/// within the viewport, after which the observer disconnects itself, so
/// later scroll activity never fires it again.
pub struct SectionObserver {
    observer: IntersectionObserver,
    // The observer holds a raw pointer to this closure on the JS side;
    // it must stay alive until the observer is disconnected.
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionObserver {
    /// Starts observing `target`. `threshold` is the fraction of the
    /// target's area that must be on screen before `on_visible` runs.
    /// The browser evaluates once immediately on observe, so an element
    /// already in view triggers without any scrolling.
    ///
    /// Fails if the host has no IntersectionObserver; callers are expected
    /// to treat that as "visible right away" rather than never showing
    /// the content.
    pub fn start(
        target: &Element,
        threshold: f64,
        on_visible: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if intersecting {
                    on_visible();
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Detaches the observer early, for teardown before the target was
    /// ever revealed. Disconnecting an already-disconnected observer is
    /// a no-op.
    pub fn stop(self) {
        self.observer.disconnect();
    }
}
