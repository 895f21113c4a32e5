use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Whether an observer entry counts as "in view" for `threshold`.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    // observers report ratios a hair under the threshold they fired for
    is_intersecting && ratio + 1e-3 >= threshold
}

/// Watches one element and calls `on_visible` the first time it scrolls into
/// view. Dropping the watch disconnects the observer.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_once(
    el: &Element,
    threshold: f64,
    on_visible: impl FnOnce() + 'static,
) -> Result<VisibilityWatch, JsValue> {
    let mut pending = Some(on_visible);
    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|v| {
                v.dyn_into::<IntersectionObserverEntry>()
                    .map(|e| crosses_threshold(e.is_intersecting(), e.intersection_ratio(), threshold))
                    .unwrap_or(false)
            });
            if !visible {
                return;
            }
            observer.disconnect();
            if let Some(f) = pending.take() {
                f();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;
    observer.observe(el);

    Ok(VisibilityWatch {
        observer,
        _on_intersect: on_intersect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_needs_intersection() {
        assert!(!crosses_threshold(false, 1.0, 0.4));
        assert!(crosses_threshold(true, 0.4, 0.4));
        assert!(crosses_threshold(true, 0.3995, 0.4));
        assert!(!crosses_threshold(true, 0.2, 0.4));
        assert!(crosses_threshold(true, 0.0, 0.0));
    }
}
