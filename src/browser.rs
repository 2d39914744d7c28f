use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use aviv_site_core::{Scheduler, ScrollMetrics, ViewportEvent, ViewportSource};

/// `gloo` interval timers; the returned `Interval` cancels itself on drop.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Rc<dyn Fn()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}

pub(crate) struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub(crate) fn new() -> Option<Self> {
        Some(Self {
            window: web_sys::window()?,
        })
    }
}

impl ViewportSource for WindowViewport {
    type Listener = EventListener;

    fn metrics(&self) -> ScrollMetrics {
        let offset = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let scroll_height = self
            .window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0);
        ScrollMetrics::new(offset, scroll_height, viewport_height)
    }

    fn listen(&self, event: ViewportEvent, callback: Rc<dyn Fn()>) -> EventListener {
        let options = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        };
        EventListener::new_with_options(&self.window, event.name(), options, move |_| callback())
    }
}

pub(crate) fn scroll_to_top(smooth: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    window.scroll_to_with_scroll_to_options(&options);
}

/// Returns `false` when no element carries `id`.
pub(crate) fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

fn root_style() -> Option<web_sys::CssStyleDeclaration> {
    let root = web_sys::window()?.document()?.document_element()?;
    let root = root.dyn_into::<HtmlElement>().ok()?;
    Some(root.style())
}

/// Hides root overflow and returns the inline value it replaced.
pub(crate) fn lock_root_scroll() -> Option<String> {
    let style = root_style()?;
    let previous = style.get_property_value("overflow").unwrap_or_default();
    let _ = style.set_property("overflow", "hidden");
    Some(previous)
}

pub(crate) fn restore_root_overflow(previous: &str) {
    let Some(style) = root_style() else {
        return;
    };
    if previous.is_empty() {
        let _ = style.remove_property("overflow");
    } else {
        let _ = style.set_property("overflow", previous);
    }
}

pub(crate) fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(title);
    }
}

pub(crate) const NEW_TAB_FEATURES: &str = "noopener,noreferrer";

/// With `noopener` the browser hands back no window, so only a thrown
/// error counts as a failure.
pub(crate) fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window
        .open_with_url_and_target_and_features(url, "_blank", NEW_TAB_FEATURES)
        .is_ok()
    {
        return;
    }
    gloo::console::warn!("window.open failed, following link in place");
    let _ = window.location().set_href(url);
}

pub(crate) fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn scroll_lock_restores_previous_overflow() {
        let style = root_style().unwrap();
        style.set_property("overflow", "scroll").unwrap();

        let previous = lock_root_scroll().unwrap();
        assert_eq!(previous, "scroll");
        assert_eq!(style.get_property_value("overflow").unwrap(), "hidden");

        restore_root_overflow(&previous);
        assert_eq!(style.get_property_value("overflow").unwrap(), "scroll");

        style.remove_property("overflow").unwrap();
        let previous = lock_root_scroll().unwrap();
        restore_root_overflow(&previous);
        assert_eq!(style.get_property_value("overflow").unwrap(), "");
    }

    #[wasm_bindgen_test]
    fn new_tab_is_opened_without_opener() {
        let window = web_sys::window().unwrap();
        let calls = Array::new();
        let record = Function::new_with_args(
            "url, target, features",
            "window.__openCalls.push([url, target, features]); return null;",
        );
        Reflect::set(&window, &JsValue::from_str("__openCalls"), &calls).unwrap();
        Reflect::set(&window, &JsValue::from_str("open"), &record).unwrap();

        open_in_new_tab("https://wa.me/972500000000");

        Reflect::delete_property(window.as_ref(), &JsValue::from_str("open")).unwrap();
        Reflect::delete_property(window.as_ref(), &JsValue::from_str("__openCalls")).unwrap();
        assert_eq!(calls.length(), 1);
        let call = Array::from(&calls.get(0));
        assert_eq!(call.get(0).as_string().as_deref(), Some("https://wa.me/972500000000"));
        assert_eq!(call.get(1).as_string().as_deref(), Some("_blank"));
        assert_eq!(call.get(2).as_string().as_deref(), Some(NEW_TAB_FEATURES));
    }
}
