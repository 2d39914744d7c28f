#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use aviv_site_core::{ScrollMetrics, ScrollObserver, ViewportEvent, ViewportSource};
use gloo::events::EventListener;
use wasm_bindgen_test::*;
use web_sys::{Event, Window};

wasm_bindgen_test_configure!(run_in_browser);

struct Viewport {
    window: Window,
}

impl ViewportSource for Viewport {
    type Listener = EventListener;

    fn metrics(&self) -> ScrollMetrics {
        let offset = self.window.scroll_y().unwrap_or(0.0);
        ScrollMetrics::new(offset, 0.0, 0.0)
    }

    fn listen(&self, event: ViewportEvent, callback: Rc<dyn Fn()>) -> EventListener {
        EventListener::new(&self.window, event.name(), move |_| callback())
    }
}

fn window() -> Window {
    web_sys::window().expect("window")
}

fn fire(window: &Window, name: &str) {
    let event = Event::new(name).expect("event");
    window.dispatch_event(&event).expect("dispatch");
}

#[wasm_bindgen_test]
fn window_listeners_are_released_on_deactivate() {
    let window = window();
    let calls = Rc::new(Cell::new(0u32));
    let on_change: Rc<dyn Fn(ScrollMetrics)> = {
        let calls = calls.clone();
        Rc::new(move |_| calls.set(calls.get() + 1))
    };
    let viewport = Rc::new(Viewport {
        window: window.clone(),
    });
    let mut observer = ScrollObserver::new(viewport, on_change);

    for _ in 0..10 {
        observer.activate();
        observer.activate();
        observer.deactivate();
    }
    let before = calls.get();
    fire(&window, "scroll");
    fire(&window, "resize");
    assert_eq!(calls.get(), before);

    observer.activate();
    let before = calls.get();
    fire(&window, "scroll");
    fire(&window, "resize");
    assert_eq!(calls.get() - before, 2);

    drop(observer);
    let before = calls.get();
    fire(&window, "scroll");
    assert_eq!(calls.get(), before);
}

#[wasm_bindgen_test]
fn progress_is_zero_for_an_unscrolled_page() {
    let metrics = ScrollMetrics::new(window().scroll_y().unwrap_or(0.0), 100.0, 800.0);
    assert_eq!(metrics.progress(), 0.0);
}
