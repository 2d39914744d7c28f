use std::rc::Rc;

use crate::scroll::ScrollMetrics;

/// Recurring timer source. Dropping the returned handle cancels the timer.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, tick: Rc<dyn Fn()>) -> Self::Handle;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportEvent {
    Scroll,
    Resize,
}

impl ViewportEvent {
    pub const ALL: [ViewportEvent; 2] = [ViewportEvent::Scroll, ViewportEvent::Resize];

    pub fn name(self) -> &'static str {
        match self {
            ViewportEvent::Scroll => "scroll",
            ViewportEvent::Resize => "resize",
        }
    }
}

/// Read-only view of the document scroll position plus listener registration.
/// Dropping a returned listener detaches it.
pub trait ViewportSource {
    type Listener;

    fn metrics(&self) -> ScrollMetrics;

    fn listen(&self, event: ViewportEvent, callback: Rc<dyn Fn()>) -> Self::Listener;
}

/// Owns the auto-advance timer for one mounted carousel.
pub struct AutoAdvance<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    tick: Rc<dyn Fn()>,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> AutoAdvance<S> {
    pub fn new(scheduler: S, period_ms: u32, tick: Rc<dyn Fn()>) -> Self {
        Self {
            scheduler,
            period_ms: period_ms.max(1),
            tick,
            handle: None,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn activate(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let handle = self.scheduler.every(self.period_ms, self.tick.clone());
        self.handle = Some(handle);
    }

    /// Restarts the period, e.g. after the user picked an item by hand.
    pub fn restart(&mut self) {
        self.deactivate();
        self.activate();
    }

    pub fn deactivate(&mut self) {
        self.handle = None;
    }
}

/// Scroll/resize subscription for one mounted view.
///
/// `activate` registers exactly one listener per [`ViewportEvent`] and reports
/// the current metrics right away; calling it again while active is a no-op.
pub struct ScrollObserver<V: ViewportSource + 'static> {
    source: Rc<V>,
    on_change: Rc<dyn Fn(ScrollMetrics)>,
    listeners: Vec<V::Listener>,
}

impl<V: ViewportSource + 'static> ScrollObserver<V> {
    pub fn new(source: Rc<V>, on_change: Rc<dyn Fn(ScrollMetrics)>) -> Self {
        Self {
            source,
            on_change,
            listeners: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn activate(&mut self) {
        if self.is_active() {
            return;
        }
        let recompute: Rc<dyn Fn()> = {
            let source = self.source.clone();
            let on_change = self.on_change.clone();
            Rc::new(move || on_change(source.metrics()))
        };
        for event in ViewportEvent::ALL {
            let listener = self.source.listen(event, recompute.clone());
            self.listeners.push(listener);
        }
        recompute();
    }

    pub fn deactivate(&mut self) {
        self.listeners.clear();
    }
}
