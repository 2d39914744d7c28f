use std::cell::{Cell, RefCell};
use std::rc::Rc;

use aviv_site_core::{
    AutoAdvance, CyclicIndex, Scheduler, ScrollMetrics, ScrollObserver, ViewportEvent,
    ViewportSource,
};

type Callbacks = Rc<RefCell<Vec<(u64, Rc<dyn Fn()>)>>>;

struct Registration {
    id: u64,
    callbacks: Callbacks,
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.callbacks.borrow_mut().retain(|(id, _)| *id != self.id);
    }
}

#[derive(Clone, Default)]
struct ManualClock {
    timers: Callbacks,
    next_id: Rc<Cell<u64>>,
    last_period: Rc<Cell<u32>>,
}

impl ManualClock {
    fn fire(&self) {
        let ticks: Vec<Rc<dyn Fn()>> = self.timers.borrow().iter().map(|(_, tick)| tick.clone()).collect();
        for tick in ticks {
            tick();
        }
    }

    fn live(&self) -> usize {
        self.timers.borrow().len()
    }
}

impl Scheduler for ManualClock {
    type Handle = Registration;

    fn every(&self, period_ms: u32, tick: Rc<dyn Fn()>) -> Registration {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.last_period.set(period_ms);
        self.timers.borrow_mut().push((id, tick));
        Registration {
            id,
            callbacks: self.timers.clone(),
        }
    }
}

#[derive(Default)]
struct FakeViewport {
    metrics: Cell<ScrollMetrics>,
    listeners: Callbacks,
    kinds: RefCell<Vec<ViewportEvent>>,
    next_id: Cell<u64>,
}

impl FakeViewport {
    fn emit(&self) {
        let callbacks: Vec<Rc<dyn Fn()>> =
            self.listeners.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for callback in callbacks {
            callback();
        }
    }

    fn live(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ViewportSource for FakeViewport {
    type Listener = Registration;

    fn metrics(&self) -> ScrollMetrics {
        self.metrics.get()
    }

    fn listen(&self, event: ViewportEvent, callback: Rc<dyn Fn()>) -> Registration {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.kinds.borrow_mut().push(event);
        self.listeners.borrow_mut().push((id, callback));
        Registration {
            id,
            callbacks: self.listeners.clone(),
        }
    }
}

fn carousel_with_clock(len: usize) -> (Rc<RefCell<CyclicIndex>>, ManualClock, AutoAdvance<ManualClock>) {
    let index = Rc::new(RefCell::new(CyclicIndex::new(len).unwrap()));
    let clock = ManualClock::default();
    let tick: Rc<dyn Fn()> = {
        let index = index.clone();
        Rc::new(move || index.borrow_mut().next())
    };
    let advance = AutoAdvance::new(clock.clone(), 8_000, tick);
    (index, clock, advance)
}

#[test]
fn auto_advance_moves_to_next_on_each_tick() {
    let (index, clock, mut advance) = carousel_with_clock(4);
    advance.activate();
    assert_eq!(clock.last_period.get(), 8_000);
    clock.fire();
    clock.fire();
    assert_eq!(index.borrow().active(), 2);
    clock.fire();
    clock.fire();
    assert_eq!(index.borrow().active(), 0);
}

#[test]
fn no_tick_reaches_a_torn_down_carousel() {
    let (index, clock, mut advance) = carousel_with_clock(4);
    advance.activate();
    clock.fire();
    advance.deactivate();
    clock.fire();
    clock.fire();
    assert_eq!(index.borrow().active(), 1);
    assert_eq!(clock.live(), 0);
}

#[test]
fn dropping_the_controller_cancels_the_timer() {
    let (index, clock, mut advance) = carousel_with_clock(3);
    advance.activate();
    drop(advance);
    clock.fire();
    assert_eq!(index.borrow().active(), 0);
    assert_eq!(clock.live(), 0);
}

#[test]
fn activating_twice_keeps_one_timer() {
    let (index, clock, mut advance) = carousel_with_clock(4);
    advance.activate();
    advance.activate();
    assert_eq!(clock.live(), 1);
    clock.fire();
    assert_eq!(index.borrow().active(), 1);
    advance.restart();
    assert_eq!(clock.live(), 1);
    assert!(advance.is_active());
}

#[test]
fn manual_step_and_tick_share_one_index() {
    let (index, clock, mut advance) = carousel_with_clock(4);
    advance.activate();
    index.borrow_mut().previous();
    clock.fire();
    assert_eq!(index.borrow().active(), 0);
}

fn observer(viewport: &Rc<FakeViewport>) -> (Rc<Cell<f64>>, Rc<Cell<u32>>, ScrollObserver<FakeViewport>) {
    let progress = Rc::new(Cell::new(-1.0));
    let calls = Rc::new(Cell::new(0u32));
    let on_change: Rc<dyn Fn(ScrollMetrics)> = {
        let progress = progress.clone();
        let calls = calls.clone();
        Rc::new(move |metrics: ScrollMetrics| {
            progress.set(metrics.progress());
            calls.set(calls.get() + 1);
        })
    };
    (progress, calls, ScrollObserver::new(viewport.clone(), on_change))
}

#[test]
fn observer_computes_immediately_and_on_events() {
    let viewport = Rc::new(FakeViewport::default());
    viewport.metrics.set(ScrollMetrics::new(100.0, 1800.0, 800.0));
    let (progress, _, mut observer) = observer(&viewport);
    observer.activate();
    assert!((progress.get() - 0.1).abs() < 1e-12);
    assert_eq!(
        *viewport.kinds.borrow(),
        vec![ViewportEvent::Scroll, ViewportEvent::Resize]
    );

    viewport.metrics.set(ScrollMetrics::new(500.0, 1800.0, 800.0));
    viewport.emit();
    assert!((progress.get() - 0.5).abs() < 1e-12);
}

#[test]
fn listener_count_is_stable_across_cycles() {
    let viewport = Rc::new(FakeViewport::default());
    let (_, calls, mut observer) = observer(&viewport);
    for _ in 0..25 {
        observer.activate();
        observer.activate();
        assert_eq!(viewport.live(), 2);
        observer.deactivate();
        assert_eq!(viewport.live(), 0);
    }
    observer.activate();
    let before = calls.get();
    viewport.emit();
    // one scroll + one resize callback registered, each recomputes once
    assert_eq!(calls.get() - before, 2);
}

#[test]
fn dropping_the_observer_detaches_listeners() {
    let viewport = Rc::new(FakeViewport::default());
    let (_, calls, mut observer) = observer(&viewport);
    observer.activate();
    drop(observer);
    assert_eq!(viewport.live(), 0);
    let before = calls.get();
    viewport.emit();
    assert_eq!(calls.get(), before);
}
