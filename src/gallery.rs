use std::rc::Rc;

use web_sys::TouchEvent;
use yew::prelude::*;

use aviv_site_core::catalog::GalleryShot;
use aviv_site_core::{AutoAdvance, CyclicIndex, Slot, SwipeDirection, SwipeTracker};

use crate::browser::IntervalScheduler;
use crate::SiteContext;

pub(crate) enum GalleryAction {
    Next,
    Previous,
    Jump(usize),
}

/// Reducer state, so timer ticks and clicks always step from the latest index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GalleryState {
    pub(crate) index: CyclicIndex,
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut index = self.index;
        match action {
            GalleryAction::Next => index.next(),
            GalleryAction::Previous => index.previous(),
            GalleryAction::Jump(target) => {
                if !index.jump_to(target) {
                    return self;
                }
            }
        }
        Rc::new(Self { index })
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct GalleryProps {
    pub(crate) shots: &'static [GalleryShot],
}

#[function_component(Gallery)]
pub(crate) fn gallery(props: &GalleryProps) -> Html {
    match CyclicIndex::new(props.shots.len()) {
        Ok(index) => html! { <GalleryCarousel shots={props.shots} {index} /> },
        Err(err) => {
            gloo::console::warn!("gallery hidden", err.to_string());
            html! {}
        }
    }
}

#[derive(Properties, PartialEq)]
struct CarouselProps {
    shots: &'static [GalleryShot],
    index: CyclicIndex,
}

fn first_touch_x(event: &TouchEvent, changed: bool) -> Option<f64> {
    let list = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    list.item(0).map(|touch| touch.client_x() as f64)
}

#[function_component(GalleryCarousel)]
fn gallery_carousel(props: &CarouselProps) -> Html {
    let initial = props.index;
    let state = use_reducer(move || GalleryState { index: initial });
    let motion = use_context::<SiteContext>()
        .map(|site| site.motion)
        .unwrap_or_default();
    let advance = use_mut_ref(|| None::<AutoAdvance<IntervalScheduler>>);
    let swipe = use_mut_ref(move || SwipeTracker::new(motion.swipe_threshold_px));

    {
        let advance = advance.clone();
        let dispatcher = state.dispatcher();
        use_effect_with(
            (motion.auto_advance, motion.auto_advance_ms),
            move |(enabled, period_ms)| {
                if *enabled {
                    let tick: Rc<dyn Fn()> = Rc::new(move || dispatcher.dispatch(GalleryAction::Next));
                    let mut controller = AutoAdvance::new(IntervalScheduler, *period_ms, tick);
                    controller.activate();
                    *advance.borrow_mut() = Some(controller);
                }
                move || {
                    advance.borrow_mut().take();
                }
            },
        );
    }

    // Manual steps restart the period so the next tick is a full interval away.
    let step = {
        let state = state.clone();
        let advance = advance.clone();
        Callback::from(move |action: GalleryAction| {
            state.dispatch(action);
            if let Some(controller) = advance.borrow_mut().as_mut() {
                controller.restart();
            }
        })
    };

    let on_prev = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(GalleryAction::Previous))
    };
    let on_next = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(GalleryAction::Next))
    };
    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(x) = first_touch_x(&event, false) {
                swipe.borrow_mut().begin(x);
            }
        })
    };
    let on_touch_move = {
        let swipe = swipe.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(x) = first_touch_x(&event, false) {
                swipe.borrow_mut().track(x);
            }
        })
    };
    let on_touch_end = {
        let swipe = swipe.clone();
        let step = step.clone();
        Callback::from(move |_: TouchEvent| {
            let direction = swipe.borrow_mut().finish();
            match direction {
                Some(SwipeDirection::Next) => step.emit(GalleryAction::Next),
                Some(SwipeDirection::Previous) => step.emit(GalleryAction::Previous),
                None => {}
            }
        })
    };
    let on_touch_cancel = {
        let swipe = swipe.clone();
        Callback::from(move |_: TouchEvent| swipe.borrow_mut().cancel())
    };

    let index = state.index;
    let cards = index
        .visible()
        .filter_map(|(position, slot)| props.shots.get(position).map(|shot| (position, slot, shot)))
        .map(|(position, slot, shot)| {
            let onclick = {
                let step = step.clone();
                Callback::from(move |_: MouseEvent| {
                    if slot != Slot::Active {
                        step.emit(GalleryAction::Jump(position));
                    }
                })
            };
            html! {
                <figure
                    key={shot.id}
                    class={classes!("gallery-card", slot.class_name())}
                    style={slot.pose().to_style()}
                    aria-hidden={(slot != Slot::Active).to_string()}
                    {onclick}
                >
                    <img src={shot.image_src} alt={shot.title} loading="lazy" />
                </figure>
            }
        })
        .collect::<Html>();

    let indicators = (0..index.len())
        .map(|position| {
            let active = position == index.active();
            let onclick = {
                let step = step.clone();
                Callback::from(move |_: MouseEvent| step.emit(GalleryAction::Jump(position)))
            };
            html! {
                <button
                    key={position}
                    type="button"
                    class={classes!("gallery-dot", active.then_some("is-active"))}
                    aria-label={format!("תמונה {}", position + 1)}
                    aria-current={active.then_some("true")}
                    {onclick}
                />
            }
        })
        .collect::<Html>();

    let caption = props.shots.get(index.active()).map(|shot| {
        html! {
            <div class="gallery-caption" aria-live="polite">
                <h3>{ shot.title }</h3>
                <p class="gallery-subtitle">{ shot.subtitle }</p>
                <p>{ shot.description }</p>
            </div>
        }
    });

    html! {
        <div class="gallery">
            <div
                class="gallery-stage"
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
                ontouchcancel={on_touch_cancel}
            >
                { cards }
            </div>
            { caption }
            <div class="gallery-controls">
                <button type="button" class="gallery-arrow gallery-prev" aria-label="הקודם" onclick={on_prev}>{ "›" }</button>
                <div class="gallery-dots">{ indicators }</div>
                <button type="button" class="gallery-arrow gallery-next" aria-label="הבא" onclick={on_next}>{ "‹" }</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn state(len: usize) -> Rc<GalleryState> {
        Rc::new(GalleryState {
            index: CyclicIndex::new(len).unwrap(),
        })
    }

    #[wasm_bindgen_test]
    fn reducer_wraps_in_both_directions() {
        let back = state(4).reduce(GalleryAction::Previous);
        assert_eq!(back.index.active(), 3);
        let forward = back.reduce(GalleryAction::Next);
        assert_eq!(forward.index.active(), 0);
    }

    #[wasm_bindgen_test]
    fn reducer_ignores_out_of_range_jump() {
        let start = state(4);
        let same = start.clone().reduce(GalleryAction::Jump(9));
        assert!(Rc::ptr_eq(&start, &same));
        let jumped = same.reduce(GalleryAction::Jump(2));
        assert_eq!(jumped.index.active(), 2);
    }
}
