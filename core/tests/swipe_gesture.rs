use aviv_site_core::{SwipeDirection, SwipeTracker};

fn swipe(start: f64, end: f64) -> Option<SwipeDirection> {
    let mut tracker = SwipeTracker::default();
    tracker.begin(start);
    tracker.track(end);
    tracker.finish()
}

#[test]
fn delta_at_threshold_is_a_tap() {
    assert_eq!(swipe(140.0, 100.0), None);
    assert_eq!(swipe(100.0, 140.0), None);
}

#[test]
fn delta_past_threshold_moves_one_step() {
    assert_eq!(swipe(141.0, 100.0), Some(SwipeDirection::Next));
    assert_eq!(swipe(100.0, 141.0), Some(SwipeDirection::Previous));
}

#[test]
fn last_move_wins() {
    let mut tracker = SwipeTracker::default();
    tracker.begin(300.0);
    tracker.track(100.0);
    tracker.track(290.0);
    assert_eq!(tracker.finish(), None);
}

#[test]
fn finish_clears_state_after_every_outcome() {
    let mut tracker = SwipeTracker::default();
    tracker.begin(0.0);
    tracker.track(200.0);
    assert_eq!(tracker.finish(), Some(SwipeDirection::Previous));
    assert!(!tracker.is_tracking());
    assert_eq!(tracker.finish(), None);

    tracker.begin(0.0);
    tracker.track(10.0);
    assert_eq!(tracker.finish(), None);
    assert!(!tracker.is_tracking());
}

#[test]
fn cancel_drops_the_gesture() {
    let mut tracker = SwipeTracker::default();
    tracker.begin(300.0);
    tracker.track(0.0);
    tracker.cancel();
    assert_eq!(tracker.finish(), None);
}

#[test]
fn custom_threshold_is_respected() {
    let mut tracker = SwipeTracker::new(10.0);
    tracker.begin(50.0);
    tracker.track(39.0);
    assert_eq!(tracker.finish(), Some(SwipeDirection::Next));
    assert_eq!(SwipeTracker::new(-5.0).threshold(), 0.0);
}

#[test]
fn non_finite_positions_never_step() {
    assert_eq!(swipe(f64::NAN, 0.0), None);
    assert_eq!(swipe(0.0, f64::NAN), None);
    assert_eq!(swipe(f64::INFINITY, 0.0), None);
    assert_eq!(swipe(f64::NEG_INFINITY, f64::INFINITY), None);
}
