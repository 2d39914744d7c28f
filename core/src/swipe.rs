pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Horizontal touch-drag tracker. Positions are client X pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
    end_x: Option<f64>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.max(0.0),
            start_x: None,
            end_x: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn track(&mut self, x: f64) {
        if self.start_x.is_some() {
            self.end_x = Some(x);
        }
    }

    /// Ends the gesture. Captured positions are cleared whatever the outcome.
    pub fn finish(&mut self) -> Option<SwipeDirection> {
        let start = self.start_x.take();
        let end = self.end_x.take();
        let delta = start? - end?;
        if !delta.is_finite() || delta.abs() <= self.threshold {
            return None;
        }
        if delta > 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_without_move_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);
        assert_eq!(tracker.finish(), None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.track(10.0);
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn stale_end_does_not_leak_into_next_gesture() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        tracker.track(100.0);
        assert_eq!(tracker.finish(), Some(SwipeDirection::Next));
        tracker.begin(300.0);
        assert_eq!(tracker.finish(), None);
    }
}
