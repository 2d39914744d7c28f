pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.3;

/// Floating call-to-action panel state.
///
/// `force_open` is never cleared by scrolling; only `dismiss` resets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CtaVisibility {
    dismissed: bool,
    force_open: bool,
    threshold: f64,
}

impl Default for CtaVisibility {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}

impl CtaVisibility {
    pub fn new(threshold: f64) -> Self {
        Self {
            dismissed: false,
            force_open: false,
            threshold,
        }
    }

    pub fn from_flags(dismissed: bool, force_open: bool) -> Self {
        Self {
            dismissed,
            force_open,
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
        }
    }

    pub fn dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn force_open(&self) -> bool {
        self.force_open
    }

    pub fn is_visible(&self, scroll_progress: f64) -> bool {
        !self.dismissed && (self.force_open || scroll_progress > self.threshold)
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
        self.force_open = false;
    }

    pub fn request_open(&mut self) {
        self.dismissed = false;
        self.force_open = true;
    }
}
