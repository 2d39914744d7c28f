pub const HEADER_SCROLLED_OFFSET_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            scroll_height,
            viewport_height,
        }
    }

    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(1.0)
    }

    pub fn progress(&self) -> f64 {
        scroll_progress(self.offset, self.scroll_height, self.viewport_height)
    }

    pub fn header_scrolled(&self) -> bool {
        self.offset > HEADER_SCROLLED_OFFSET_PX
    }
}

pub fn scroll_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = (scroll_height - viewport_height).max(1.0);
    let progress = offset / max_scroll;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}
