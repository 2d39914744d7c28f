use std::fmt;

pub const SLOT_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    Empty,
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::Empty => write!(f, "carousel needs at least one item"),
        }
    }
}

impl std::error::Error for CarouselError {}

/// Active position in a fixed-size rotation. `len` is never zero, so the
/// modulo arithmetic below is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicIndex {
    len: usize,
    active: usize,
}

impl CyclicIndex {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { len, active: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.active = (self.active + self.len - 1) % self.len;
    }

    /// Returns `false` and leaves the index untouched when `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = index;
        true
    }

    pub fn relative(&self, index: usize) -> usize {
        (index % self.len + self.len - self.active) % self.len
    }

    pub fn slot(&self, index: usize) -> Option<Slot> {
        if index >= self.len {
            return None;
        }
        match self.relative(index) {
            0 => Some(Slot::Active),
            1 => Some(Slot::Next),
            rel if rel == self.len - 1 => Some(Slot::Previous),
            _ => None,
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = (usize, Slot)> + '_ {
        (0..self.len).filter_map(move |index| self.slot(index).map(|slot| (index, slot)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Active,
    Next,
    Previous,
}

impl Slot {
    pub fn class_name(self) -> &'static str {
        match self {
            Slot::Active => "slot-active",
            Slot::Next => "slot-next",
            Slot::Previous => "slot-previous",
        }
    }

    pub fn pose(self) -> SlotPose {
        match self {
            Slot::Active => SlotPose {
                x: 0.0,
                y: 0.0,
                scale: 1.0,
                rotate_deg: 0.0,
                opacity: 1.0,
                z_index: 30,
            },
            Slot::Next => SlotPose {
                x: -22.0,
                y: 18.0,
                scale: 0.94,
                rotate_deg: -5.0,
                opacity: 0.75,
                z_index: 20,
            },
            Slot::Previous => SlotPose {
                x: 22.0,
                y: 18.0,
                scale: 0.94,
                rotate_deg: 5.0,
                opacity: 0.75,
                z_index: 20,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPose {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate_deg: f32,
    pub opacity: f32,
    pub z_index: i32,
}

impl SlotPose {
    pub fn to_style(&self) -> String {
        format!(
            "z-index:{};opacity:{};transform:translate({}px,{}px) scale({}) rotate({}deg)",
            self.z_index, self.opacity, self.x, self.y, self.scale, self.rotate_deg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(CyclicIndex::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn single_item_is_always_active() {
        let mut index = CyclicIndex::new(1).unwrap();
        index.next();
        index.previous();
        assert_eq!(index.active(), 0);
        assert_eq!(index.visible().collect::<Vec<_>>(), vec![(0, Slot::Active)]);
    }

    #[test]
    fn two_items_prefer_next_over_previous() {
        let index = CyclicIndex::new(2).unwrap();
        assert_eq!(index.slot(1), Some(Slot::Next));
    }

    #[test]
    fn pose_style_mentions_stacking() {
        let style = Slot::Next.pose().to_style();
        assert!(style.starts_with("z-index:20;opacity:0.75"));
        assert!(style.contains("rotate(-5deg)"));
    }
}
