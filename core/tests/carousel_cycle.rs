use std::collections::BTreeSet;

use aviv_site_core::catalog::GALLERY_SHOTS;
use aviv_site_core::{CarouselError, CyclicIndex, Slot};

#[test]
fn index_stays_in_bounds_for_any_walk() {
    for len in 1..=7usize {
        let mut index = CyclicIndex::new(len).unwrap();
        // Deterministic pseudo-random walk: bit pattern picks next/previous.
        let mut pattern = 0x9E37_79B9_7F4A_7C15u64;
        for _ in 0..200 {
            if pattern & 1 == 1 {
                index.next();
            } else {
                index.previous();
            }
            pattern = pattern.rotate_right(1) ^ (pattern >> 3);
            assert!(index.active() < len, "len {len} active {}", index.active());
        }
    }
}

#[test]
fn next_then_previous_round_trips() {
    for len in 1..=6usize {
        for start in 0..len {
            let mut index = CyclicIndex::new(len).unwrap();
            assert!(index.jump_to(start));
            index.next();
            index.previous();
            assert_eq!(index.active(), start);
            index.previous();
            index.next();
            assert_eq!(index.active(), start);
        }
    }
}

#[test]
fn full_cycle_returns_to_start() {
    for len in 1..=6usize {
        for start in 0..len {
            let mut index = CyclicIndex::new(len).unwrap();
            index.jump_to(start);
            for _ in 0..len {
                index.next();
            }
            assert_eq!(index.active(), start);
        }
    }
}

#[test]
fn previous_from_zero_wraps_to_last() {
    let mut index = CyclicIndex::new(4).unwrap();
    index.previous();
    assert_eq!(index.active(), 3);
}

#[test]
fn jump_out_of_range_is_ignored() {
    let mut index = CyclicIndex::new(4).unwrap();
    assert!(index.jump_to(2));
    assert!(!index.jump_to(4));
    assert!(!index.jump_to(usize::MAX));
    assert_eq!(index.active(), 2);
}

#[test]
fn empty_rotation_cannot_be_built() {
    let err = CyclicIndex::new(0).unwrap_err();
    assert_eq!(err, CarouselError::Empty);
    assert_eq!(err.to_string(), "carousel needs at least one item");
}

#[test]
fn four_items_render_active_next_and_previous_only() {
    let index = CyclicIndex::new(4).unwrap();
    let relative: BTreeSet<usize> = index.visible().map(|(item, _)| index.relative(item)).collect();
    assert_eq!(relative, BTreeSet::from([0, 1, 3]));
    assert_eq!(index.slot(2), None);
    assert_eq!(
        index.visible().collect::<Vec<_>>(),
        vec![(0, Slot::Active), (1, Slot::Next), (3, Slot::Previous)]
    );
}

#[test]
fn slots_follow_the_active_item() {
    let mut index = CyclicIndex::new(4).unwrap();
    index.jump_to(3);
    assert_eq!(index.slot(3), Some(Slot::Active));
    assert_eq!(index.slot(0), Some(Slot::Next));
    assert_eq!(index.slot(2), Some(Slot::Previous));
    assert_eq!(index.slot(1), None);
}

#[test]
fn visible_set_never_exceeds_three() {
    for len in 1..=10usize {
        let mut index = CyclicIndex::new(len).unwrap();
        for _ in 0..len {
            assert!(index.visible().count() <= 3);
            index.next();
        }
    }
}

#[test]
fn gallery_has_four_shots_with_unique_ids() {
    assert_eq!(GALLERY_SHOTS.len(), 4);
    let ids: BTreeSet<&str> = GALLERY_SHOTS.iter().map(|shot| shot.id).collect();
    assert_eq!(ids.len(), GALLERY_SHOTS.len());
    assert!(CyclicIndex::new(GALLERY_SHOTS.len()).is_ok());
}
