use aviv_site_core::{scroll_progress, CtaVisibility, ScrollMetrics};

#[test]
fn progress_stays_within_unit_range() {
    let viewport = 800.0;
    for height in [800.0, 801.0, 1200.0, 5000.0] {
        for offset in [0.0, 1.0, 200.0, 399.5, 4200.0, 10_000.0] {
            let progress = scroll_progress(offset, height, viewport);
            assert!((0.0..=1.0).contains(&progress), "{offset}/{height} -> {progress}");
        }
    }
}

#[test]
fn short_documents_report_zero_at_top() {
    assert_eq!(scroll_progress(0.0, 600.0, 800.0), 0.0);
    assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
    assert_eq!(ScrollMetrics::new(0.0, 0.0, 0.0).progress(), 0.0);
}

#[test]
fn progress_is_offset_over_max_scroll() {
    let metrics = ScrollMetrics::new(300.0, 1800.0, 800.0);
    assert_eq!(metrics.max_scroll(), 1000.0);
    assert!((metrics.progress() - 0.3).abs() < 1e-12);
    assert_eq!(ScrollMetrics::new(-50.0, 1800.0, 800.0).progress(), 0.0);
}

#[test]
fn header_turns_solid_past_ten_pixels() {
    assert!(!ScrollMetrics::new(10.0, 2000.0, 800.0).header_scrolled());
    assert!(ScrollMetrics::new(11.0, 2000.0, 800.0).header_scrolled());
}

#[test]
fn hidden_below_threshold() {
    assert!(!CtaVisibility::from_flags(false, false).is_visible(0.1));
    assert!(!CtaVisibility::from_flags(false, false).is_visible(0.3));
}

#[test]
fn shown_past_threshold() {
    assert!(CtaVisibility::from_flags(false, false).is_visible(0.31));
}

#[test]
fn dismissal_beats_force_open() {
    assert!(!CtaVisibility::from_flags(true, true).is_visible(0.9));
}

#[test]
fn force_open_survives_scrolling_back_to_top() {
    let mut cta = CtaVisibility::default();
    cta.dismiss();
    assert!(!cta.is_visible(0.8));
    cta.request_open();
    assert!(cta.is_visible(0.0));
    assert!(cta.is_visible(0.5));
    cta.dismiss();
    assert!(!cta.force_open());
    assert!(!cta.is_visible(0.9));
}
