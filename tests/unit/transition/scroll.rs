use super::*;
use crate::animation::ease::Ease;
use crate::foundation::core::ContainerRect;

fn shrinking() -> ScrollTransition {
    ScrollTransition::new(TransitionConfig {
        y_offset: 50.0,
        scale_range: Some([0.8, 1.0]),
        pinned_min_opacity: 0.2,
        ..TransitionConfig::default()
    })
}

#[test]
fn progress_zero_is_resting_and_offset() {
    let f = shrinking().frame_at(0.0);
    assert_eq!(f.pinned, SectionStyle::RESTING);
    assert_eq!(f.rising.translate_y, 50.0);
    assert_eq!(f.rising.opacity, 0.0);
}

#[test]
fn progress_one_is_floor_and_settled() {
    let f = shrinking().frame_at(1.0);
    assert_eq!(f.pinned.opacity, 0.2);
    assert_eq!(f.pinned.scale, 0.8);
    assert_eq!(f.pinned.translate_y, 0.0);
    assert_eq!(f.rising.translate_y, 0.0);
    assert_eq!(f.rising.opacity, 1.0);
}

#[test]
fn without_scale_range_pinned_section_is_never_scaled() {
    let t = ScrollTransition::new(TransitionConfig::default());
    for p in [0.0, 0.3, 0.7, 1.0] {
        let f = t.frame_at(p);
        assert_eq!(f.pinned.scale, 1.0);
        assert_eq!(f.pinned.opacity, 1.0);
    }
}

#[test]
fn malformed_scale_range_stays_bounded() {
    let t = ScrollTransition::new(TransitionConfig {
        scale_range: Some([1.0, -0.8]),
        ..TransitionConfig::default()
    });
    for i in 0..=10 {
        let s = t.frame_at(i as f64 / 10.0).pinned.scale;
        assert!((0.0..=1.0).contains(&s), "scale {s}");
    }
    assert_eq!(t.frame_at(1.0).pinned.scale, 0.0);
}

#[test]
fn reference_example_from_geometry() {
    let t = shrinking();
    let at_bottom = ScrollSample::new(0.0, ContainerRect::new(800.0, 800.0), 800.0);
    let aligned = ScrollSample::new(800.0, ContainerRect::new(0.0, 800.0), 800.0);
    assert_eq!(t.frame(&at_bottom).progress, 0.0);
    assert_eq!(t.frame(&aligned).progress, 1.0);
}

#[test]
fn both_sections_share_one_eased_value() {
    let t = ScrollTransition::new(TransitionConfig {
        y_offset: 100.0,
        ease: Ease::InQuad,
        ..TransitionConfig::default()
    });
    let f = t.frame_at(0.5);
    assert_eq!(f.progress, 0.5);
    assert_eq!(f.rising.translate_y, 75.0);
    assert_eq!(f.rising.opacity, 0.25);
}

#[test]
fn evaluation_is_idempotent() {
    let t = shrinking();
    let s = ScrollSample::from_document(1000.0, 900.0, 640.0, 768.0);
    assert_eq!(t.frame(&s), t.frame(&s));
}

#[test]
fn styles_are_monotonic_in_progress() {
    let t = shrinking();
    let mut prev = t.frame_at(0.0);
    for i in 1..=50 {
        let f = t.frame_at(i as f64 / 50.0);
        assert!(f.pinned.opacity <= prev.pinned.opacity);
        assert!(f.pinned.scale <= prev.pinned.scale);
        assert!(f.rising.translate_y <= prev.rising.translate_y);
        assert!(f.rising.opacity >= prev.rising.opacity);
        prev = f;
    }
}

#[test]
fn static_frame_matches_progress_zero() {
    let t = shrinking();
    assert_eq!(t.static_frame(), t.frame_at(0.0));
}
