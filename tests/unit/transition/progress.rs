use super::*;
use crate::foundation::core::ContainerRect;

fn sample(top: f64, height: f64, viewport: f64) -> ScrollSample {
    ScrollSample::new(0.0, ContainerRect::new(top, height), viewport)
}

#[test]
fn reference_geometry_hits_both_ends() {
    assert_eq!(progress(&sample(800.0, 800.0, 800.0), 1.0), 0.0);
    assert_eq!(progress(&sample(0.0, 800.0, 800.0), 1.0), 1.0);
    assert_eq!(progress(&sample(400.0, 800.0, 800.0), 1.0), 0.5);
}

#[test]
fn always_clamped() {
    for top in [-10_000.0, -800.0, -1.0, 0.0, 1.0, 799.0, 5_000.0] {
        for height in [1.0, 10.0, 800.0, 20_000.0] {
            let p = progress(&sample(top, height, 800.0), 1.0);
            assert!((0.0..=1.0).contains(&p), "top={top} height={height} p={p}");
        }
    }
}

#[test]
fn zero_or_missing_height_counts_as_done() {
    assert_eq!(progress(&sample(300.0, 0.0, 800.0), 1.0), 1.0);
    assert_eq!(progress(&sample(300.0, -5.0, 800.0), 1.0), 1.0);
    assert_eq!(progress(&sample(300.0, f64::NAN, 800.0), 1.0), 1.0);
}

#[test]
fn overscroll_clamps_to_zero() {
    // Rubber-band at the top pushes the container further down than its resting place.
    let s = ScrollSample::from_document(800.0, 800.0, -120.0, 800.0);
    assert_eq!(progress(&s, 1.0), 0.0);
}

#[test]
fn negative_scroll_at_page_root_clamps_to_zero() {
    // Container at the document root: at rest it has already fully transitioned.
    let at_rest = ScrollSample::from_document(0.0, 800.0, 0.0, 800.0);
    assert_eq!(progress(&at_rest, 1.0), 1.0);

    let bounced = ScrollSample::from_document(0.0, 800.0, -120.0, 800.0);
    assert_eq!(progress(&bounced, 1.0), 0.0);

    let nan_offset = ScrollSample::from_document(0.0, 800.0, f64::NAN, 800.0);
    assert_eq!(progress(&nan_offset, 1.0), 0.0);
}

#[test]
fn bounce_then_settle_never_steps_backwards() {
    let mut prev = 0.0;
    for offset in [-120.0, -60.0, -1.0, 0.0, 40.0, 400.0] {
        let p = progress(&ScrollSample::from_document(0.0, 800.0, offset, 800.0), 1.0);
        assert!(p >= prev, "offset {offset}: {p} < {prev}");
        prev = p;
    }
}

#[test]
fn span_shortens_the_transition() {
    assert_eq!(progress(&sample(600.0, 800.0, 800.0), 0.5), 0.5);
    assert_eq!(progress(&sample(600.0, 800.0, 800.0), 0.0), 0.25);
    assert_eq!(progress(&sample(600.0, 800.0, 800.0), f64::NAN), 0.25);
}

#[test]
fn monotonic_in_scroll_offset() {
    let mut prev = 0.0;
    for step in 0..=200 {
        let s = ScrollSample::from_document(900.0, 1200.0, step as f64 * 10.0, 720.0);
        let p = progress(&s, 1.0);
        assert!(p >= prev);
        prev = p;
    }
    assert_eq!(prev, 1.0);
}

#[test]
fn non_finite_geometry_never_yields_nan() {
    let p = progress(&sample(f64::NAN, 800.0, 800.0), 1.0);
    assert_eq!(p, 0.0);
    let p = progress(&sample(f64::NEG_INFINITY, 800.0, 800.0), 1.0);
    assert_eq!(p, 1.0);
}
