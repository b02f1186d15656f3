use crate::foundation::{core::ScrollSample, math::clamp01_or, math::finite_or};

/// Transition progress for one geometry sample.
///
/// `progress = clamp((viewport_height - container_top) / (container_height * span), 0, 1)`
///
/// `span` is the fraction of the container height over which the transition runs
/// (`1.0` = a full container height). A zero, negative or non-finite height yields `1.0`;
/// a non-positive or non-finite span is treated as `1.0`. A negative (overscroll/bounce)
/// or NaN scroll offset yields `0.0`. Never returns NaN.
pub fn progress(sample: &ScrollSample, span: f64) -> f64 {
    let height = finite_or(sample.container_height, 0.0);
    if height <= 0.0 {
        return 1.0;
    }
    if sample.scroll_offset.is_nan() || sample.scroll_offset < 0.0 {
        return 0.0;
    }
    let span = if span.is_finite() && span > 0.0 {
        span
    } else {
        1.0
    };

    let travelled = sample.viewport_height - sample.container_top;
    clamp01_or(travelled / (height * span), 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/transition/progress.rs"]
mod tests;
