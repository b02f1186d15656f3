use crate::{
    animation::ramp::Ramp,
    foundation::core::ScrollSample,
    transition::{
        config::{ResolvedConfig, ScaleRange, TransitionConfig},
        progress::progress,
        style::SectionStyle,
    },
};

/// Styles for both sections derived from one geometry sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionFrame {
    /// Raw (un-eased) progress in `[0, 1]`.
    pub progress: f64,
    /// Section 1: the pinned hero.
    pub pinned: SectionStyle,
    /// Section 2: the content rising over it.
    pub rising: SectionStyle,
}

/// Pure scroll-to-style mapping for a pinned hero and a rising content section.
///
/// Both sections read the same eased progress value. The pinned section keeps
/// `translate_y = 0` (it is held in place by sticky positioning) and fades/shrinks
/// toward its floor; the rising section travels from `y_offset` to `0` while fading in.
#[derive(Clone, Debug)]
pub struct ScrollTransition {
    config: TransitionConfig,
    resolved: ResolvedConfig,
    pinned_opacity: Ramp<f64>,
    pinned_scale: Option<(Ramp<f64>, ScaleRange)>,
    rising_offset: Ramp<f64>,
    rising_opacity: Ramp<f64>,
}

impl ScrollTransition {
    pub fn new(config: TransitionConfig) -> Self {
        let resolved = config.resolve();
        // Easing is applied once up front, so the ramps themselves are linear.
        let pinned_opacity = Ramp::new(1.0, resolved.pinned_min_opacity);
        let pinned_scale = resolved.scale.map(|r| (Ramp::new(r.hi, r.lo), r));
        let rising_offset = Ramp::new(resolved.y_offset, 0.0);
        let rising_opacity = Ramp::new(resolved.rising_start_opacity, 1.0);

        Self {
            config,
            resolved,
            pinned_opacity,
            pinned_scale,
            rising_offset,
            rising_opacity,
        }
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Progress for `sample` using this transition's span.
    pub fn progress(&self, sample: &ScrollSample) -> f64 {
        progress(sample, self.resolved.span)
    }

    /// Evaluate both sections for one sample.
    pub fn frame(&self, sample: &ScrollSample) -> TransitionFrame {
        self.frame_at(self.progress(sample))
    }

    /// Evaluate both sections at a given raw progress.
    pub fn frame_at(&self, progress: f64) -> TransitionFrame {
        let progress = crate::foundation::math::clamp01_or(progress, 0.0);
        let eased = self.resolved.ease.apply(progress);
        TransitionFrame {
            progress,
            pinned: self.pinned_style(eased),
            rising: self.rising_style(eased),
        }
    }

    /// Pinned-section style at eased progress `p`.
    pub fn pinned_style(&self, p: f64) -> SectionStyle {
        let opacity = self.pinned_opacity.sample(p).clamp(0.0, 1.0);
        let scale = match &self.pinned_scale {
            Some((ramp, range)) => range.clamp(ramp.sample(p)),
            None => 1.0,
        };
        SectionStyle {
            opacity,
            translate_y: 0.0,
            scale,
        }
    }

    /// Rising-section style at eased progress `p`.
    pub fn rising_style(&self, p: f64) -> SectionStyle {
        SectionStyle {
            opacity: self.rising_opacity.sample(p).clamp(0.0, 1.0),
            translate_y: self.rising_offset.sample(p),
            scale: 1.0,
        }
    }

    /// Frame used when the host cannot deliver scroll notifications.
    pub fn static_frame(&self) -> TransitionFrame {
        self.frame_at(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/scroll.rs"]
mod tests;
