use crate::animation::ease::Ease;

/// Options supplied once when a transition is composed.
///
/// Keys mirror the props used by page markup (`section1ClassName`, `yOffset`, ...).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitionConfig {
    /// Extra classes for the pinned (hero) section.
    pub section1_class_name: String,
    /// Extra classes for the rising (content) section.
    pub section2_class_name: String,
    /// Initial downward offset of the rising section, px.
    pub y_offset: f64,
    /// Scale range for the pinned section; `None` disables scaling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_range: Option<[f64; 2]>,
    /// Curve applied to progress before styles are derived.
    pub ease: Ease,
    /// Pinned section opacity at progress 1.
    pub pinned_min_opacity: f64,
    /// Rising section opacity at progress 0.
    pub rising_start_opacity: f64,
    /// Fraction of the container height the transition spans.
    pub span: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            section1_class_name: String::new(),
            section2_class_name: String::new(),
            y_offset: 0.0,
            scale_range: None,
            ease: Ease::Linear,
            pinned_min_opacity: 1.0,
            rising_start_opacity: 0.0,
            span: 1.0,
        }
    }
}

/// Validated scale interval; `lo <= hi`, both finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRange {
    pub lo: f64,
    pub hi: f64,
}

impl ScaleRange {
    /// Normalize an authored `[a, b]` pair.
    ///
    /// Order does not matter: the pinned section always shrinks from the larger bound
    /// to the smaller one. Non-finite bounds fall back to `1.0`, negative ones to `0.0`.
    pub fn normalize(raw: [f64; 2]) -> Self {
        let fix = |v: f64| if v.is_finite() { v.max(0.0) } else { 1.0 };
        let (a, b) = (fix(raw[0]), fix(raw[1]));
        if raw[0] > raw[1] || raw != [a, b] {
            tracing::warn!(?raw, "scaleRange is not an ascending non-negative pair; normalizing");
        }
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    pub fn clamp(self, v: f64) -> f64 {
        if v.is_nan() {
            return self.hi;
        }
        v.clamp(self.lo, self.hi)
    }
}

/// Options after normalization; everything downstream reads these.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ResolvedConfig {
    pub y_offset: f64,
    pub scale: Option<ScaleRange>,
    pub ease: Ease,
    pub pinned_min_opacity: f64,
    pub rising_start_opacity: f64,
    pub span: f64,
}

impl TransitionConfig {
    /// Load from a JSON object. Missing keys take their defaults.
    pub fn from_json(s: &str) -> crate::ScrollFxResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub(crate) fn resolve(&self) -> ResolvedConfig {
        let unit = |v: f64, fallback: f64| {
            if v.is_finite() {
                v.clamp(0.0, 1.0)
            } else {
                fallback
            }
        };
        let y_offset = if self.y_offset.is_finite() {
            self.y_offset
        } else {
            tracing::warn!(y_offset = self.y_offset, "non-finite yOffset; using 0");
            0.0
        };

        ResolvedConfig {
            y_offset,
            scale: self.scale_range.map(ScaleRange::normalize),
            ease: self.ease,
            pinned_min_opacity: unit(self.pinned_min_opacity, 1.0),
            rising_start_opacity: unit(self.rising_start_opacity, 0.0),
            span: if self.span.is_finite() && self.span > 0.0 {
                self.span
            } else {
                1.0
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/config.rs"]
mod tests;
