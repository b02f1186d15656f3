use crate::foundation::core::{Affine, Vec2};

/// Visual parameters applied to one composed section for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyle {
    /// `0..=1`.
    pub opacity: f64,
    /// Vertical offset, px. Positive moves the section down.
    pub translate_y: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl SectionStyle {
    /// Fully opaque, untranslated, unscaled.
    pub const RESTING: SectionStyle = SectionStyle {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Affine transform for this style, scaling about `origin` (in section-local px).
    pub fn affine(&self, origin: Vec2) -> Affine {
        Affine::translate(Vec2::new(0.0, self.translate_y))
            * Affine::translate(origin)
            * Affine::scale(self.scale)
            * Affine::translate(-origin)
    }

    /// Inline CSS declarations (`opacity` and `transform`).
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            fmt_num(self.opacity),
            fmt_num(self.translate_y),
            fmt_num(self.scale)
        )
    }
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self::RESTING
    }
}

// Four decimals, trailing zeros trimmed; `-0` prints as `0`.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}
