/// Clamp into `[0, 1]`, mapping NaN to `nan_as`.
pub(crate) fn clamp01_or(v: f64, nan_as: f64) -> f64 {
    if v.is_nan() {
        return nan_as;
    }
    v.clamp(0.0, 1.0)
}

/// Replace non-finite values with `fallback`.
pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Bit-exact float comparison; treats `-0.0 == 0.0` and NaN as equal to itself.
pub(crate) fn same_f64(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
