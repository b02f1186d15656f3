use crate::foundation::math::clamp01_or;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` (at `t = 0`) to `b` (at `t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Mapping from (already eased) progress `[0, 1]` onto the segment `from -> to`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ramp<T> {
    pub from: T,
    pub to: T,
}

impl<T> Ramp<T>
where
    T: Lerp + Clone,
{
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    /// Sample at progress `p`; out-of-range input holds the nearest end, NaN reads as `0`.
    pub fn sample(&self, p: f64) -> T {
        match clamp01_or(p, 0.0) {
            p if p <= 0.0 => self.from.clone(),
            p if p >= 1.0 => self.to.clone(),
            p => T::lerp(&self.from, &self.to, p),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ramp.rs"]
mod tests;
