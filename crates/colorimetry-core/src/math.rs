//! Scalar helpers.

/// Clamp `x` into `[a, b]`.
#[inline]
pub fn clamp(x: f32, a: f32, b: f32) -> f32 {
    a.max(x.min(b))
}

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`).
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}
