//! Math types used by layout and hit-testing.
//!
//! Re-exports the SIMD-friendly `glam` vectors. UI code works in `f32`
//! logical coordinates, so [`Vec2`] is the common point/delta type.

pub use glam::{Affine2, Mat3, Vec2, Vec3, Vec4, vec2};

/// Linearly interpolate between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: where `value` falls between `a` and `b`.
///
/// Returns `0.0` for an empty range instead of dividing by zero.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    let span = b - a;
    if span.abs() <= f32::EPSILON {
        0.0
    } else {
        (value - a) / span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_inverse_lerp_empty_range() {
        assert_eq!(inverse_lerp(3.0, 3.0, 10.0), 0.0);
        assert_eq!(inverse_lerp(0.0, 10.0, 2.5), 0.25);
    }
}
