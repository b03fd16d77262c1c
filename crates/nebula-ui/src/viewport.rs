//! Physical viewport and logical-space conversion.

use nebula_core::geometry::Rect;
use nebula_core::math::Vec2;

/// The surface the UI is drawn into, in physical pixels.
///
/// Layout runs in logical space (`physical / scale_factor`). Callers convert
/// raw pointer positions with [`Viewport::to_logical_point`] before handing
/// them to the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub physical: Rect<f32>,
    pub scale_factor: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        Self {
            physical: Rect::new(0.0, 0.0, width.max(0.0), height.max(0.0)),
            scale_factor,
        }
    }

    /// Scale factor guarded against zero, negative and non-finite values.
    pub fn scale(&self) -> f32 {
        if self.scale_factor.is_finite() && self.scale_factor > 0.0 {
            self.scale_factor
        } else {
            1.0
        }
    }

    /// The viewport rectangle in logical coordinates.
    pub fn logical(&self) -> Rect<f32> {
        let scale = self.scale();
        Rect::new(
            self.physical.x / scale,
            self.physical.y / scale,
            self.physical.width.max(0.0) / scale,
            self.physical.height.max(0.0) / scale,
        )
    }

    /// Convert a physical pointer position to logical space.
    pub fn to_logical_point(&self, physical: Vec2) -> Vec2 {
        physical / self.scale()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_divides_by_scale() {
        let viewport = Viewport::new(2000.0, 1600.0, 2.0);
        let logical = viewport.logical();
        assert_eq!(logical.width, 1000.0);
        assert_eq!(logical.height, 800.0);
        assert_eq!(viewport.to_logical_point(Vec2::new(200.0, 100.0)), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_zero_scale_falls_back_to_one() {
        let viewport = Viewport::new(800.0, 600.0, 0.0);
        assert_eq!(viewport.logical().width, 800.0);
    }
}
