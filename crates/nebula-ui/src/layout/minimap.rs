use nebula_core::geometry::Rect;
use nebula_core::math::Vec2;

/// World-to-pixel mapping of a minimap.
///
/// The world rectangle is scaled uniformly to fit the minimap bounds and
/// centred on the free axis: `pixel = world * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapTransform {
    pub scale: f32,
    pub offset: Vec2,
}

impl MinimapTransform {
    /// Fit `world` into `pixels`. `None` when either rectangle is empty.
    pub fn fit(world: Rect<f32>, pixels: Rect<f32>) -> Option<Self> {
        if world.is_empty() || pixels.is_empty() {
            return None;
        }
        let scale = (pixels.width / world.width).min(pixels.height / world.height);
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }

        let used = Vec2::new(world.width, world.height) * scale;
        let free = Vec2::new(pixels.width, pixels.height) - used;
        let origin = pixels.position() + free * 0.5;
        Some(Self {
            scale,
            offset: origin - world.position() * scale,
        })
    }

    pub fn world_to_pixel(&self, world: Vec2) -> Vec2 {
        world * self.scale + self.offset
    }

    pub fn pixel_to_world(&self, pixel: Vec2) -> Vec2 {
        (pixel - self.offset) / self.scale
    }

    /// A pixel-space movement expressed in world units.
    pub fn pixel_delta_to_world(&self, delta: Vec2) -> Vec2 {
        delta / self.scale
    }

    pub fn world_rect_to_pixel(&self, world: Rect<f32>) -> Rect<f32> {
        let min = self.world_to_pixel(world.position());
        Rect::new(min.x, min.y, world.width * self.scale, world.height * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_centres_on_free_axis() {
        let world = Rect::new(-100.0, -50.0, 200.0, 100.0);
        let pixels = Rect::new(10.0, 10.0, 100.0, 100.0);
        let transform = MinimapTransform::fit(world, pixels).unwrap();

        assert_eq!(transform.scale, 0.5);
        // 100x50 pixels used, 25px of free space above and below.
        assert_eq!(transform.world_to_pixel(Vec2::new(-100.0, -50.0)), Vec2::new(10.0, 35.0));
        assert_eq!(transform.world_to_pixel(Vec2::new(100.0, 50.0)), Vec2::new(110.0, 85.0));
    }

    #[test]
    fn test_pixel_to_world_inverts() {
        let transform =
            MinimapTransform::fit(Rect::new(0.0, 0.0, 400.0, 400.0), Rect::new(20.0, 20.0, 200.0, 200.0))
                .unwrap();
        let world = Vec2::new(120.0, 300.0);
        assert_eq!(transform.pixel_to_world(transform.world_to_pixel(world)), world);
        assert_eq!(transform.pixel_delta_to_world(Vec2::new(10.0, 0.0)), Vec2::new(20.0, 0.0));
    }

    #[test]
    fn test_fit_rejects_empty() {
        let pixels = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(MinimapTransform::fit(Rect::ZERO, pixels).is_none());
        assert!(MinimapTransform::fit(pixels, Rect::ZERO).is_none());
    }
}
