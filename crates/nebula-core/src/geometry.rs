use glam::Vec2;

/// Axis-aligned rectangle, `x`/`y` at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl Rect<f32> {
    pub const ZERO: Rect<f32> = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<f32> {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// True when the rect covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Edge-inclusive containment test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// True when the two rects share a region of positive area.
    pub fn overlaps(&self, other: &Rect<f32>) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn translate(&self, delta: Vec2) -> Self {
        Rect::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Shrink by `amount` on every side. Never produces negative extents.
    pub fn inset(&self, amount: f32) -> Self {
        let width = (self.width - amount * 2.0).max(0.0);
        let height = (self.height - amount * 2.0).max(0.0);
        let dx = ((self.width - width) * 0.5).max(0.0);
        let dy = ((self.height - height) * 0.5).max(0.0);
        Rect::new(self.x + dx, self.y + dy, width, height)
    }

    /// Overlapping region of two rects; zero-sized when they do not overlap.
    pub fn intersect(&self, other: &Rect<f32>) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, (right - x).max(0.0), (bottom - y).max(0.0))
    }

    /// Clamp `point` into the rect.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.x, self.right().max(self.x)),
            point.y.clamp(self.y, self.bottom().max(self.y)),
        )
    }

    /// Split off a strip of `height` from the top: `(top, rest)`.
    ///
    /// The strip is clamped to the rect, so `rest` may be zero-sized.
    pub fn split_top(&self, height: f32) -> (Self, Self) {
        let top_height = height.clamp(0.0, self.height.max(0.0));
        let top = Rect::new(self.x, self.y, self.width.max(0.0), top_height);
        let rest = Rect::new(
            self.x,
            self.y + top_height,
            self.width.max(0.0),
            (self.height - top_height).max(0.0),
        );
        (top, rest)
    }

    /// Split off a strip of `width` from the right: `(rest, right)`.
    pub fn split_right(&self, width: f32) -> (Self, Self) {
        let right_width = width.clamp(0.0, self.width.max(0.0));
        let rest = Rect::new(
            self.x,
            self.y,
            (self.width - right_width).max(0.0),
            self.height.max(0.0),
        );
        let right = Rect::new(rest.right(), self.y, right_width, self.height.max(0.0));
        (rest, right)
    }

    /// Copy with width/height floored at zero.
    pub fn non_negative(&self) -> Self {
        Rect::new(self.x, self.y, self.width.max(0.0), self.height.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_edge_inclusive() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(30.0, 30.0)));
        assert!(!rect.contains(Vec2::new(30.1, 15.0)));
    }

    #[test]
    fn test_inset_never_negative() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
        let inset = rect.inset(3.0);
        assert_eq!(inset.width, 4.0);
        assert_eq!(inset.height, 0.0);
        assert_eq!(inset.y, 2.0);
    }

    #[test]
    fn test_split_top_clamps() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        let (top, rest) = rect.split_top(28.0);
        assert_eq!(top.height, 20.0);
        assert_eq!(rest.height, 0.0);
        assert_eq!(rest.y, 20.0);
    }

    #[test]
    fn test_intersect_disjoint_is_empty() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert!(a.intersect(&b).is_empty());
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_split_right() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        let (rest, right) = rect.split_right(20.0);
        assert_eq!(rest.width, 80.0);
        assert_eq!(right.x, 80.0);
        assert_eq!(right.width, 20.0);
    }
}
