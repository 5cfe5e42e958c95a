//! Axis-aligned collision detection
//!
//! Every collidable in the game is an upright rectangle, so the whole
//! collision story is a single AABB overlap test. Overlap is strict on both
//! axes: rectangles that merely share an edge do not collide.

use glam::Vec2;

/// An axis-aligned rectangle in surface coordinates (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

/// Strict AABB overlap test.
///
/// Open-interval semantics: `true` only when the rectangles overlap by a
/// positive amount on both axes. Touching edges is not a collision.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.min.x < b.min.x + b.size.x
        && a.min.x + a.size.x > b.min.x
        && a.min.y < b.min.y + b.size.y
        && a.min.y + a.size.y > b.min.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_overlap() {
        // Bullet fully inside an enemy body
        let bullet = Rect::new(100.0, 100.0, 5.0, 10.0);
        let enemy = Rect::new(100.0, 100.0, 30.0, 30.0);
        assert!(rects_overlap(&bullet, &enemy));
    }

    #[test]
    fn test_partial_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_edge_touch_is_not_collision() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &right));
        assert!(!rects_overlap(&a, &below));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(380.0, 280.0, 40.0, 40.0);
        assert_eq!(r.center(), Vec2::new(400.0, 300.0));
    }

    proptest! {
        /// Overlap is symmetric for arbitrary rectangles
        #[test]
        fn prop_overlap_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.1f32..100.0, ah in 0.1f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.1f32..100.0, bh in 0.1f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
        }

        /// A rectangle always overlaps itself
        #[test]
        fn prop_overlap_reflexive(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 0.1f32..100.0, h in 0.1f32..100.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(rects_overlap(&r, &r));
        }
    }
}
