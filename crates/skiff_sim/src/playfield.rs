//! Toroidal playfield
//!
//! The ship lives on a torus: leaving one edge re-enters at the opposite
//! edge. A margin equal to the hull size lets the ship slide fully off
//! screen before reappearing, so the wrap never pops visibly.

use skiff_math::Vec2;

/// Screen-space wrap field with an off-screen margin on every edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    /// Visible width in pixels
    pub width: f32,
    /// Visible height in pixels
    pub height: f32,
    /// Off-screen margin in pixels before a wrap triggers
    pub margin: f32,
}

impl Playfield {
    /// Create a playfield covering `width x height` pixels with the given margin
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Center of the visible area
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a point is inside the wrap field (visible area plus margin)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= -self.margin
            && point.x <= self.width + self.margin
            && point.y >= -self.margin
            && point.y <= self.height + self.margin
    }

    /// Wrap a position across field edges.
    ///
    /// A point past `width + margin` re-enters at `-margin`, and
    /// symmetrically for the other three edges. This is a single re-entry
    /// assignment, not a modulo: a point that somehow ends up far outside
    /// re-enters at the opposite margin rather than somewhere proportional.
    pub fn wrap(&self, point: Vec2) -> Vec2 {
        let mut wrapped = point;

        if wrapped.x > self.width + self.margin {
            wrapped.x = -self.margin;
        } else if wrapped.x < -self.margin {
            wrapped.x = self.width + self.margin;
        }

        if wrapped.y > self.height + self.margin {
            wrapped.y = -self.margin;
        } else if wrapped.y < -self.margin {
            wrapped.y = self.height + self.margin;
        }

        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::new(800.0, 450.0, 20.0)
    }

    #[test]
    fn test_center() {
        assert_eq!(field().center(), Vec2::new(400.0, 225.0));
    }

    #[test]
    fn test_inside_untouched() {
        let f = field();
        let p = Vec2::new(100.0, 100.0);
        assert_eq!(f.wrap(p), p);
        assert!(f.contains(p));
    }

    #[test]
    fn test_margin_edge_untouched() {
        let f = field();
        // Exactly on the margin boundary is still inside
        let p = Vec2::new(820.0, -20.0);
        assert_eq!(f.wrap(p), p);
        assert!(f.contains(p));
    }

    #[test]
    fn test_wrap_right_to_left() {
        let f = field();
        let wrapped = f.wrap(Vec2::new(821.0, 100.0));
        assert_eq!(wrapped, Vec2::new(-20.0, 100.0));
    }

    #[test]
    fn test_wrap_left_to_right() {
        let f = field();
        let wrapped = f.wrap(Vec2::new(-21.0, 100.0));
        assert_eq!(wrapped, Vec2::new(820.0, 100.0));
    }

    #[test]
    fn test_wrap_bottom_to_top() {
        let f = field();
        let wrapped = f.wrap(Vec2::new(100.0, 471.0));
        assert_eq!(wrapped, Vec2::new(100.0, -20.0));
    }

    #[test]
    fn test_wrap_top_to_bottom() {
        let f = field();
        let wrapped = f.wrap(Vec2::new(100.0, -21.0));
        assert_eq!(wrapped, Vec2::new(100.0, 470.0));
    }

    #[test]
    fn test_wrap_corner_both_axes() {
        let f = field();
        let wrapped = f.wrap(Vec2::new(900.0, -50.0));
        assert_eq!(wrapped, Vec2::new(-20.0, 470.0));
    }

    #[test]
    fn test_wrap_result_is_contained() {
        let f = field();
        let wrapped = f.wrap(Vec2::new(5000.0, 5000.0));
        assert!(f.contains(wrapped));
    }
}
