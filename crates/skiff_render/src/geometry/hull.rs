//! Ship hull silhouette
//!
//! The hull is a closed polyline in unit space: nose at (0, -1), wingtips at
//! (-1, 1) and (1, 1), with a notched tail between them. Scaling by the
//! ship's size gives the on-screen shape.

use skiff_math::Vec2;

/// Number of distinct outline points
pub const HULL_POINTS: usize = 5;

/// Closed polyline describing a ship silhouette in unit space
#[derive(Debug, Clone, PartialEq)]
pub struct HullOutline {
    points: [Vec2; HULL_POINTS],
}

impl HullOutline {
    /// The default triangle-with-notch ship hull
    pub fn ship() -> Self {
        Self {
            points: [
                Vec2::new(0.0, -1.0),
                Vec2::new(-1.0, 1.0),
                Vec2::new(-0.4, 0.6),
                Vec2::new(0.4, 0.6),
                Vec2::new(1.0, 1.0),
            ],
        }
    }

    /// Build an outline from distinct points; the loop closes automatically
    pub fn from_points(points: [Vec2; HULL_POINTS]) -> Self {
        Self { points }
    }

    /// The distinct outline points
    pub fn points(&self) -> &[Vec2; HULL_POINTS] {
        &self.points
    }

    /// Iterate over outline edges, closing the loop back to the first point
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        (0..HULL_POINTS).map(move |i| (self.points[i], self.points[(i + 1) % HULL_POINTS]))
    }

    /// Number of edges (equals the point count for a closed loop)
    pub fn edge_count(&self) -> usize {
        HULL_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_count() {
        let hull = HullOutline::ship();
        assert_eq!(hull.edges().count(), HULL_POINTS);
        assert_eq!(hull.edge_count(), HULL_POINTS);
    }

    #[test]
    fn test_edges_close_the_loop() {
        let hull = HullOutline::ship();
        let edges: Vec<_> = hull.edges().collect();
        let last = edges.last().unwrap();
        let first = edges.first().unwrap();
        assert_eq!(last.1, first.0);
    }

    #[test]
    fn test_no_degenerate_edges() {
        let hull = HullOutline::ship();
        for (a, b) in hull.edges() {
            assert!((b - a).length() > 0.0, "degenerate edge {:?} -> {:?}", a, b);
        }
    }

    #[test]
    fn test_edges_are_consecutive() {
        let hull = HullOutline::ship();
        let edges: Vec<_> = hull.edges().collect();
        for pair in edges.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_nose_points_up() {
        let hull = HullOutline::ship();
        assert_eq!(hull.points()[0], Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_symmetric_about_y_axis() {
        let hull = HullOutline::ship();
        let points = hull.points();
        // wingtips and tail notch mirror each other
        assert_eq!(points[1].x, -points[4].x);
        assert_eq!(points[1].y, points[4].y);
        assert_eq!(points[2].x, -points[3].x);
        assert_eq!(points[2].y, points[3].y);
    }
}
