//! CPU-side line vertex accumulation
//!
//! Collects the frame's line segments into a flat vertex list before a
//! single upload to the GPU. Transform order for outlines matches the sim:
//! rotate the unit point, scale to pixels, translate to the world position.

use crate::geometry::HullOutline;
use crate::pipeline::LineVertex;
use skiff_math::{Vec2, DEG_TO_RAD};

/// Accumulates line-list vertices for one frame
#[derive(Debug, Default)]
pub struct WireframeBatch {
    vertices: Vec<LineVertex>,
}

impl WireframeBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all accumulated vertices (keeps the allocation)
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Add a single segment in pixel space
    pub fn push_segment(&mut self, a: Vec2, b: Vec2, color: [f32; 4]) {
        self.vertices.push(LineVertex::new(a, color));
        self.vertices.push(LineVertex::new(b, color));
    }

    /// Add a hull outline placed in the world
    ///
    /// Each unit-space point is rotated by `rotation_deg`, scaled by `scale`
    /// pixels, and translated to `position`.
    pub fn push_outline(
        &mut self,
        outline: &HullOutline,
        position: Vec2,
        rotation_deg: f32,
        scale: f32,
        color: [f32; 4],
    ) {
        let radians = rotation_deg * DEG_TO_RAD;
        for (start, end) in outline.edges() {
            let a = start.rotated(radians) * scale + position;
            let b = end.rotated(radians) * scale + position;
            self.push_segment(a, b, color);
        }
    }

    /// The accumulated vertices, two per segment
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Total vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of complete segments
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }
}
