//! GPU-compatible data types for the line pipeline
//!
//! These types match the shader layouts exactly and derive Pod and
//! Zeroable for safe GPU buffer writes.

use bytemuck::{Pod, Zeroable};
use skiff_math::Vec2;

/// A line-list vertex in pixel space
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in pixels (top-left origin, +Y down)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl LineVertex {
    /// Create a new line vertex
    pub fn new(position: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: [position.x, position.y],
            color,
        }
    }
}

/// Per-frame shader uniforms
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Column-major pixel-space -> NDC projection
    pub projection: [[f32; 4]; 4],
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            projection: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_vertex_size() {
        // 2 floats position + 4 floats color
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
    }

    #[test]
    fn test_frame_uniforms_size() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 64);
    }

    #[test]
    fn test_line_vertex_from_vec2() {
        let v = LineVertex::new(Vec2::new(3.0, 4.0), [1.0; 4]);
        assert_eq!(v.position, [3.0, 4.0]);
    }
}
