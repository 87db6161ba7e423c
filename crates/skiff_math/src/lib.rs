//! 2D math primitives for Skiff
//!
//! Provides the vector type, angle helpers, and the orthographic projection
//! used by the renderer. Everything here is plain `f32` screen-space math:
//! +X is right, +Y is down, rotation 0 points up (-Y).

pub mod angle;
pub mod ortho;
pub mod vec2;

pub use angle::{wrap_degrees, DEG_TO_RAD, RAD_TO_DEG};
pub use ortho::ortho_matrix;
pub use vec2::Vec2;
