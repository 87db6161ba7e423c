//! Wireframe rendering for Skiff
//!
//! This crate provides the wgpu-based line renderer for the ship sandbox.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::LinePipeline`] - Line-list pipeline drawing pixel-space segments
//! - [`geometry::HullOutline`] - The ship silhouette as a closed polyline
//! - [`wireframe::WireframeBatch`] - Accumulates line vertices for upload

pub mod context;
pub mod geometry;
pub mod pipeline;
pub mod wireframe;

// Re-export the common entry points
pub use context::RenderContext;
pub use geometry::HullOutline;
pub use pipeline::{FrameUniforms, LinePipeline, LineVertex};
pub use wireframe::WireframeBatch;
