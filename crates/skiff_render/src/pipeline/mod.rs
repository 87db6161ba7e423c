//! Line rendering pipeline
//!
//! One render pass: clear, then draw every accumulated line segment in a
//! single line-list draw call.

mod line_pipeline;
mod types;

pub use line_pipeline::LinePipeline;
pub use types::{FrameUniforms, LineVertex};
