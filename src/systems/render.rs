//! GPU rendering system
//!
//! Owns the render context and line pipeline and turns a frame's wireframe
//! batch into a single clear-and-draw pass. The projection always maps the
//! logical playfield to the full surface, so a resized window stretches the
//! field rather than revealing more of it.

use crate::config::RenderingConfig;
use skiff_math::ortho_matrix;
use skiff_render::{FrameUniforms, LinePipeline, RenderContext, WireframeBatch};
use std::sync::Arc;
use winit::window::Window;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    line_pipeline: LinePipeline,
    render_config: RenderingConfig,
    /// Logical playfield size the projection maps to the surface
    field_size: (f32, f32),
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        field_size: (f32, f32),
        vsync: bool,
    ) -> Self {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync));
        let line_pipeline = LinePipeline::new(&context.device, context.config.format);

        log::info!(
            "Render system ready: {}x{} surface, {:?}",
            context.size.width,
            context.size.height,
            context.config.format
        );

        Self {
            context,
            line_pipeline,
            render_config,
            field_size,
        }
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }

    /// Render a single frame from the accumulated wireframe batch
    pub fn render_frame(&mut self, batch: &WireframeBatch) -> Result<(), RenderError> {
        let (field_width, field_height) = self.field_size;
        let uniforms = FrameUniforms {
            projection: ortho_matrix(0.0, field_width, 0.0, field_height, 0.0, 1.0),
        };
        self.line_pipeline
            .update_uniforms(&self.context.queue, &uniforms);
        self.line_pipeline
            .upload_lines(&self.context.device, &self.context.queue, batch.vertices());

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.line_pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Hull line color from config
    pub fn hull_color(&self) -> [f32; 4] {
        self.render_config.hull_color
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }
}
