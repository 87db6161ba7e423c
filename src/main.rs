//! Skiff - Wireframe Ship Sandbox
//!
//! A single player-controlled ship on a toroidal playfield, drawn as a
//! wireframe hull every frame. Arrows or WAD to fly, R to reset, F for
//! fullscreen, Escape to quit.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use skiff::config::AppConfig;
use skiff::input::{InputAction, InputMapper};
use skiff::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use skiff_input::ShipController;
use skiff_render::{HullOutline, WireframeBatch};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    controller: ShipController,
    hull: HullOutline,
    batch: WireframeBatch,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let simulation = SimulationSystem::new(
            &config.ship,
            config.window.width as f32,
            config.window.height as f32,
        );

        Self {
            config,
            window: None,
            render: None,
            simulation,
            controller: ShipController::new(),
            hull: HullOutline::ship(),
            batch: WireframeBatch::new(),
        }
    }

    /// Advance the sim one frame and redraw
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.simulation.update(self.controller.ship_input());

        let ship = self.simulation.ship().clone();
        let hull_color = match &self.render {
            Some(render) => render.hull_color(),
            None => return,
        };

        self.batch.clear();
        self.batch.push_outline(
            &self.hull,
            ship.position,
            ship.rotation,
            self.simulation.ship_size(),
            hull_color,
        );

        if let Some(render) = &mut self.render {
            match render.render_frame(&self.batch) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("Frame dropped: {}", e),
            }
        }

        if let Some(window) = &self.window {
            if self.config.debug.show_overlay {
                window.update_title(ship.position, ship.speed());
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = WindowSystem::create(event_loop, &self.config.window)
                .expect("Failed to create window");

            let render = RenderSystem::new(
                window.window().clone(),
                self.config.rendering.clone(),
                (
                    self.config.window.width as f32,
                    self.config.window.height as f32,
                ),
                self.config.window.vsync,
            );

            window.request_redraw();
            self.window = Some(window);
            self.render = Some(render);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                // Keys released while unfocused never send a Released event
                self.controller.clear();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => {
                            event_loop.exit();
                        }
                        Some(InputAction::ResetShip) => {
                            self.simulation.reset();
                            if let Some(window) = &self.window {
                                window.reset_title();
                            }
                        }
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        None => {
                            self.controller.process_keyboard(key, event.state);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    // Load configuration before logging so the config can set the log level
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.debug.log_level),
    )
    .init();
    log::info!("Starting Skiff");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
