//! Ship controller for arcade-style input handling
//!
//! Controls:
//! - Up / W: thrust
//! - Left / A: turn counter-clockwise
//! - Right / D: turn clockwise

use skiff_sim::ShipInput;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Tracks held movement keys and produces per-frame ship input
#[derive(Debug, Default)]
pub struct ShipController {
    thrust: bool,
    left: bool,
    right: bool,
}

impl ShipController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process keyboard input
    ///
    /// Returns true if the key was a movement key (consumed here).
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::ArrowUp | KeyCode::KeyW => {
                self.thrust = pressed;
                true
            }
            KeyCode::ArrowLeft | KeyCode::KeyA => {
                self.left = pressed;
                true
            }
            KeyCode::ArrowRight | KeyCode::KeyD => {
                self.right = pressed;
                true
            }
            _ => false,
        }
    }

    /// Current control input for the sim
    ///
    /// Turn is right minus left, so holding both keys cancels out.
    pub fn ship_input(&self) -> ShipInput {
        ShipInput {
            thrust: self.thrust,
            turn: (self.right as i32 - self.left as i32) as f32,
        }
    }

    /// Check if any movement key is held
    pub fn is_moving(&self) -> bool {
        self.thrust || self.left || self.right
    }

    /// Drop all held state (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.thrust = false;
        self.left = false;
        self.right = false;
    }
}
