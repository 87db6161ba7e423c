//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit or ResetShip.
//! Movement keys (arrows, WAD) are NOT mapped here - they go directly to
//! the ShipController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Put the ship back at the playfield center, at rest (R key)
    ResetShip,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
}

/// Maps raw input events to semantic actions
///
/// Movement keys are NOT mapped here - they go directly to the
/// ShipController. This mapper handles "special" keys only.
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for movement keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetShip),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None, // Movement keys handled by controller
        }
    }
}
