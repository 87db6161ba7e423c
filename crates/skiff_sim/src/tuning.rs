//! Gameplay tuning for the player ship
//!
//! Keep this separate from window/render configuration; these numbers define
//! how the ship feels, not how it is displayed.

use serde::{Deserialize, Serialize};

/// Tuning constants for ship movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShipTuning {
    /// Maximum speed in pixels per second while thrusting
    pub max_speed: f32,

    /// Thrust acceleration in pixels per second squared
    pub acceleration: f32,

    /// Per-frame velocity retention factor when coasting, in (0, 1].
    ///
    /// Applied once per simulation step, so the decay rate depends on frame
    /// rate. Matches the feel of the classic per-frame `velocity *= 0.95`
    /// under a vsynced ~60 FPS loop.
    pub drag: f32,

    /// Rotation speed in degrees per second
    pub turn_rate: f32,

    /// Hull scale in pixels (unit hull points are multiplied by this)
    pub size: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            max_speed: 250.0,
            acceleration: 750.0,
            drag: 0.95,
            turn_rate: 360.0,
            size: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let tuning = ShipTuning::default();
        assert_eq!(tuning.max_speed, 250.0);
        assert_eq!(tuning.acceleration, 750.0);
        assert_eq!(tuning.drag, 0.95);
        assert_eq!(tuning.turn_rate, 360.0);
        assert_eq!(tuning.size, 20.0);
    }

    #[test]
    fn test_drag_retains_less_than_full_speed() {
        let tuning = ShipTuning::default();
        assert!(tuning.drag > 0.0 && tuning.drag < 1.0);
    }
}
