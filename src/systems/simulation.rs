//! Game simulation system
//!
//! Manages the game loop simulation including:
//! - Delta time calculation
//! - Driving the ship body from controller input
//! - Reset to the playfield center

use crate::config::ShipConfig;
use skiff_sim::{Playfield, ShipBody, ShipInput, ShipTuning};
use std::time::Instant;

/// Manages the per-frame ship simulation
pub struct SimulationSystem {
    ship: ShipBody,
    playfield: Playfield,
    tuning: ShipTuning,
    start_rotation: f32,
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create the simulation for a playfield of the given pixel size
    pub fn new(ship_config: &ShipConfig, field_width: f32, field_height: f32) -> Self {
        let tuning = ship_config.to_tuning();
        // The wrap margin equals the hull size so the ship fully leaves the
        // screen before re-entering
        let playfield = Playfield::new(field_width, field_height, tuning.size);
        let ship = ShipBody::with_rotation(playfield.center(), ship_config.start_rotation);

        Self {
            ship,
            playfield,
            tuning,
            start_rotation: ship_config.start_rotation,
            last_frame: Instant::now(),
        }
    }

    /// Run one simulation frame from the given control input
    ///
    /// Returns the delta time used for the step.
    pub fn update(&mut self, input: ShipInput) -> f32 {
        // Cap dt to avoid a huge step on the first frame or after the window
        // was stalled
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        let dt = raw_dt.min(0.25);
        self.last_frame = now;

        self.ship.step(input, dt, &self.tuning, &self.playfield);
        dt
    }

    /// Put the ship back at the center, at rest, at the configured heading
    pub fn reset(&mut self) {
        self.ship = ShipBody::with_rotation(self.playfield.center(), self.start_rotation);
        log::info!("Ship reset to playfield center");
    }

    /// Current ship state
    pub fn ship(&self) -> &ShipBody {
        &self.ship
    }

    /// Hull scale in pixels
    pub fn ship_size(&self) -> f32 {
        self.tuning.size
    }

    /// The playfield being simulated
    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skiff_math::Vec2;

    fn sim() -> SimulationSystem {
        SimulationSystem::new(&ShipConfig::default(), 800.0, 450.0)
    }

    #[test]
    fn test_ship_starts_centered_at_rest() {
        let sim = sim();
        assert_eq!(sim.ship().position, Vec2::new(400.0, 225.0));
        assert!(sim.ship().at_rest());
    }

    #[test]
    fn test_update_with_thrust_moves_ship() {
        let mut sim = sim();
        std::thread::sleep(std::time::Duration::from_millis(5));

        let input = ShipInput {
            thrust: true,
            turn: 0.0,
        };
        let dt = sim.update(input);

        assert!(dt > 0.0);
        assert!(!sim.ship().at_rest());
        // Thrusting straight up from center
        assert!(sim.ship().position.y < 225.0);
    }

    #[test]
    fn test_dt_capped() {
        let mut sim = SimulationSystem::new(&ShipConfig::default(), 800.0, 450.0);
        // Fake a long stall
        sim.last_frame = Instant::now() - std::time::Duration::from_secs(5);

        let dt = sim.update(ShipInput::IDLE);
        assert!(dt <= 0.25);
    }

    #[test]
    fn test_reset_recenters_ship() {
        let mut sim = sim();
        std::thread::sleep(std::time::Duration::from_millis(5));
        sim.update(ShipInput {
            thrust: true,
            turn: 1.0,
        });

        sim.reset();

        assert_eq!(sim.ship().position, sim.playfield().center());
        assert!(sim.ship().at_rest());
        assert_eq!(sim.ship().rotation, 0.0);
    }

    #[test]
    fn test_margin_follows_ship_size() {
        let config = ShipConfig {
            size: 32.0,
            ..ShipConfig::default()
        };
        let sim = SimulationSystem::new(&config, 800.0, 450.0);
        assert_eq!(sim.playfield().margin, 32.0);
        assert_eq!(sim.ship_size(), 32.0);
    }
}
