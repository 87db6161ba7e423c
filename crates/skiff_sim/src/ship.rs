//! Player ship kinematics
//!
//! One step per frame: turn, thrust or coast, integrate, wrap. Thrust
//! accelerates along the facing direction up to a speed cap; releasing
//! thrust bleeds speed off with multiplicative drag until the ship rests.

use crate::playfield::Playfield;
use crate::tuning::ShipTuning;
use skiff_math::{wrap_degrees, Vec2, DEG_TO_RAD};

/// Speeds below this are snapped to zero so drag actually stops the ship
const REST_SPEED: f32 = 0.01;

/// Per-frame control input for the ship
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShipInput {
    /// Whether the thrust key is held
    pub thrust: bool,
    /// Turn direction in [-1, 1] (positive turns clockwise on screen)
    pub turn: f32,
}

impl ShipInput {
    /// Input with nothing held
    pub const IDLE: Self = Self {
        thrust: false,
        turn: 0.0,
    };
}

/// Kinematic state of the player ship
#[derive(Debug, Clone, PartialEq)]
pub struct ShipBody {
    /// Position in pixels
    pub position: Vec2,
    /// Velocity in pixels per second
    pub velocity: Vec2,
    /// Heading in degrees, normalized to [0, 360); 0 points up the screen
    pub rotation: f32,
}

impl ShipBody {
    /// Create a ship at rest at the given position
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// Create a ship at rest with an initial heading in degrees
    pub fn with_rotation(position: Vec2, rotation: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            rotation: wrap_degrees(rotation),
        }
    }

    /// Unit vector the nose points along
    pub fn facing(&self) -> Vec2 {
        Vec2::UP.rotated(self.rotation * DEG_TO_RAD)
    }

    /// Current speed in pixels per second
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Whether the ship has drifted to rest
    pub fn at_rest(&self) -> bool {
        self.velocity == Vec2::ZERO
    }

    /// Advance the ship by `dt` seconds.
    ///
    /// Order matters and follows the classic arcade loop:
    /// 1. Turn at `turn_rate`, keeping rotation in [0, 360).
    /// 2. Thrust along the (new) facing, clamped to `max_speed`; or coast
    ///    with multiplicative drag, snapping to rest below a small epsilon.
    /// 3. Integrate position with explicit Euler.
    /// 4. Wrap across the playfield edges.
    pub fn step(&mut self, input: ShipInput, dt: f32, tuning: &ShipTuning, field: &Playfield) {
        // 1. Turn
        self.rotation = wrap_degrees(self.rotation + input.turn * tuning.turn_rate * dt);

        // 2. Thrust or coast
        if input.thrust {
            self.velocity += self.facing() * tuning.acceleration * dt;
            self.velocity = self.velocity.clamped_length(tuning.max_speed);
        } else if !self.at_rest() {
            self.velocity *= tuning.drag;
            if self.speed() < REST_SPEED {
                self.velocity = Vec2::ZERO;
            }
        }

        // 3. Integrate
        self.position += self.velocity * dt;

        // 4. Wrap
        self.position = field.wrap(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const EPSILON: f32 = 0.001;

    fn field() -> Playfield {
        Playfield::new(800.0, 450.0, 20.0)
    }

    fn ship() -> ShipBody {
        ShipBody::new(field().center())
    }

    fn thrust() -> ShipInput {
        ShipInput {
            thrust: true,
            turn: 0.0,
        }
    }

    #[test]
    fn test_new_ship_at_rest() {
        let ship = ship();
        assert_eq!(ship.velocity, Vec2::ZERO);
        assert_eq!(ship.rotation, 0.0);
        assert!(ship.at_rest());
    }

    #[test]
    fn test_facing_defaults_up() {
        let ship = ship();
        let facing = ship.facing();
        assert!(facing.x.abs() < EPSILON);
        assert!((facing.y + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_facing_quarter_turn() {
        let ship = ShipBody::with_rotation(Vec2::ZERO, 90.0);
        let facing = ship.facing();
        // 90 degrees turns the nose to screen-right
        assert!((facing.x - 1.0).abs() < EPSILON);
        assert!(facing.y.abs() < EPSILON);
    }

    #[test]
    fn test_thrust_accelerates_along_facing() {
        let tuning = ShipTuning::default();
        let mut ship = ship();

        ship.step(thrust(), DT, &tuning, &field());

        // Facing up: velocity should grow in -Y only
        assert!(ship.velocity.y < 0.0);
        assert!(ship.velocity.x.abs() < EPSILON);
        assert!((ship.speed() - tuning.acceleration * DT).abs() < EPSILON);
    }

    #[test]
    fn test_speed_never_exceeds_cap_while_thrusting() {
        let tuning = ShipTuning::default();
        let f = field();
        let mut ship = ship();

        // Thrust long enough to saturate
        for _ in 0..600 {
            ship.step(thrust(), DT, &tuning, &f);
            assert!(ship.speed() <= tuning.max_speed + EPSILON);
        }
        assert!((ship.speed() - tuning.max_speed).abs() < EPSILON);
    }

    #[test]
    fn test_drag_brings_ship_to_rest() {
        let tuning = ShipTuning::default();
        let f = field();
        let mut ship = ship();

        for _ in 0..60 {
            ship.step(thrust(), DT, &tuning, &f);
        }
        assert!(ship.speed() > 0.0);

        // Coast; 0.95^n decay reaches the rest snap within a few seconds
        for _ in 0..600 {
            ship.step(ShipInput::IDLE, DT, &tuning, &f);
        }
        assert!(ship.at_rest());
    }

    #[test]
    fn test_drag_monotonically_decays() {
        let tuning = ShipTuning::default();
        let f = field();
        let mut ship = ship();
        ship.velocity = Vec2::new(100.0, 0.0);

        let mut prev = ship.speed();
        for _ in 0..30 {
            ship.step(ShipInput::IDLE, DT, &tuning, &f);
            assert!(ship.speed() < prev);
            prev = ship.speed();
        }
    }

    #[test]
    fn test_turn_right() {
        let tuning = ShipTuning::default();
        let mut ship = ship();
        let input = ShipInput {
            thrust: false,
            turn: 1.0,
        };

        ship.step(input, DT, &tuning, &field());

        // 360 deg/s for one 60th of a second
        assert!((ship.rotation - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_turn_left_wraps_rotation() {
        let tuning = ShipTuning::default();
        let mut ship = ship();
        let input = ShipInput {
            thrust: false,
            turn: -1.0,
        };

        ship.step(input, DT, &tuning, &field());

        assert!(ship.rotation >= 0.0 && ship.rotation < 360.0);
        assert!((ship.rotation - 354.0).abs() < EPSILON);
    }

    #[test]
    fn test_position_integrates_velocity() {
        let tuning = ShipTuning::default();
        let f = field();
        let mut ship = ship();
        ship.velocity = Vec2::new(60.0, 0.0);

        let start_x = ship.position.x;
        ship.step(ShipInput::IDLE, 1.0 / 60.0, &tuning, &f);

        // One frame of 60 px/s (drag applies before integration)
        let expected = start_x + 60.0 * tuning.drag / 60.0;
        assert!((ship.position.x - expected).abs() < EPSILON);
    }

    #[test]
    fn test_wraps_while_coasting() {
        let tuning = ShipTuning::default();
        let f = field();
        let mut ship = ShipBody::new(Vec2::new(819.0, 100.0));
        ship.velocity = Vec2::new(200.0, 0.0);

        ship.step(ShipInput::IDLE, DT, &tuning, &f);

        // Crossed the right margin; re-enters on the left
        assert_eq!(ship.position.x, -f.margin);
        assert!(f.contains(ship.position));
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let tuning = ShipTuning::default();
        let f = field();
        let mut ship = ship();
        ship.velocity = Vec2::new(50.0, 50.0);
        let before = ship.clone();

        ship.step(thrust(), 0.0, &tuning, &f);

        assert_eq!(ship.position, before.position);
        assert_eq!(ship.rotation, before.rotation);
    }

    #[test]
    fn test_thrust_while_turning_curves_path() {
        let tuning = ShipTuning::default();
        let f = field();
        let mut ship = ship();
        let input = ShipInput {
            thrust: true,
            turn: 1.0,
        };

        for _ in 0..30 {
            ship.step(input, DT, &tuning, &f);
        }

        // Half a second at 360 deg/s has swept the nose through 180 degrees,
        // so velocity picked up components on both axes
        assert!(ship.velocity.x.abs() > 0.0);
        assert!(ship.velocity.y.abs() > 0.0);
    }
}
