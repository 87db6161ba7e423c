//! Ship simulation for Skiff
//!
//! This crate provides the per-frame kinematics of the player ship:
//! - Thrust with a speed cap and drag-to-rest coasting
//! - Turning at a fixed rate
//! - Explicit Euler integration
//! - Toroidal playfield wrapping

pub mod playfield;
pub mod ship;
pub mod tuning;

// Re-export commonly used types
pub use playfield::Playfield;
pub use ship::{ShipBody, ShipInput};
pub use tuning::ShipTuning;
