//! Keyboard input handling for Skiff
//!
//! Translates held-key state into per-frame ship control input.

mod ship_controller;

pub use ship_controller::ShipController;
