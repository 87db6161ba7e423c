//! Skiff application library
//!
//! Exposes the app-level modules (configuration, input mapping, systems) so
//! integration tests can exercise them outside the binary.

pub mod config;
pub mod input;
pub mod systems;
