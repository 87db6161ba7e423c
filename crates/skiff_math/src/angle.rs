//! Angle conversion and normalization helpers
//!
//! Rotations in the sim are stored in degrees (they come straight from
//! config and are human-readable in the title HUD); rendering math wants
//! radians.

/// Degrees to radians factor
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Radians to degrees factor
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Normalize an angle in degrees into `[0, 360)`
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}
