//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use skiff::config::AppConfig;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SKIFF_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("SKIFF_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_numeric() {
    std::env::set_var("SKIFF_SHIP__MAX_SPEED", "300.0");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.ship.max_speed, 300.0);
    std::env::remove_var("SKIFF_SHIP__MAX_SPEED");
}

#[test]
#[serial]
fn test_default_file_loading() {
    // Remove env vars to test file-based config
    std::env::remove_var("SKIFF_WINDOW__TITLE");
    std::env::remove_var("SKIFF_SHIP__MAX_SPEED");

    let config = AppConfig::load().unwrap();
    // config/default.toml pins the classic field size
    assert_eq!(config.window.width, 800);
    assert_eq!(config.window.height, 450);
    assert_eq!(config.ship.drag, 0.95);
}
