//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SKIFF_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use skiff_sim::ShipTuning;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Ship configuration
    #[serde(default)]
    pub ship: ShipConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SKIFF_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // SKIFF_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SKIFF_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Skiff".to_string(),
            width: 800,
            height: 450,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Ship configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipConfig {
    /// Initial heading in degrees (0 = up)
    pub start_rotation: f32,
    /// Maximum speed in pixels per second
    pub max_speed: f32,
    /// Thrust acceleration in pixels per second squared
    pub acceleration: f32,
    /// Per-frame coasting drag factor in (0, 1]
    pub drag: f32,
    /// Rotation speed in degrees per second
    pub turn_rate: f32,
    /// Hull scale in pixels
    pub size: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        let tuning = ShipTuning::default();
        Self {
            start_rotation: 0.0,
            max_speed: tuning.max_speed,
            acceleration: tuning.acceleration,
            drag: tuning.drag,
            turn_rate: tuning.turn_rate,
            size: tuning.size,
        }
    }
}

impl ShipConfig {
    /// Convert the gameplay fields into sim tuning
    pub fn to_tuning(&self) -> ShipTuning {
        ShipTuning {
            max_speed: self.max_speed,
            acceleration: self.acceleration,
            drag: self.drag,
            turn_rate: self.turn_rate,
            size: self.size,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Hull line color [r, g, b, a]
    pub hull_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            hull_color: [0.96, 0.96, 0.96, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Show position/speed in the window title
    pub show_overlay: bool,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_overlay: false,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
