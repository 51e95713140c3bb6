//! Configuration structs with sensible defaults and RON persistence.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::body::{BodyConfig, MotionConfig, default_bodies};
use crate::error::ConfigError;

/// Accepted simulation speed levels.
pub const SPEED_RANGE: RangeInclusive<u8> = 1..=5;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Initial toggles and run length.
    pub simulation: SimulationConfig,
    /// Sphere tessellation.
    pub mesh: MeshConfig,
    /// Bodies in draw order.
    pub bodies: Vec<BodyConfig>,
    /// Key bindings.
    pub input: InputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Simulation toggles at startup and frame pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Self-rotation enabled at startup.
    pub rotation: bool,
    /// Orbital revolution enabled at startup.
    pub orbit: bool,
    /// Initial speed level, within [`SPEED_RANGE`].
    pub speed: u8,
    /// Number of frames to simulate (0 = run until interrupted).
    pub frames: u64,
    /// Target frame rate (0 = unpaced).
    pub target_fps: u32,
}

/// Subdivision counts shared by every body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// Longitude subdivisions (at least 3).
    pub sector_count: u32,
    /// Latitude subdivisions (at least 2).
    pub stack_count: u32,
}

/// Input configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Key name -> simulation event name (e.g. `"KeyQ": "toggle_rotation"`).
    pub keybindings: HashMap<String, String>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log a summary of every drawn body each frame.
    pub log_frames: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            mesh: MeshConfig::default(),
            bodies: default_bodies(),
            input: InputConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

// --- Default implementations ---

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rotation: true,
            orbit: false,
            speed: 1,
            frames: 600,
            target_fps: 60,
        }
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            sector_count: 36,
            stack_count: 18,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        let keybindings = [
            ("KeyQ", "toggle_rotation"),
            ("KeyE", "toggle_orbit"),
            ("ArrowUp", "speed_up"),
            ("ArrowDown", "speed_down"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { keybindings }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_frames: false,
        }
    }
}

// --- Validation ---

impl Config {
    /// Check ranges the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Validation(msg));

        if !SPEED_RANGE.contains(&self.simulation.speed) {
            return invalid(format!(
                "speed {} outside {}..={}",
                self.simulation.speed,
                SPEED_RANGE.start(),
                SPEED_RANGE.end()
            ));
        }
        if self.mesh.sector_count < 3 {
            return invalid(format!("sector_count {} < 3", self.mesh.sector_count));
        }
        if self.mesh.stack_count < 2 {
            return invalid(format!("stack_count {} < 2", self.mesh.stack_count));
        }
        for body in &self.bodies {
            if body.name.is_empty() {
                return invalid("body name must not be empty".to_string());
            }
            if !is_positive(body.scaling_factor) {
                return invalid(format!(
                    "body '{}': scaling_factor {} must be positive",
                    body.name, body.scaling_factor
                ));
            }
            if !is_positive(body.radius) {
                return invalid(format!(
                    "body '{}': radius {} must be positive",
                    body.name, body.radius
                ));
            }
            if body.motion == MotionConfig::Fixed && body.placement.is_some() {
                return invalid(format!(
                    "body '{}': fixed bodies stay at the origin and cannot have a placement",
                    body.name
                ));
            }
            if let MotionConfig::Orbiting { relative_rate, .. } = body.motion
                && !relative_rate.is_finite()
            {
                return invalid(format!("body '{}': relative_rate must be finite", body.name));
            }
        }
        Ok(())
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
