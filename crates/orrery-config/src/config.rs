//! Settings sections, their defaults, and `config.ron` persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level orrery configuration. Every section falls back to its defaults
/// when missing from the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub textures: TextureConfig,
    pub view: ViewConfig,
    pub input: InputConfig,
    pub debug: DebugConfig,
}

/// Orbital animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the random start angles. A fresh seed is drawn when unset.
    pub seed: Option<u64>,
    /// Normalizes angular speed into radians per tick.
    pub tick_scale: f64,
    /// Self-rotation per tick, in radians.
    pub rotation_rate: f64,
    /// Cloud overlay rotation per tick, in radians.
    pub cloud_rotation_rate: f64,
    /// Starting speed multiplier: one of 0.5, 1, 2 or 5.
    pub initial_speed: f64,
    /// Fixed simulation rate.
    pub tick_rate_hz: u32,
    /// Frames to run before exiting.
    pub frames: u32,
}

/// Texture synthesis settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextureConfig {
    /// Seed for scatter placement. A fresh seed is drawn when unset.
    pub seed: Option<u64>,
    /// Write every synthesized texture as PNG here when set.
    pub export_dir: Option<PathBuf>,
    pub star_count: u32,
}

/// Initial visibility and camera settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub show_labels: bool,
    pub show_orbits: bool,
    /// Default camera position, restored by a camera reset.
    pub camera_position: [f64; 3],
    /// Point the camera orbits and looks at.
    pub camera_target: [f64; 3],
    pub min_distance: f64,
    pub max_distance: f64,
    /// Segments per orbit path polyline.
    pub orbit_segments: usize,
}

/// Key bindings (key name -> command name).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub keybindings: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Default log filter when `RUST_LOG` is unset (e.g. "debug", "info").
    pub log_level: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_scale: 0.01,
            rotation_rate: 0.01,
            cloud_rotation_rate: 0.005,
            initial_speed: 1.0,
            tick_rate_hz: 60,
            frames: 600,
        }
    }
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            seed: None,
            export_dir: None,
            star_count: 5000,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            show_labels: false,
            show_orbits: true,
            camera_position: [0.0, 30.0, 80.0],
            camera_target: [0.0, 0.0, 0.0],
            min_distance: 10.0,
            max_distance: 200.0,
            orbit_segments: 100,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keybindings: HashMap::from([("Space".to_string(), "toggle_labels".to_string())]),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load `config.ron` from `config_dir`, writing a default one first if it
    /// does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE);
        if path.exists() {
            let config = Self::read(&path)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Write the config to `config_dir/config.ron`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let path = config_dir.join(CONFIG_FILE);
        let write_error = |source| ConfigError::WriteError {
            path: path.clone(),
            source,
        };
        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&path, serialized).map_err(write_error)?;
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }
}
