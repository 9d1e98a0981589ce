//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level demo configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Volumetric rendering settings.
    pub render: RenderConfig,
    /// Temporal accumulation settings.
    pub temporal: TemporalConfig,
    /// Preset cycling, time-of-day and weather settings.
    pub cycle: CycleConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Volumetric rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Output resolution width in pixels.
    pub width: u32,
    /// Output resolution height in pixels.
    pub height: u32,
    /// Fraction of output resolution the volumetric pass renders at,
    /// `(0.5, 1.0]`.
    pub render_scale: f32,
    /// Ray-march sample budget per pixel.
    pub step_count: u32,
    /// Starting preset by name (e.g. "LightClouds").
    pub preset: String,
}

/// Temporal accumulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemporalConfig {
    /// Enable history blending.
    pub enabled: bool,
    /// History blend weight in `[0, 1]`.
    pub blend_factor: f32,
}

/// Preset cycling, day clock and weather configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CycleConfig {
    /// Step through the preset tour automatically.
    pub auto_cycle: bool,
    /// Seconds between automatic preset changes.
    pub cycle_interval: f32,
    /// Blend preset changes instead of snapping.
    pub smooth_transition: bool,
    /// Blend duration in seconds.
    pub transition_duration: f32,
    /// Drive parameters from a simulated time of day.
    pub simulate_time_of_day: bool,
    /// Real seconds one simulated day takes.
    pub day_duration: f32,
    /// Starting hour of day, `[0, 24)`.
    pub start_hours: f32,
    /// Roll random weather changes.
    pub dynamic_weather: bool,
    /// Seconds between weather rolls.
    pub weather_change_interval: f32,
    /// Seed for the weather RNG.
    pub weather_seed: u64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Renderer debug mode index (0 = off).
    pub debug_mode: u32,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            render_scale: 0.75,
            step_count: 256,
            preset: "LightClouds".to_string(),
        }
    }
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            blend_factor: 0.9,
        }
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            auto_cycle: false,
            cycle_interval: 10.0,
            smooth_transition: true,
            transition_duration: 3.0,
            simulate_time_of_day: false,
            day_duration: 120.0,
            start_hours: 12.0,
            dynamic_weather: false,
            weather_change_interval: 30.0,
            weather_seed: 42,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            debug_mode: 0,
            log_level: "info".to_string(),
        }
    }
}

/// Default per-user config directory, e.g. `~/.config/stratus`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("stratus"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|source| {
                ConfigError::Read {
                    path: config_path.clone(),
                    source,
                }
            })?;
            let config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?;
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
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents =
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                path: config_path.clone(),
                source,
            })?;
        let new_config: Config = ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.clone(),
            source,
        })?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
