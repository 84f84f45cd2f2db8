//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Platform config directory for the calculator, e.g. `~/.config/biomecalc`.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("biomecalc"))
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet used by the `planet` and `grid` commands.
    pub planet: PlanetConfig,
    /// Raster classification settings.
    pub batch: BatchConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Bulk and orbital properties of the planet being classified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    pub mass_kg: f64,
    pub mean_radius_km: f64,
    /// Top-of-atmosphere stellar flux in W/m².
    pub toa_solar_flux_wpm2: f64,
    pub axis_tilt_deg: f64,
    pub tidal_lock: bool,
    /// Mean sea-level air pressure.
    pub mean_surface_pressure_kpa: f64,
    /// Include biomes not found on Earth.
    pub exoplanet: bool,
}

/// Raster classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BatchConfig {
    /// Worker threads (0 = one per logical CPU).
    pub threads: usize,
    /// Rasters with fewer points than this are classified on one thread.
    pub min_points_per_task: usize,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for JSON log files in debug builds.
    pub log_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            mass_kg: 5.972e24,
            mean_radius_km: 6371.0,
            toa_solar_flux_wpm2: 1373.0,
            axis_tilt_deg: 23.0,
            tidal_lock: false,
            mean_surface_pressure_kpa: 101.3,
            exoplanet: false,
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            min_points_per_task: 1024,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

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

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
