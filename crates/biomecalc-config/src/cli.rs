//! Command-line argument parsing for the biome calculator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::Config;

/// Biome calculator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "biomecalc", about = "Predicts biomes from climate and planet parameters")]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Worker threads for raster classification (0 = one per CPU).
    #[arg(long, global = true)]
    pub threads: Option<usize>,

    /// Include biomes not found on Earth.
    #[arg(long, global = true)]
    pub exoplanet: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Classify one point from local conditions (Earthly biomes only).
    Classify {
        /// Annual mean solar flux at the surface, W/m².
        #[arg(long, allow_negative_numbers = true)]
        solar_flux: f64,
        /// Local air pressure, kPa.
        #[arg(long, allow_negative_numbers = true)]
        pressure: f64,
        /// Meters above sea level (negative underwater).
        #[arg(long, allow_negative_numbers = true)]
        altitude: f64,
        /// Annual mean temperature, °C.
        #[arg(long, allow_negative_numbers = true)]
        temp: f64,
        /// Annual temperature swing (±), °C.
        #[arg(long, allow_negative_numbers = true)]
        temp_var: f64,
        /// Annual precipitation, mm of rain.
        #[arg(long, allow_negative_numbers = true)]
        precip: f64,
    },

    /// Classify one point on the configured planet.
    Planet {
        #[arg(long, allow_negative_numbers = true)]
        altitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        temp: f64,
        #[arg(long, allow_negative_numbers = true)]
        temp_var: f64,
        #[arg(long, allow_negative_numbers = true)]
        precip: f64,
        /// Degrees north.
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        /// Degrees east.
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
        #[command(flatten)]
        overrides: PlanetOverrides,
    },

    /// Classify a JSON raster of surface conditions on the configured planet.
    Grid {
        /// JSON file with `shape` and flat per-field arrays.
        input: PathBuf,
        /// Also print the biome map as icons (2-D rasters only).
        #[arg(long)]
        icons: bool,
        #[command(flatten)]
        overrides: PlanetOverrides,
    },

    /// Print the biome table, or one biome by name or code.
    Describe {
        biome: Option<String>,
    },
}

/// Per-run replacements for planet settings.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct PlanetOverrides {
    #[arg(long)]
    pub mass_kg: Option<f64>,
    #[arg(long)]
    pub radius_km: Option<f64>,
    /// Top-of-atmosphere stellar flux, W/m².
    #[arg(long)]
    pub toa_flux: Option<f64>,
    /// Axis tilt, degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub tilt: Option<f64>,
    #[arg(long)]
    pub tidal_lock: Option<bool>,
    /// Mean sea-level pressure, kPa.
    #[arg(long)]
    pub surface_pressure: Option<f64>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(threads) = args.threads {
            self.batch.threads = threads;
        }
        if let Some(exoplanet) = args.exoplanet {
            self.planet.exoplanet = exoplanet;
        }
        match &args.command {
            Command::Planet { overrides, .. } | Command::Grid { overrides, .. } => {
                self.apply_planet_overrides(overrides);
            }
            Command::Classify { .. } | Command::Describe { .. } => {}
        }
    }

    fn apply_planet_overrides(&mut self, overrides: &PlanetOverrides) {
        let planet = &mut self.planet;
        if let Some(mass) = overrides.mass_kg {
            planet.mass_kg = mass;
        }
        if let Some(radius) = overrides.radius_km {
            planet.mean_radius_km = radius;
        }
        if let Some(flux) = overrides.toa_flux {
            planet.toa_solar_flux_wpm2 = flux;
        }
        if let Some(tilt) = overrides.tilt {
            planet.axis_tilt_deg = tilt;
        }
        if let Some(lock) = overrides.tidal_lock {
            planet.tidal_lock = lock;
        }
        if let Some(pressure) = overrides.surface_pressure {
            planet.mean_surface_pressure_kpa = pressure;
        }
    }
}
