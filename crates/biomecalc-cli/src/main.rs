//! The `biomecalc` command-line entry point.

mod describe;
mod error;
mod grid;

use std::path::PathBuf;
use std::process::ExitCode;

use biomecalc_classifier::{Biome, Planet, RasterClassifier, classify};
use biomecalc_config::{CliArgs, Command, Config, PlanetConfig, default_config_dir};
use clap::Parser;
use tracing::debug;

use crate::error::CliError;
use crate::grid::GridInput;

fn planet_from_config(planet: &PlanetConfig) -> Planet {
    Planet::EARTH
        .with_mass_kg(planet.mass_kg)
        .with_mean_radius_km(planet.mean_radius_km)
        .with_toa_solar_flux_wpm2(planet.toa_solar_flux_wpm2)
        .with_axis_tilt_deg(planet.axis_tilt_deg)
        .with_tidal_lock(planet.tidal_lock)
        .with_mean_surface_pressure_kpa(planet.mean_surface_pressure_kpa)
        .with_exoplanet(planet.exoplanet)
}

fn print_biome(biome: Biome) {
    println!("{} {} ({})", biome.code(), biome, biome.common_name());
}

fn run(command: Command, config: &Config) -> Result<(), CliError> {
    match command {
        Command::Classify {
            solar_flux,
            pressure,
            altitude,
            temp,
            temp_var,
            precip,
        } => print_biome(classify(solar_flux, pressure, altitude, temp, temp_var, precip)),

        Command::Planet {
            altitude,
            temp,
            temp_var,
            precip,
            latitude,
            longitude,
            ..
        } => {
            let planet = planet_from_config(&config.planet);
            debug!(?planet, "classifying point on planet");
            print_biome(planet.classify(altitude, temp, temp_var, precip, latitude, longitude));
        }

        Command::Grid { input, icons, .. } => {
            let json = std::fs::read_to_string(&input).map_err(|source| CliError::ReadInput {
                path: input.clone(),
                source,
            })?;
            let planet = planet_from_config(&config.planet);
            let classifier =
                RasterClassifier::new(config.batch.threads, config.batch.min_points_per_task)?;
            debug!(threads = classifier.threads(), input = %input.display(), "classifying grid");
            let output = GridInput::from_json(&json)?.classify(
                &classifier,
                planet.surface_gravity(),
                planet.mean_surface_pressure_kpa,
                planet.exoplanet,
                icons,
            )?;
            println!("{}", serde_json::to_string(&output)?);
        }

        Command::Describe { biome: Some(query) } => {
            println!("{}", describe::details(describe::lookup(&query)?));
        }

        Command::Describe { biome: None } => {
            println!("{}", describe::table_header());
            for biome in Biome::ALL {
                println!("{}", describe::table_row(biome));
            }
        }
    }
    Ok(())
}

/// Loads or creates the config, then applies CLI overrides. An unreadable
/// config file falls back to defaults; a missing config directory is fatal.
fn load_config(args: &CliArgs) -> Result<(PathBuf, Config), CliError> {
    let config_dir = match &args.config {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(args);
    Ok((config_dir, config))
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let (config_dir, config) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_dir = config
        .debug
        .log_dir
        .clone()
        .unwrap_or_else(|| config_dir.join("logs"));
    biomecalc_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_earth() {
        assert_eq!(planet_from_config(&PlanetConfig::default()), Planet::EARTH);
    }

    #[test]
    fn test_overridden_planet() {
        let mut config = Config::default();
        let args = CliArgs::parse_from([
            "biomecalc",
            "--exoplanet",
            "true",
            "grid",
            "cells.json",
            "--mass-kg",
            "2e30",
        ]);
        config.apply_cli_overrides(&args);
        let planet = planet_from_config(&config.planet);
        assert!(planet.exoplanet);
        assert_eq!(planet.classify(100.0, 20.0, 10.0, 800.0, 0.0, 0.0), Biome::Star);
    }

    #[test]
    fn test_load_config_creates_file_and_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config_arg = dir.path().to_string_lossy().into_owned();
        let args = CliArgs::parse_from(["biomecalc", "--config", &config_arg, "--threads", "2", "describe"]);

        let (config_dir, config) = load_config(&args).unwrap();
        assert_eq!(config_dir, dir.path());
        assert_eq!(config.batch.threads, 2);
        assert!(dir.path().join(biomecalc_config::CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(biomecalc_config::CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let config_arg = dir.path().to_string_lossy().into_owned();
        let args = CliArgs::parse_from(["biomecalc", "--config", &config_arg, "describe"]);

        let (_, config) = load_config(&args).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_errors_stop_the_command() {
        let err = CliError::from(biomecalc_config::ConfigError::NoConfigDir);
        assert!(matches!(err, CliError::Config(_)));
        assert!(!err.to_string().is_empty());
    }
}
