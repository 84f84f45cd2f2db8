//! Configuration for the biome calculator.
//!
//! Settings persist to disk as a RON file and can be overridden per run
//! from the command line.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Command, PlanetOverrides};
pub use config::{
    BatchConfig, CONFIG_FILE_NAME, Config, DebugConfig, PlanetConfig, default_config_dir,
};
pub use error::ConfigError;
