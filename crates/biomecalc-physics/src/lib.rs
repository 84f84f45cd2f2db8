//! Physical derivations that feed the biome classifier: surface gravity,
//! barometric pressure, insolation, and the boiling point of water.
//!
//! Everything here is a pure function of its arguments.

pub mod constants;

mod atmosphere;
mod body;
mod insolation;

pub use atmosphere::{boiling_point, pressure_at_altitude, vapor_pressure};
pub use body::{density_tonnes_per_m3, gravity, sphere_volume};
pub use insolation::{atmospheric_transmission, benthic_solar_flux, surface_solar_flux};
