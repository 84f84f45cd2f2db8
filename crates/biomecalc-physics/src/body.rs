//! Bulk properties of a planetary body.

use crate::constants::{GRAVITATIONAL_CONSTANT, KG_PER_TONNE};

/// Newtonian surface gravity `G·M/r²`, in m/s².
pub fn gravity(planet_mass_kg: f64, radius_m: f64) -> f64 {
    GRAVITATIONAL_CONSTANT * planet_mass_kg / (radius_m * radius_m)
}

/// Volume of a sphere of the given radius, in m³.
pub fn sphere_volume(radius_m: f64) -> f64 {
    4.0 / 3.0 * std::f64::consts::PI * radius_m * radius_m * radius_m
}

/// Mean density of a spherical body, in tonnes/m³ (numerically g/cm³).
pub fn density_tonnes_per_m3(planet_mass_kg: f64, radius_m: f64) -> f64 {
    planet_mass_kg / KG_PER_TONNE / sphere_volume(radius_m)
}
