//! Surface solar flux from top-of-atmosphere flux, air column, and geometry.
//!
//! Axis tilt is in degrees. Latitude and longitude are in degrees for a
//! rotating planet, but a tidally locked planet passes them to `cos` as-is.

use crate::constants::{EPSILON_AIR, EPSILON_WATER, TWO_OVER_PI};

/// Fraction of top-of-atmosphere flux that survives the air column,
/// `10^(-eps_air · P)`.
pub fn atmospheric_transmission(pressure_kpa: f64) -> f64 {
    10f64.powf(-EPSILON_AIR * pressure_kpa)
}

/// Annual mean solar flux reaching the ground, in W/m².
///
/// A tidally locked planet has a fixed substellar point at (0, 0) and the
/// flux falls off as `cos(lat) · clip(cos(lon), 0, 1)` with the raw angle
/// values; the validated reference outputs were produced this way. A
/// rotating planet is averaged over the two solstice geometries given by
/// its axis tilt.
pub fn surface_solar_flux(
    toa_flux_wpm2: f64,
    pressure_kpa: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    axis_tilt_deg: f64,
    tidal_lock: bool,
) -> f64 {
    let max_flux = toa_flux_wpm2 * atmospheric_transmission(pressure_kpa);
    if tidal_lock {
        max_flux
            * TWO_OVER_PI
            * latitude_deg.cos()
            * longitude_deg.cos().clamp(0.0, 1.0)
    } else {
        let summer = (latitude_deg - axis_tilt_deg).to_radians().cos().clamp(0.0, 1.0);
        let winter = (latitude_deg + axis_tilt_deg).to_radians().cos().clamp(0.0, 1.0);
        max_flux * TWO_OVER_PI * 0.5 * (summer + winter)
    }
}

/// Solar flux reaching the sea floor at `altitude_m` (negative below sea level).
/// Only meaningful for `altitude_m <= 0`.
pub fn benthic_solar_flux(solar_flux_wpm2: f64, altitude_m: f64) -> f64 {
    solar_flux_wpm2 * 10f64.powf(EPSILON_WATER * altitude_m)
}
