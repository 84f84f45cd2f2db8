//! Barometric pressure, vapor pressure, and the boiling point of water.

use crate::constants::{
    AIR_MOLAR_MASS, BOILING_HIGH_PRESSURE_COEFFS, BOILING_LOW_PRESSURE_COEFFS, CELSIUS_TO_KELVIN,
    GAS_CONSTANT, MAGNUS_A_KPA, MAGNUS_B, MAGNUS_C_C, SEA_LEVEL_PRESSURE_KPA,
};

/// Air pressure at a height above sea level via the barometric formula
/// `P0 · exp(-M·g·h / (R·T))`.
///
/// Negative heights are clamped to zero: underwater points see sea-level
/// pressure rather than an extrapolated one.
pub fn pressure_at_altitude(
    gravity_m_per_s2: f64,
    sealevel_pressure_kpa: f64,
    mean_temp_c: f64,
    height_above_sealevel_m: f64,
) -> f64 {
    let height_m = height_above_sealevel_m.max(0.0);
    let kelvin = mean_temp_c + CELSIUS_TO_KELVIN;
    let exponent = -(AIR_MOLAR_MASS * gravity_m_per_s2 * height_m) / (GAS_CONSTANT * kelvin);
    sealevel_pressure_kpa * exponent.exp()
}

/// Saturation vapor pressure of water over a flat surface (Magnus formula), in kPa.
pub fn vapor_pressure(temp_c: f64) -> f64 {
    MAGNUS_A_KPA * ((MAGNUS_B * temp_c) / (temp_c + MAGNUS_C_C)).exp()
}

/// Boiling point of water in °C at the given pressure.
///
/// Empirical cubic fits in `ln(mbar)`; one below sea-level pressure and one
/// at or above it. The two fits do not meet at 101.3 kPa: the low-pressure
/// branch ends near 109.8 °C and the high-pressure branch starts near
/// 99.7 °C.
pub fn boiling_point(pressure_kpa: f64) -> f64 {
    let ln_mbar = (pressure_kpa * 10.0).ln();
    if pressure_kpa < SEA_LEVEL_PRESSURE_KPA {
        polyval(&BOILING_LOW_PRESSURE_COEFFS, ln_mbar)
    } else {
        polyval(&BOILING_HIGH_PRESSURE_COEFFS, ln_mbar)
    }
}

/// Horner evaluation, coefficients highest degree first.
fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}
