//! Physical constants and fitted coefficients shared by the derivations.
//!
//! Values are SI unless the name says otherwise (`_KPA`, `_C`, `_KM`).

/// Newtonian gravitational constant, N·m²/kg².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Molar mass of dry air, kg/mol.
pub const AIR_MOLAR_MASS: f64 = 0.02897;

/// Universal gas constant, J/(K·mol).
pub const GAS_CONSTANT: f64 = 8.31451;

/// Offset between degrees Celsius and kelvin.
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Earth's mean sea-level pressure, kPa. Also the switch-over point between
/// the two boiling-point fits.
pub const SEA_LEVEL_PRESSURE_KPA: f64 = 101.3;

/// Atmospheric absorption per kPa of air column:
/// `1360 = 1371 * 10^(-eps * 101)`.
pub const EPSILON_AIR: f64 = 3.46391e-5;

/// Water absorption per meter of depth (1% transmission at 150 m).
pub const EPSILON_WATER: f64 = 0.013333;

/// Geometric insolation multiplier.
///
/// Numerically `0.5 * π`, not `2 / π`; the validated reference dataset was
/// produced with this value, so it is kept as-is.
pub const TWO_OVER_PI: f64 = 0.5 * std::f64::consts::PI;

/// Boiling-point fit below sea-level pressure, highest degree first,
/// evaluated on `ln(pressure in mbar)`.
pub const BOILING_LOW_PRESSURE_COEFFS: [f64; 4] = [0.051769, 0.65545, 10.387, -10.619];

/// Boiling-point fit at or above sea-level pressure, highest degree first,
/// evaluated on `ln(pressure in mbar)`.
pub const BOILING_HIGH_PRESSURE_COEFFS: [f64; 4] = [0.47092, -8.2481, 75.520, -183.98];

/// Magnus formula coefficients: `A * exp(B * T / (T + C))` with `T` in °C.
pub const MAGNUS_A_KPA: f64 = 0.61094;
/// See [`MAGNUS_A_KPA`].
pub const MAGNUS_B: f64 = 17.625;
/// See [`MAGNUS_A_KPA`].
pub const MAGNUS_C_C: f64 = 243.04;

/// Kilograms per metric tonne.
pub const KG_PER_TONNE: f64 = 1000.0;

/// Meters per kilometer.
pub const METERS_PER_KILOMETER: f64 = 1000.0;
