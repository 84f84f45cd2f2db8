//! Planetary context and whole-body classification.

use biomecalc_physics::constants::METERS_PER_KILOMETER;
use biomecalc_physics::{density_tonnes_per_m3, gravity, pressure_at_altitude, surface_solar_flux};
use serde::{Deserialize, Serialize};

use crate::biome::Biome;
use crate::classifier::classify_on_planet_surface;

/// Bodies at least this dense have collapsed past a neutron star.
pub const MAX_NEUTRON_STAR_DENSITY_TPM3: f64 = 2e16;
pub const MIN_NEUTRON_STAR_DENSITY_TPM3: f64 = 1e14;
/// Smallest red dwarf.
pub const RED_DWARF_MIN_MASS_KG: f64 = 1.2819e29;

/// Bulk and orbital properties of a planet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub mass_kg: f64,
    pub mean_radius_km: f64,
    /// Top-of-atmosphere stellar flux.
    pub toa_solar_flux_wpm2: f64,
    pub axis_tilt_deg: f64,
    pub tidal_lock: bool,
    /// Mean air pressure at sea level.
    pub mean_surface_pressure_kpa: f64,
    /// Enables non-Earthly biomes.
    pub exoplanet: bool,
}

impl Default for Planet {
    fn default() -> Self {
        Self::EARTH
    }
}

impl Planet {
    pub const EARTH: Planet = Planet {
        mass_kg: 5.972e24,
        mean_radius_km: 6371.0,
        toa_solar_flux_wpm2: 1373.0,
        axis_tilt_deg: 23.0,
        tidal_lock: false,
        mean_surface_pressure_kpa: 101.3,
        exoplanet: false,
    };

    pub fn with_mass_kg(mut self, mass_kg: f64) -> Self {
        self.mass_kg = mass_kg;
        self
    }

    pub fn with_mean_radius_km(mut self, mean_radius_km: f64) -> Self {
        self.mean_radius_km = mean_radius_km;
        self
    }

    pub fn with_toa_solar_flux_wpm2(mut self, toa_solar_flux_wpm2: f64) -> Self {
        self.toa_solar_flux_wpm2 = toa_solar_flux_wpm2;
        self
    }

    pub fn with_axis_tilt_deg(mut self, axis_tilt_deg: f64) -> Self {
        self.axis_tilt_deg = axis_tilt_deg;
        self
    }

    pub fn with_tidal_lock(mut self, tidal_lock: bool) -> Self {
        self.tidal_lock = tidal_lock;
        self
    }

    pub fn with_mean_surface_pressure_kpa(mut self, mean_surface_pressure_kpa: f64) -> Self {
        self.mean_surface_pressure_kpa = mean_surface_pressure_kpa;
        self
    }

    pub fn with_exoplanet(mut self, exoplanet: bool) -> Self {
        self.exoplanet = exoplanet;
        self
    }

    /// Surface gravity at sea level.
    pub fn surface_gravity(&self) -> f64 {
        gravity(self.mass_kg, self.mean_radius_km * METERS_PER_KILOMETER)
    }

    /// Mean density of the body, in tonnes/m³.
    pub fn density_tonnes_per_m3(&self) -> f64 {
        density_tonnes_per_m3(self.mass_kg, self.mean_radius_km * METERS_PER_KILOMETER)
    }

    /// See [`classify_on_planet`].
    #[allow(clippy::too_many_arguments)]
    pub fn classify(
        &self,
        altitude_m: f64,
        mean_temp_c: f64,
        temp_var_c: f64,
        annual_precip_mm: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Biome {
        classify_on_planet(
            self,
            altitude_m,
            mean_temp_c,
            temp_var_c,
            annual_precip_mm,
            latitude_deg,
            longitude_deg,
        )
    }
}

/// Whole-body checks for exoplanet mode: black holes, neutron stars, stars.
fn body_override(mass_kg: f64, density: f64) -> Option<Biome> {
    if density >= MAX_NEUTRON_STAR_DENSITY_TPM3 {
        Some(Biome::EventHorizon)
    } else if density >= MIN_NEUTRON_STAR_DENSITY_TPM3 {
        Some(Biome::NeutronStar)
    } else if mass_kg >= RED_DWARF_MIN_MASS_KG {
        Some(Biome::Star)
    } else {
        None
    }
}

/// Classifies a point on `planet` from its altitude, climate, and position.
///
/// Gravity is evaluated at the point's own distance from the planet centre
/// (mean radius plus altitude), and surface solar flux is derived from the
/// planet's stellar flux, tilt, and rotation. In exoplanet mode the body
/// itself is checked first: a dense or massive enough body classifies as
/// [`Biome::EventHorizon`], [`Biome::NeutronStar`], or [`Biome::Star`]
/// regardless of local conditions.
///
/// The planet-wide inputs (mass, mean radius, top-of-atmosphere flux, axis
/// tilt, tidal lock, mean surface pressure, exoplanet mode) travel together
/// in a [`Planet`]; the remaining arguments describe the point.
///
/// ```
/// use biomecalc_classifier::{Biome, Planet, classify_on_planet};
///
/// let planet = Planet {
///     mass_kg: 5.972e24,
///     mean_radius_km: 6371.0,
///     toa_solar_flux_wpm2: 1373.0,
///     axis_tilt_deg: 23.0,
///     tidal_lock: true,
///     mean_surface_pressure_kpa: 101.3,
///     exoplanet: false,
/// };
/// let biome = classify_on_planet(&planet, -50.0, 25.0, 3.0, 0.0, 0.2, 0.1);
/// assert_eq!(biome, Biome::TropicalReef);
/// ```
pub fn classify_on_planet(
    planet: &Planet,
    altitude_m: f64,
    mean_temp_c: f64,
    temp_var_c: f64,
    annual_precip_mm: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Biome {
    let radius_m = planet.mean_radius_km * METERS_PER_KILOMETER + altitude_m;
    let gravity_m_per_s2 = gravity(planet.mass_kg, radius_m);
    let pressure_kpa = pressure_at_altitude(
        gravity_m_per_s2,
        planet.mean_surface_pressure_kpa,
        mean_temp_c,
        altitude_m,
    );
    let solar_flux_wpm2 = surface_solar_flux(
        planet.toa_solar_flux_wpm2,
        pressure_kpa,
        latitude_deg,
        longitude_deg,
        planet.axis_tilt_deg,
        planet.tidal_lock,
    );
    if planet.exoplanet {
        let density = density_tonnes_per_m3(planet.mass_kg, radius_m);
        if let Some(biome) = body_override(planet.mass_kg, density) {
            return biome;
        }
    }
    classify_on_planet_surface(
        gravity_m_per_s2,
        planet.mean_surface_pressure_kpa,
        solar_flux_wpm2,
        altitude_m,
        mean_temp_c,
        temp_var_c,
        annual_precip_mm,
        planet.exoplanet,
    )
}
