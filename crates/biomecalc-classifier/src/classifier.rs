//! Per-point biome classification.
//!
//! Earthly classification is a fixed pipeline of [`Layer`]s folded over a
//! starting [`Biome::Unknown`]; each layer may overwrite the result of the
//! ones before it. Exoplanet mode first runs a list of [`SurfaceOverride`]s
//! and returns the first one that matches.

use biomecalc_physics::{benthic_solar_flux, boiling_point, pressure_at_altitude, vapor_pressure};

use crate::biome::Biome;
use crate::reference::{feature_vector, nearest_class};

/// Above this much rain, land is always wetland.
pub const MAX_RAIN_LIMIT_MM: f64 = 6000.0;
/// Below this much rain, land is sand sea or barren.
pub const MIN_RAIN_LIMIT_MM: f64 = 110.0;
/// Jungle with a wider annual temperature swing is reclassified as grassland.
pub const JUNGLE_MAX_TEMP_VAR_C: f64 = 6.0;
/// Dry land warmer than this is sand sea rather than barren.
pub const SAND_SEA_MIN_TEMP_C: f64 = 15.0;
/// Minimum benthic flux for photosynthesis.
pub const PHOTIC_ZONE_MIN_SOLAR_FLUX_WPM2: f64 = 35.0;
/// Wave action prevents reefs and sea forests above this depth.
pub const WAVE_DISRUPTION_DEPTH_M: f64 = -6.0;
/// Non-photic water shallower than this is shallow ocean.
pub const CONTINENTAL_SHELF_DEPTH_M: f64 = -200.0;

/// Hotter than quartz boils.
pub const QUARTZ_BOILING_POINT_C: f64 = 2230.0;
/// Water is supercritical above this pressure.
pub const WATER_SUPERCRITICAL_PRESSURE_KPA: f64 = 22_000.0;
/// Pyroxene melts above this temperature.
pub const PYROXENE_MELTING_POINT_C: f64 = 1000.0;
/// Liquid nitrogen window: triple point to critical point.
pub const CRYOGEN_TRIPLE_TEMP_C: f64 = -210.0;
pub const CRYOGEN_CRITICAL_TEMP_C: f64 = -147.0;
pub const CRYOGEN_CRITICAL_PRESSURE_KPA: f64 = 3400.0;
/// Surface pressure range that keeps water liquid up to 30 °C without
/// supercritical gases.
pub const GOLDILOCKS_MIN_ATMOSPHERE_KPA: f64 = 4.0;
pub const GOLDILOCKS_MAX_ATMOSPHERE_KPA: f64 = 3350.0;

/// Environmental values for a single point, with the boiling point of water
/// at the local pressure precomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointConditions {
    pub solar_flux_wpm2: f64,
    pub pressure_kpa: f64,
    pub altitude_m: f64,
    pub mean_temp_c: f64,
    pub temp_var_c: f64,
    pub annual_precip_mm: f64,
    pub boiling_point_c: f64,
}

impl PointConditions {
    pub fn new(
        solar_flux_wpm2: f64,
        pressure_kpa: f64,
        altitude_m: f64,
        mean_temp_c: f64,
        temp_var_c: f64,
        annual_precip_mm: f64,
    ) -> Self {
        Self {
            solar_flux_wpm2,
            pressure_kpa,
            altitude_m,
            mean_temp_c,
            temp_var_c,
            annual_precip_mm,
            boiling_point_c: boiling_point(pressure_kpa),
        }
    }

    /// Land is strictly above sea level.
    pub fn is_terrestrial(&self) -> bool {
        self.altitude_m > 0.0
    }

    pub fn has_nan(&self) -> bool {
        [
            self.solar_flux_wpm2,
            self.pressure_kpa,
            self.altitude_m,
            self.mean_temp_c,
            self.temp_var_c,
            self.annual_precip_mm,
        ]
        .iter()
        .any(|v| v.is_nan())
    }
}

/// One step of the earthly pipeline.
pub type Layer = fn(Biome, &PointConditions) -> Biome;

/// Earthly layers, in precedence order (last write wins).
pub const EARTHLY_LAYERS: [Layer; 4] = [base_layer, dryland_layer, heat_layer, ice_layer];

/// Nearest-reference-point classification on land, depth zonation at sea.
pub fn base_layer(_: Biome, c: &PointConditions) -> Biome {
    if c.is_terrestrial() {
        if c.annual_precip_mm > MAX_RAIN_LIMIT_MM {
            return Biome::Wetland;
        }
        let features = feature_vector(
            c.solar_flux_wpm2,
            c.mean_temp_c,
            c.temp_var_c,
            c.annual_precip_mm,
        );
        match nearest_class(&features) {
            Biome::Jungle if c.temp_var_c > JUNGLE_MAX_TEMP_VAR_C => Biome::Grassland,
            class => class,
        }
    } else {
        let benthic = benthic_solar_flux(c.solar_flux_wpm2, c.altitude_m);
        if benthic >= PHOTIC_ZONE_MIN_SOLAR_FLUX_WPM2 {
            let below_waves = c.altitude_m < WAVE_DISRUPTION_DEPTH_M;
            let t = c.mean_temp_c;
            if below_waves && t > 5.0 && t < 20.0 {
                Biome::SeaForest
            } else if below_waves && (20.0..30.0).contains(&t) {
                Biome::TropicalReef
            } else {
                Biome::RockyShallows
            }
        } else if c.altitude_m > CONTINENTAL_SHELF_DEPTH_M {
            Biome::ShallowOcean
        } else {
            Biome::DeepOcean
        }
    }
}

/// Very dry land becomes sand sea or barren.
pub fn dryland_layer(biome: Biome, c: &PointConditions) -> Biome {
    if c.is_terrestrial() && c.annual_precip_mm < MIN_RAIN_LIMIT_MM {
        if c.mean_temp_c > SAND_SEA_MIN_TEMP_C {
            Biome::SandSea
        } else {
            Biome::Barren
        }
    } else {
        biome
    }
}

/// Land at or above boiling is bare rock; water above boiling boils.
pub fn heat_layer(biome: Biome, c: &PointConditions) -> Biome {
    if c.is_terrestrial() {
        if c.mean_temp_c >= c.boiling_point_c {
            return Biome::Moonscape;
        }
    } else if c.mean_temp_c > c.boiling_point_c {
        return Biome::BoilingSea;
    }
    biome
}

/// Anywhere below boiling that never rises above freezing is ice.
pub fn ice_layer(biome: Biome, c: &PointConditions) -> Biome {
    if c.mean_temp_c < c.boiling_point_c && c.mean_temp_c + c.temp_var_c < 0.0 {
        Biome::IceSheet
    } else {
        biome
    }
}

fn classify_earthly(c: &PointConditions) -> Biome {
    EARTHLY_LAYERS
        .iter()
        .fold(Biome::Unknown, |biome, layer| layer(biome, c))
}

/// Exoplanet-only check against the local conditions and the planet's mean
/// sea-level pressure. `None` means the check does not apply.
pub type SurfaceOverride = fn(&PointConditions, f64) -> Option<Biome>;

/// Exoplanet surface checks, in precedence order (first match wins).
pub const SURFACE_OVERRIDES: [SurfaceOverride; 6] = [
    stellar_surface,
    gas_giant,
    molten_surface,
    no_liquid_water,
    cryogen_sea,
    outside_goldilocks_window,
];

pub fn stellar_surface(c: &PointConditions, _: f64) -> Option<Biome> {
    (c.mean_temp_c > QUARTZ_BOILING_POINT_C).then_some(Biome::Star)
}

pub fn gas_giant(c: &PointConditions, _: f64) -> Option<Biome> {
    (c.pressure_kpa > WATER_SUPERCRITICAL_PRESSURE_KPA).then_some(Biome::GasGiant)
}

pub fn molten_surface(c: &PointConditions, _: f64) -> Option<Biome> {
    if c.mean_temp_c <= PYROXENE_MELTING_POINT_C {
        None
    } else if c.altitude_m <= 0.0 {
        Some(Biome::MagmaSea)
    } else {
        Some(Biome::Moonscape)
    }
}

/// Too little air to hold water at the warmest time of year, or too hot
/// for water even at the coldest.
pub fn no_liquid_water(c: &PointConditions, _: f64) -> Option<Biome> {
    let too_thin = c.pressure_kpa < vapor_pressure(c.mean_temp_c + c.temp_var_c);
    let too_hot = c.mean_temp_c - c.temp_var_c > c.boiling_point_c;
    (too_thin || too_hot).then_some(Biome::Moonscape)
}

/// Liquid nitrogen, like Pluto.
pub fn cryogen_sea(c: &PointConditions, _: f64) -> Option<Biome> {
    let t = c.mean_temp_c;
    let liquid = t > CRYOGEN_TRIPLE_TEMP_C
        && t < CRYOGEN_CRITICAL_TEMP_C
        && c.pressure_kpa < CRYOGEN_CRITICAL_PRESSURE_KPA
        && c.pressure_kpa > 1.6298e9 * (0.08898 * t).exp();
    if !liquid {
        None
    } else if c.altitude_m <= 0.0 {
        Some(Biome::CryogenSea)
    } else if c.annual_precip_mm > 0.0 {
        Some(Biome::IceSheet)
    } else {
        Some(Biome::Moonscape)
    }
}

pub fn outside_goldilocks_window(_: &PointConditions, mean_surface_pressure_kpa: f64) -> Option<Biome> {
    let window = GOLDILOCKS_MIN_ATMOSPHERE_KPA..=GOLDILOCKS_MAX_ATMOSPHERE_KPA;
    (!window.contains(&mean_surface_pressure_kpa)).then_some(Biome::Moonscape)
}

/// Classifies a point from local conditions using Earthly biomes only.
///
/// `pressure_kpa` is the local air pressure (not sea-level pressure) and
/// `altitude_m` is negative below sea level. Any NaN input yields
/// [`Biome::Unknown`].
pub fn classify(
    solar_flux_wpm2: f64,
    pressure_kpa: f64,
    altitude_m: f64,
    mean_temp_c: f64,
    temp_var_c: f64,
    annual_precip_mm: f64,
) -> Biome {
    let conditions = PointConditions::new(
        solar_flux_wpm2,
        pressure_kpa,
        altitude_m,
        mean_temp_c,
        temp_var_c,
        annual_precip_mm,
    );
    if conditions.has_nan() {
        return Biome::Unknown;
    }
    classify_earthly(&conditions)
}

/// Classifies a point given the planet's surface gravity and mean sea-level
/// pressure. Local pressure is derived from altitude (clamped to sea level
/// for underwater points).
///
/// With `exoplanet` set, extreme environments (stellar surfaces, gas giants,
/// magma and cryogen seas, airless rock) are checked before Earthly biomes.
#[allow(clippy::too_many_arguments)]
pub fn classify_on_planet_surface(
    gravity_m_per_s2: f64,
    mean_surface_pressure_kpa: f64,
    solar_flux_wpm2: f64,
    altitude_m: f64,
    mean_temp_c: f64,
    temp_var_c: f64,
    annual_precip_mm: f64,
    exoplanet: bool,
) -> Biome {
    if gravity_m_per_s2.is_nan() || mean_surface_pressure_kpa.is_nan() {
        return Biome::Unknown;
    }
    let pressure_kpa = pressure_at_altitude(
        gravity_m_per_s2,
        mean_surface_pressure_kpa,
        mean_temp_c,
        altitude_m.max(0.0),
    );
    let conditions = PointConditions::new(
        solar_flux_wpm2,
        pressure_kpa,
        altitude_m,
        mean_temp_c,
        temp_var_c,
        annual_precip_mm,
    );
    if conditions.has_nan() {
        return Biome::Unknown;
    }
    if exoplanet {
        if let Some(biome) = SURFACE_OVERRIDES
            .iter()
            .find_map(|check| check(&conditions, mean_surface_pressure_kpa))
        {
            return biome;
        }
    }
    classify_earthly(&conditions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water(flux: f64, altitude_m: f64, temp_c: f64) -> PointConditions {
        PointConditions::new(flux, 101.3, altitude_m, temp_c, 2.0, 0.0)
    }

    #[test]
    fn test_heavy_rain_is_wetland() {
        let c = PointConditions::new(300.0, 101.3, 50.0, 10.0, 10.0, 6000.5);
        assert_eq!(base_layer(Biome::Unknown, &c), Biome::Wetland);
    }

    #[test]
    fn test_jungle_with_wide_temp_swing_is_grassland() {
        // Sits on a jungle reference point apart from the temperature swing.
        let calm = PointConditions::new(793.8, 101.3, 20.0, 26.9, 2.6, 1393.0);
        assert_eq!(base_layer(Biome::Unknown, &calm), Biome::Jungle);
        let swinging = PointConditions { temp_var_c: 6.5, ..calm };
        assert_ne!(base_layer(Biome::Unknown, &swinging), Biome::Jungle);
    }

    #[test]
    fn test_photic_zone_boundary() {
        assert_eq!(base_layer(Biome::Unknown, &water(35.0, 0.0, 25.0)), Biome::RockyShallows);
        assert_eq!(base_layer(Biome::Unknown, &water(34.999, 0.0, 25.0)), Biome::ShallowOcean);
    }

    #[test]
    fn test_lit_water_zonation() {
        assert_eq!(base_layer(Biome::Unknown, &water(1000.0, -50.0, 25.0)), Biome::TropicalReef);
        assert_eq!(base_layer(Biome::Unknown, &water(1000.0, -50.0, 12.0)), Biome::SeaForest);
        assert_eq!(base_layer(Biome::Unknown, &water(1000.0, -50.0, 31.0)), Biome::RockyShallows);
        assert_eq!(base_layer(Biome::Unknown, &water(1000.0, -50.0, 5.0)), Biome::RockyShallows);
        // Too close to the surface for reefs.
        assert_eq!(base_layer(Biome::Unknown, &water(1000.0, -6.0, 25.0)), Biome::RockyShallows);
    }

    #[test]
    fn test_dark_water_depth_split() {
        assert_eq!(base_layer(Biome::Unknown, &water(10.0, -199.0, 10.0)), Biome::ShallowOcean);
        assert_eq!(base_layer(Biome::Unknown, &water(10.0, -200.0, 10.0)), Biome::DeepOcean);
    }

    #[test]
    fn test_dryland_layer() {
        let hot = PointConditions::new(500.0, 101.3, 100.0, 25.0, 10.0, 50.0);
        let cold = PointConditions { mean_temp_c: 15.0, ..hot };
        assert_eq!(dryland_layer(Biome::Grassland, &hot), Biome::SandSea);
        assert_eq!(dryland_layer(Biome::Grassland, &cold), Biome::Barren);
        let wet = PointConditions { annual_precip_mm: 110.0, ..hot };
        assert_eq!(dryland_layer(Biome::Grassland, &wet), Biome::Grassland);
        let sea = PointConditions { altitude_m: -10.0, ..hot };
        assert_eq!(dryland_layer(Biome::ShallowOcean, &sea), Biome::ShallowOcean);
    }

    #[test]
    fn test_heat_layer_boundaries() {
        let land = PointConditions::new(500.0, 101.3, 10.0, 0.0, 5.0, 500.0);
        let land = PointConditions { mean_temp_c: land.boiling_point_c, ..land };
        assert_eq!(heat_layer(Biome::Grassland, &land), Biome::Moonscape);

        let sea = PointConditions { altitude_m: -10.0, ..land };
        assert_eq!(heat_layer(Biome::ShallowOcean, &sea), Biome::ShallowOcean);
        let boiling = PointConditions { mean_temp_c: sea.boiling_point_c + 0.1, ..sea };
        assert_eq!(heat_layer(Biome::ShallowOcean, &boiling), Biome::BoilingSea);
    }

    #[test]
    fn test_ice_layer() {
        let frozen = PointConditions::new(100.0, 101.3, -500.0, -20.0, 10.0, 0.0);
        assert_eq!(ice_layer(Biome::DeepOcean, &frozen), Biome::IceSheet);
        let thaws = PointConditions { temp_var_c: 20.0, ..frozen };
        assert_eq!(ice_layer(Biome::DeepOcean, &thaws), Biome::DeepOcean);
    }

    #[test]
    fn test_ice_overrides_dryland() {
        assert_eq!(classify(300.0, 101.3, 100.0, -30.0, 10.0, 50.0), Biome::IceSheet);
    }

    #[test]
    fn test_classify_nan_is_unknown() {
        assert_eq!(classify(f64::NAN, 101.3, 10.0, 10.0, 5.0, 500.0), Biome::Unknown);
        assert_eq!(classify(300.0, 101.3, 10.0, 10.0, 5.0, f64::NAN), Biome::Unknown);
    }

    #[test]
    fn test_surface_nan_is_unknown_in_both_modes() {
        for exoplanet in [false, true] {
            assert_eq!(
                classify_on_planet_surface(f64::NAN, 101.3, 300.0, 10.0, 10.0, 5.0, 500.0, exoplanet),
                Biome::Unknown
            );
            assert_eq!(
                classify_on_planet_surface(9.8, 101.3, 300.0, 10.0, f64::NAN, 5.0, 500.0, exoplanet),
                Biome::Unknown
            );
        }
    }

    #[test]
    fn test_override_order() {
        let g = 9.8;
        assert_eq!(
            classify_on_planet_surface(g, 30_000.0, 300.0, 0.0, 2500.0, 0.0, 0.0, true),
            Biome::Star
        );
        assert_eq!(
            classify_on_planet_surface(g, 30_000.0, 300.0, 0.0, 1500.0, 0.0, 0.0, true),
            Biome::GasGiant
        );
        assert_eq!(
            classify_on_planet_surface(g, 101.3, 300.0, -10.0, 1500.0, 0.0, 0.0, true),
            Biome::MagmaSea
        );
        assert_eq!(
            classify_on_planet_surface(g, 101.3, 300.0, 10.0, 1500.0, 0.0, 0.0, true),
            Biome::Moonscape
        );
    }

    #[test]
    fn test_cryogen_window() {
        // Between the nitrogen boiling curve and its critical pressure.
        let c = PointConditions::new(50.0, 500.0, -10.0, -180.0, 0.0, 0.0);
        assert_eq!(cryogen_sea(&c, 500.0), Some(Biome::CryogenSea));
        let land = PointConditions { altitude_m: 10.0, ..c };
        assert_eq!(cryogen_sea(&land, 500.0), Some(Biome::Moonscape));
        let snowy = PointConditions { annual_precip_mm: 5.0, ..land };
        assert_eq!(cryogen_sea(&snowy, 500.0), Some(Biome::IceSheet));
        let thin = PointConditions { pressure_kpa: 1.0, ..c };
        assert_eq!(cryogen_sea(&thin, 500.0), None);
    }

    #[test]
    fn test_goldilocks_window_is_inclusive() {
        let c = PointConditions::new(300.0, 101.3, 10.0, 15.0, 5.0, 500.0);
        assert_eq!(outside_goldilocks_window(&c, 4.0), None);
        assert_eq!(outside_goldilocks_window(&c, 3350.0), None);
        assert_eq!(outside_goldilocks_window(&c, 3.99), Some(Biome::Moonscape));
        assert_eq!(outside_goldilocks_window(&c, 3350.1), Some(Biome::Moonscape));
    }

    #[test]
    fn test_earthly_mode_skips_overrides() {
        let exo = classify_on_planet_surface(9.8, 101.3, 300.0, -10.0, 1500.0, 0.0, 0.0, true);
        let earthly = classify_on_planet_surface(9.8, 101.3, 300.0, -10.0, 1500.0, 0.0, 0.0, false);
        assert_eq!(exo, Biome::MagmaSea);
        assert_eq!(earthly, Biome::BoilingSea);
    }
}
