//! Rule-based biome classification.
//!
//! Maps a handful of environmental scalars (solar flux, air pressure,
//! altitude, temperature, temperature swing, precipitation) to a [`Biome`].
//! Earthly biomes come from a nearest-reference-point match on land and
//! depth zonation at sea, followed by override layers for dry, hot, and
//! frozen conditions. Exoplanet mode adds astronomical and extreme
//! environments ahead of the Earthly pipeline.
//!
//! Three call shapes are offered: [`classify`] for local conditions,
//! [`classify_on_planet`] for a point on a [`Planet`], and
//! [`classify_planet_biomes`] for whole rasters.

mod biome;
mod classifier;
mod error;
mod icon_map;
mod planet;
mod raster;
pub mod reference;

pub use biome::{Biome, BiomeCategory, biomes_from_codes, codes_from_biomes};
pub use classifier::{
    EARTHLY_LAYERS, Layer, PointConditions, SURFACE_OVERRIDES, SurfaceOverride, base_layer,
    classify, classify_on_planet_surface, cryogen_sea, dryland_layer, gas_giant, heat_layer,
    ice_layer, molten_surface, no_liquid_water, outside_goldilocks_window, stellar_surface,
};
pub use error::ClassifyError;
pub use icon_map::render_icon_map;
pub use planet::{
    MAX_NEUTRON_STAR_DENSITY_TPM3, MIN_NEUTRON_STAR_DENSITY_TPM3, Planet, RED_DWARF_MIN_MASS_KG,
    classify_on_planet,
};
pub use raster::{
    RasterClassifier, SurfaceParams, SurfaceRasters,
    classify_planet_biomes, classify_planet_biomes_sequential,
};
