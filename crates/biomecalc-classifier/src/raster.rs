//! Array-mode classification over `ndarray` rasters of any dimensionality.
//!
//! Points are independent, so classification fans out across a rayon pool
//! with no synchronization. Shapes are checked once, when a
//! [`SurfaceRasters`] is built.

use ndarray::{Array, ArrayView, Dimension, Zip};
use tracing::{debug, warn};

use crate::classifier::classify_on_planet_surface;
use crate::error::ClassifyError;

/// Per-point environmental fields, all sharing one shape.
#[derive(Clone, Debug)]
pub struct SurfaceRasters<'a, D: Dimension> {
    solar_flux_wpm2: ArrayView<'a, f64, D>,
    altitude_m: ArrayView<'a, f64, D>,
    mean_temp_c: ArrayView<'a, f64, D>,
    temp_var_c: ArrayView<'a, f64, D>,
    annual_precip_mm: ArrayView<'a, f64, D>,
}

impl<'a, D: Dimension> SurfaceRasters<'a, D> {
    /// Bundles the five fields, checking each against the altitude shape.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::ShapeMismatch`] naming the first field whose
    /// shape differs.
    pub fn new(
        solar_flux_wpm2: ArrayView<'a, f64, D>,
        altitude_m: ArrayView<'a, f64, D>,
        mean_temp_c: ArrayView<'a, f64, D>,
        temp_var_c: ArrayView<'a, f64, D>,
        annual_precip_mm: ArrayView<'a, f64, D>,
    ) -> Result<Self, ClassifyError> {
        let expected = altitude_m.shape();
        for (field, actual) in [
            ("solar_flux_wpm2", solar_flux_wpm2.shape()),
            ("mean_temp_c", mean_temp_c.shape()),
            ("temp_var_c", temp_var_c.shape()),
            ("annual_precip_mm", annual_precip_mm.shape()),
        ] {
            if actual != expected {
                warn!(field, ?expected, ?actual, "rejecting raster with mismatched shape");
                return Err(ClassifyError::ShapeMismatch {
                    field,
                    expected: expected.to_vec(),
                    actual: actual.to_vec(),
                });
            }
        }
        Ok(Self {
            solar_flux_wpm2,
            altitude_m,
            mean_temp_c,
            temp_var_c,
            annual_precip_mm,
        })
    }

    pub fn shape(&self) -> &[usize] {
        self.altitude_m.shape()
    }

    pub fn len(&self) -> usize {
        self.altitude_m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.altitude_m.is_empty()
    }

    fn zip(
        &self,
    ) -> Zip<
        (
            ArrayView<'a, f64, D>,
            ArrayView<'a, f64, D>,
            ArrayView<'a, f64, D>,
            ArrayView<'a, f64, D>,
            ArrayView<'a, f64, D>,
        ),
        D,
    > {
        Zip::from(self.solar_flux_wpm2.clone())
            .and(self.altitude_m.clone())
            .and(self.mean_temp_c.clone())
            .and(self.temp_var_c.clone())
            .and(self.annual_precip_mm.clone())
    }
}

/// Planet-wide scalars shared by every point of a raster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceParams {
    pub gravity_m_per_s2: f64,
    pub mean_surface_pressure_kpa: f64,
    pub exoplanet: bool,
}

impl SurfaceParams {
    fn classify_point(&self, flux: f64, altitude: f64, temp: f64, var: f64, precip: f64) -> u8 {
        classify_on_planet_surface(
            self.gravity_m_per_s2,
            self.mean_surface_pressure_kpa,
            flux,
            altitude,
            temp,
            var,
            precip,
            self.exoplanet,
        )
        .code()
    }
}

/// Classifies every point on the global rayon pool, returning biome codes
/// in the rasters' shape.
pub fn classify_planet_biomes<D: Dimension>(
    params: &SurfaceParams,
    rasters: &SurfaceRasters<'_, D>,
) -> Array<u8, D> {
    debug!(
        shape = ?rasters.shape(),
        threads = rayon::current_num_threads(),
        exoplanet = params.exoplanet,
        "classifying raster"
    );
    rasters
        .zip()
        .par_map_collect(|&f, &a, &t, &v, &p| params.classify_point(f, a, t, v, p))
}

/// Classifies every point on the calling thread.
pub fn classify_planet_biomes_sequential<D: Dimension>(
    params: &SurfaceParams,
    rasters: &SurfaceRasters<'_, D>,
) -> Array<u8, D> {
    debug!(shape = ?rasters.shape(), exoplanet = params.exoplanet, "classifying raster sequentially");
    rasters
        .zip()
        .map_collect(|&f, &a, &t, &v, &p| params.classify_point(f, a, t, v, p))
}

/// Raster classification on a dedicated thread pool.
pub struct RasterClassifier {
    pool: rayon::ThreadPool,
    min_points_per_task: usize,
}

impl RasterClassifier {
    /// Builds a pool with `threads` workers (`0` means one per logical CPU).
    /// Rasters with fewer than `min_points_per_task` points skip the pool.
    pub fn new(threads: usize, min_points_per_task: usize) -> Result<Self, ClassifyError> {
        let threads = if threads == 0 { num_cpus::get() } else { threads };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("biomecalc-worker-{i}"))
            .build()?;
        Ok(Self { pool, min_points_per_task })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn classify<D: Dimension>(
        &self,
        params: &SurfaceParams,
        rasters: &SurfaceRasters<'_, D>,
    ) -> Array<u8, D> {
        if rasters.len() < self.min_points_per_task {
            return classify_planet_biomes_sequential(params, rasters);
        }
        self.pool.install(|| classify_planet_biomes(params, rasters))
    }
}
