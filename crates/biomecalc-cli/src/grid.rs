//! JSON raster input and output for the `grid` command.

use biomecalc_classifier::{RasterClassifier, SurfaceParams, SurfaceRasters, render_icon_map};
use ndarray::{ArrayD, Ix2, IxDyn};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Row-major surface conditions for every cell of a grid.
#[derive(Debug, Clone, Deserialize)]
pub struct GridInput {
    pub shape: Vec<usize>,
    pub solar_flux_wpm2: Vec<f64>,
    pub altitude_m: Vec<f64>,
    pub mean_temp_c: Vec<f64>,
    pub temp_var_c: Vec<f64>,
    pub annual_precip_mm: Vec<f64>,
    /// Overrides the planet's sea-level surface gravity.
    #[serde(default)]
    pub gravity_m_per_s2: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridOutput {
    pub shape: Vec<usize>,
    pub codes: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<String>>,
}

fn field_array(
    field: &'static str,
    shape: &[usize],
    values: Vec<f64>,
) -> Result<ArrayD<f64>, CliError> {
    ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|source| CliError::FieldShape {
        field,
        shape: shape.to_vec(),
        source,
    })
}

impl GridInput {
    pub fn from_json(json: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Classifies every cell. `default_gravity` applies unless the input
    /// carries its own.
    pub fn classify(
        self,
        classifier: &RasterClassifier,
        default_gravity: f64,
        mean_surface_pressure_kpa: f64,
        exoplanet: bool,
        icons: bool,
    ) -> Result<GridOutput, CliError> {
        let shape = self.shape;
        let flux = field_array("solar_flux_wpm2", &shape, self.solar_flux_wpm2)?;
        let altitude = field_array("altitude_m", &shape, self.altitude_m)?;
        let temp = field_array("mean_temp_c", &shape, self.mean_temp_c)?;
        let var = field_array("temp_var_c", &shape, self.temp_var_c)?;
        let precip = field_array("annual_precip_mm", &shape, self.annual_precip_mm)?;

        let rasters = SurfaceRasters::new(
            flux.view(),
            altitude.view(),
            temp.view(),
            var.view(),
            precip.view(),
        )?;
        let params = SurfaceParams {
            gravity_m_per_s2: self.gravity_m_per_s2.unwrap_or(default_gravity),
            mean_surface_pressure_kpa,
            exoplanet,
        };
        let codes = classifier.classify(&params, &rasters);

        let icons = if icons {
            let grid = codes
                .view()
                .into_dimensionality::<Ix2>()
                .map_err(|_| CliError::IconsNeed2d(shape.clone()))?;
            Some(render_icon_map(grid))
        } else {
            None
        };

        Ok(GridOutput {
            shape,
            codes: codes.iter().copied().collect(),
            icons,
        })
    }
}
