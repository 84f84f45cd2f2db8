use std::path::PathBuf;

use biomecalc_classifier::ClassifyError;
use biomecalc_config::ConfigError;

/// Everything that can stop a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid grid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("grid field {field} does not fit shape {shape:?}: {source}")]
    FieldShape {
        field: &'static str,
        shape: Vec<usize>,
        #[source]
        source: ndarray::ShapeError,
    },

    #[error("icon maps need a 2-D grid, got shape {0:?}")]
    IconsNeed2d(Vec<usize>),
}
