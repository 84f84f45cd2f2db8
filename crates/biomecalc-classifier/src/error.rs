use thiserror::Error;

/// Errors raised by the biome classifier.
///
/// Per-point classification never fails (undefined inputs produce
/// [`Biome::Unknown`](crate::Biome::Unknown)); these cover code decoding
/// and array-mode input validation.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("{field} has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        field: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("0x{0:02x} is not an assigned biome code")]
    UndefinedBiomeCode(u8),

    #[error("no biome named {0:?}")]
    UnknownBiomeName(String),

    #[error("failed to build classification thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
