use thiserror::Error;

use galaxy::GalaxyError;

#[derive(Debug, Error, PartialEq)]
pub enum PopulationError {
    #[error("binary fraction {0} must lie in [0, 1)")]
    InvalidBinaryFraction(f64),

    #[error("mass-ratio exponent must be positive, got {0}")]
    NonPositiveBinaryQ(f64),

    #[error("{name} range [{min}, {max}] is empty")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("sample size must be positive")]
    EmptySample,

    #[error("mass range [{min}, {max}] does not overlap the IMF support")]
    MassRangeOutsideImf { min: f64, max: f64 },

    #[error("binary pool is empty but {0} binaries were requested")]
    EmptyBinaryPool(usize),

    #[error(transparent)]
    Galaxy(#[from] GalaxyError),
}
