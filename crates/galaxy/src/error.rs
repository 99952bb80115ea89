use thiserror::Error;

/// Errors raised for non-physical inputs to the galactic engine.
///
/// Out-of-range results from empirical relations are *not* errors; they
/// surface as NaN and flow through the pipeline (NaN-aware aggregation is
/// the caller's job).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GalaxyError {
    #[error("invalid distance range: d_min ({d_min}) must be smaller than d_max ({d_max})")]
    InvalidDistanceRange { d_min: f64, d_max: f64 },

    #[error("distances must be positive, got {0}")]
    NonPositiveDistance(f64),

    #[error("scale parameter must be positive, got {0}")]
    NonPositiveScale(f64),

    #[error("ages array must not be empty")]
    EmptyAges,

    #[error("cumulative distance distribution is degenerate (no finite positive mass)")]
    DegenerateCdf,
}
