use thiserror::Error;

/// Construction errors for relation tables.
///
/// Evaluation never errors: out-of-range queries return NaN by policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelationsError {
    #[error("grid shape mismatch: expected {rows} x {cols} values, got {got}")]
    GridShape { rows: usize, cols: usize, got: usize },

    #[error("grid axes must be strictly ascending")]
    UnsortedAxis,

    #[error("interpolation table needs at least two points, got {0}")]
    TooFewPoints(usize),
}
