//! Empirical relations for substellar population synthesis.
//!
//! Polynomial and interpolated fits between spectral type, effective
//! temperature and absolute magnitude, the binary system-type combiner, the
//! local luminosity function, and the evolutionary-model interpolation seam.
//!
//! Every relation follows the same soft-failure policy: inputs outside a
//! fit's valid range yield NaN, never an error. Downstream aggregation is
//! expected to use NaN-aware statistics.

pub mod absolute_mags;
pub mod error;
pub mod evolution;
pub mod luminosity_function;
pub mod polynomial;
mod sampling;
pub mod system_type;
pub mod teff_spt;

#[cfg(test)]
mod polynomial_test;

pub use absolute_mags::MagnitudeRelations;
pub use error::RelationsError;
pub use evolution::{EvolutionResult, EvolutionaryModel, GridEvolutionaryModel};
pub use luminosity_function::LocalLuminosityFunction;
pub use polynomial::{PiecewiseRelation, PolynomialRelation};
pub use system_type::{system_spectral_type, SYSTEM_TYPE_PRIMARY_RANGE};
pub use teff_spt::{
    assign_spectral_types, combined_binary_teff, spt_to_teff_kirkpatrick, spt_to_teff_pecaut,
    teff_to_spt_kirkpatrick, teff_to_spt_pecaut,
};
