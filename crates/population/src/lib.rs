//! Monte Carlo population synthesis for substellar survey fields.
//!
//! Draws fundamental parameters from an IMF and age distribution, evolves
//! them through a pluggable evolutionary model, mixes in unresolved
//! binaries at a configured fraction, calibrates the result against the
//! observed local luminosity function, and enriches the catalog with
//! distances, kinematics, and photometry.

pub mod assembler;
pub mod config;
mod enrich;
pub mod error;
pub mod scale;
pub mod synthesis;
pub mod table;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod enrich_test;
#[cfg(test)]
mod scale_test;

pub use assembler::{assemble, combined_luminosity};
pub use config::{Imf, PopulationConfig};
pub use error::PopulationError;
pub use scale::{scale_to_local_lf, LfScale, BOOTSTRAP_DRAWS};
pub use synthesis::{sample_ages, sample_masses, simulate, synthesize, Binaries, Singles};
pub use table::PopulationTable;
