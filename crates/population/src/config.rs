//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::PopulationError;

/// Initial mass function the fundamental masses are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Imf {
    /// Single power law `p(m) ∝ m^α`
    Power(f64),
    /// Kroupa (2001) broken power law
    Kroupa,
}

/// Everything a simulation run needs, enumerated explicitly.
///
/// # Example
/// ```
/// use population::PopulationConfig;
///
/// let config = PopulationConfig {
///     n_sample: 500,
///     ..PopulationConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationConfig {
    pub imf: Imf,
    /// Fraction of systems that are unresolved binaries, in [0, 1)
    pub binary_fraction: f64,
    /// Mass-ratio power-law index: p(q) ∝ q^γ on (0, 1], must be positive
    pub binary_q: f64,
    /// Age range in Gyr
    pub age_range: (f64, f64),
    /// Mass range in solar masses
    pub mass_range: (f64, f64),
    /// Number of single systems per simulation
    pub n_sample: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            imf: Imf::Power(-0.6),
            binary_fraction: 0.2,
            binary_q: 4.0,
            age_range: (0.01, 14.0),
            mass_range: (0.01, 1.0),
            n_sample: 10_000,
        }
    }
}

impl PopulationConfig {
    pub fn validate(&self) -> Result<(), PopulationError> {
        if !(0.0..1.0).contains(&self.binary_fraction) {
            return Err(PopulationError::InvalidBinaryFraction(self.binary_fraction));
        }
        if self.binary_q <= 0.0 {
            return Err(PopulationError::NonPositiveBinaryQ(self.binary_q));
        }
        if !(self.age_range.0 < self.age_range.1) {
            return Err(PopulationError::InvalidRange {
                name: "age",
                min: self.age_range.0,
                max: self.age_range.1,
            });
        }
        if !(self.mass_range.0 < self.mass_range.1) {
            return Err(PopulationError::InvalidRange {
                name: "mass",
                min: self.mass_range.0,
                max: self.mass_range.1,
            });
        }
        if self.n_sample == 0 {
            return Err(PopulationError::EmptySample);
        }
        Ok(())
    }
}
