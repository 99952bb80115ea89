//! Evolutionary-model interpolation seam.
//!
//! Population synthesis only needs one operation from an evolutionary
//! model: map (mass, age) pairs to temperature and luminosity. The trait
//! keeps the model pluggable; [`GridEvolutionaryModel`] covers the common
//! case of a rectangular model grid.

use serde::{Deserialize, Serialize};

use crate::error::RelationsError;

/// Interpolated evolutionary-model output, aligned with the query arrays.
///
/// Out-of-grid queries carry NaN temperature and luminosity; mass and age
/// echo the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionResult {
    pub mass: Vec<f64>,
    pub age: Vec<f64>,
    /// Effective temperature in K
    pub temperature: Vec<f64>,
    /// log10(L/L☉)
    pub luminosity: Vec<f64>,
}

/// A source of evolutionary-model predictions.
pub trait EvolutionaryModel {
    /// Interpolate the model at each (mass, age) pair. Outputs are aligned
    /// with the inputs; out-of-grid queries yield NaN.
    fn interpolate(&self, masses: &[f64], ages: &[f64]) -> EvolutionResult;
}

/// Bilinear interpolation over a rectangular (mass, age) model grid.
///
/// `temperature` and `luminosity` are row-major: one row per mass grid
/// point, one column per age grid point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridEvolutionaryModel {
    mass_grid: Vec<f64>,
    age_grid: Vec<f64>,
    temperature: Vec<f64>,
    luminosity: Vec<f64>,
}

impl GridEvolutionaryModel {
    pub fn new(
        mass_grid: Vec<f64>,
        age_grid: Vec<f64>,
        temperature: Vec<f64>,
        luminosity: Vec<f64>,
    ) -> Result<Self, RelationsError> {
        if mass_grid.len() < 2 {
            return Err(RelationsError::TooFewPoints(mass_grid.len()));
        }
        if age_grid.len() < 2 {
            return Err(RelationsError::TooFewPoints(age_grid.len()));
        }
        let expected = mass_grid.len() * age_grid.len();
        if temperature.len() != expected {
            return Err(RelationsError::GridShape {
                rows: mass_grid.len(),
                cols: age_grid.len(),
                got: temperature.len(),
            });
        }
        if luminosity.len() != expected {
            return Err(RelationsError::GridShape {
                rows: mass_grid.len(),
                cols: age_grid.len(),
                got: luminosity.len(),
            });
        }
        if !is_strictly_ascending(&mass_grid) || !is_strictly_ascending(&age_grid) {
            return Err(RelationsError::UnsortedAxis);
        }
        Ok(Self {
            mass_grid,
            age_grid,
            temperature,
            luminosity,
        })
    }

    fn cell(&self, axis: &[f64], x: f64) -> Option<(usize, f64)> {
        if x < axis[0] || x > axis[axis.len() - 1] {
            return None;
        }
        let hi = axis.partition_point(|&a| a < x).clamp(1, axis.len() - 1);
        let lo = hi - 1;
        let t = (x - axis[lo]) / (axis[hi] - axis[lo]);
        Some((lo, t))
    }

    fn bilinear(&self, table: &[f64], mass: f64, age: f64) -> f64 {
        let Some((i, ti)) = self.cell(&self.mass_grid, mass) else {
            return f64::NAN;
        };
        let Some((j, tj)) = self.cell(&self.age_grid, age) else {
            return f64::NAN;
        };
        let cols = self.age_grid.len();
        let v00 = table[i * cols + j];
        let v01 = table[i * cols + j + 1];
        let v10 = table[(i + 1) * cols + j];
        let v11 = table[(i + 1) * cols + j + 1];
        let a = v00 + tj * (v01 - v00);
        let b = v10 + tj * (v11 - v10);
        a + ti * (b - a)
    }
}

impl EvolutionaryModel for GridEvolutionaryModel {
    fn interpolate(&self, masses: &[f64], ages: &[f64]) -> EvolutionResult {
        debug_assert_eq!(masses.len(), ages.len());
        let temperature = masses
            .iter()
            .zip(ages)
            .map(|(&m, &a)| self.bilinear(&self.temperature, m, a))
            .collect();
        let luminosity = masses
            .iter()
            .zip(ages)
            .map(|(&m, &a)| self.bilinear(&self.luminosity, m, a))
            .collect();
        EvolutionResult {
            mass: masses.to_vec(),
            age: ages.to_vec(),
            temperature,
            luminosity,
        }
    }
}

fn is_strictly_ascending(xs: &[f64]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}
