//! Fundamental parameter sampling and evolution of the single and binary
//! pools.

use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use galaxy::sampling::{sample_power_law, sample_uniform};
use relations::{assign_spectral_types, EvolutionaryModel, LocalLuminosityFunction};

use crate::assembler::assemble;
use crate::config::{Imf, PopulationConfig};
use crate::error::PopulationError;
use crate::table::PopulationTable;

// Kroupa (2001) segments: (m_low, m_high, alpha)
const KROUPA_SEGMENTS: [(f64, f64, f64); 3] = [
    (0.03, 0.08, -0.3),
    (0.08, 0.5, -1.3),
    (0.5, 100.0, -2.3),
];

/// Single systems drawn from the IMF and evolved to the present day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Singles {
    pub mass: Vec<f64>,
    pub age: Vec<f64>,
    pub spt: Vec<f64>,
    pub temperature: Vec<f64>,
    pub luminosity: Vec<f64>,
}

impl Singles {
    pub fn len(&self) -> usize {
        self.mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }
}

/// The binary pool: both components evolved at the shared system age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binaries {
    pub age: Vec<f64>,
    pub primary_mass: Vec<f64>,
    pub secondary_mass: Vec<f64>,
    pub primary_spt: Vec<f64>,
    pub secondary_spt: Vec<f64>,
    pub primary_temperature: Vec<f64>,
    pub secondary_temperature: Vec<f64>,
    pub primary_luminosity: Vec<f64>,
    pub secondary_luminosity: Vec<f64>,
}

impl Binaries {
    pub fn len(&self) -> usize {
        self.primary_mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary_mass.is_empty()
    }
}

/// Draw `n` ages uniformly over `age_range` (Gyr).
pub fn sample_ages(rng: &mut ChaChaRng, age_range: (f64, f64), n: usize) -> Vec<f64> {
    (0..n)
        .map(|_| sample_uniform(rng, age_range.0, age_range.1))
        .collect()
}

/// Draw `n` masses from the IMF, restricted to `mass_range` (M☉).
///
/// The Kroupa broken power law is sampled over its full support and masked
/// to the requested range by resampling, so the returned masses follow the
/// conditional distribution.
///
/// # Errors
/// `MassRangeOutsideImf` if a Kroupa range has no overlap with the
/// segments.
pub fn sample_masses(
    rng: &mut ChaChaRng,
    imf: Imf,
    mass_range: (f64, f64),
    n: usize,
) -> Result<Vec<f64>, PopulationError> {
    let (lo, hi) = mass_range;
    match imf {
        Imf::Power(alpha) => Ok((0..n)
            .map(|_| sample_power_law(rng, lo, hi, alpha))
            .collect()),
        Imf::Kroupa => {
            let support = (KROUPA_SEGMENTS[0].0, KROUPA_SEGMENTS[2].1);
            if hi <= support.0 || lo >= support.1 {
                return Err(PopulationError::MassRangeOutsideImf { min: lo, max: hi });
            }

            // Continuity constants at the segment breaks, then the
            // probability mass of each segment
            let mut ks = [1.0f64; 3];
            for i in 1..KROUPA_SEGMENTS.len() {
                let m_b = KROUPA_SEGMENTS[i].0;
                ks[i] = ks[i - 1] * m_b.powf(KROUPA_SEGMENTS[i - 1].2 - KROUPA_SEGMENTS[i].2);
            }
            let mut weights = [0.0f64; 3];
            for (i, &(a, b, alpha)) in KROUPA_SEGMENTS.iter().enumerate() {
                weights[i] = ks[i] * (b.powf(alpha + 1.0) - a.powf(alpha + 1.0)) / (alpha + 1.0);
            }
            let total: f64 = weights.iter().sum();

            let mut masses = Vec::with_capacity(n);
            while masses.len() < n {
                let pick = sample_uniform(rng, 0.0, total);
                let mut acc = 0.0;
                let mut seg = KROUPA_SEGMENTS.len() - 1;
                for (i, w) in weights.iter().enumerate() {
                    acc += w;
                    if pick < acc {
                        seg = i;
                        break;
                    }
                }
                let (a, b, alpha) = KROUPA_SEGMENTS[seg];
                let m = sample_power_law(rng, a, b, alpha);
                if m >= lo && m <= hi {
                    masses.push(m);
                }
            }
            Ok(masses)
        }
    }
}

/// Draw the single and binary pools and evolve them through the model.
///
/// Both pools have `config.n_sample` systems. Binary secondaries are
/// `q × primary` with `q ~ q^binary_q` on (0, 1]; both components
/// share the system age. Spectral types come from the temperature
/// relations (Pecaut above 2000 K, Kirkpatrick below); out-of-grid
/// evolutionary queries propagate as NaN.
pub fn synthesize(
    rng: &mut ChaChaRng,
    config: &PopulationConfig,
    model: &dyn EvolutionaryModel,
) -> Result<(Singles, Binaries), PopulationError> {
    config.validate()?;
    let n = config.n_sample;

    let mass = sample_masses(rng, config.imf, config.mass_range, n)?;
    let age = sample_ages(rng, config.age_range, n);
    let evolved = model.interpolate(&mass, &age);
    let spt = assign_spectral_types(rng, &evolved.temperature);
    let singles = Singles {
        mass,
        age,
        spt,
        temperature: evolved.temperature,
        luminosity: evolved.luminosity,
    };

    let primary_mass = sample_masses(rng, config.imf, config.mass_range, n)?;
    let age = sample_ages(rng, config.age_range, n);
    let secondary_mass: Vec<f64> = primary_mass
        .iter()
        .map(|&m| m * sample_power_law(rng, 0.0, 1.0, config.binary_q))
        .collect();
    let primary = model.interpolate(&primary_mass, &age);
    let secondary = model.interpolate(&secondary_mass, &age);
    let primary_spt = assign_spectral_types(rng, &primary.temperature);
    let secondary_spt = assign_spectral_types(rng, &secondary.temperature);
    let binaries = Binaries {
        age,
        primary_mass,
        secondary_mass,
        primary_spt,
        secondary_spt,
        primary_temperature: primary.temperature,
        secondary_temperature: secondary.temperature,
        primary_luminosity: primary.luminosity,
        secondary_luminosity: secondary.luminosity,
    };

    Ok((singles, binaries))
}

/// Run the full pipeline: synthesize both pools, then assemble and scale
/// the catalog.
pub fn simulate(
    rng: &mut ChaChaRng,
    config: &PopulationConfig,
    model: &dyn EvolutionaryModel,
    lf: &LocalLuminosityFunction,
) -> Result<PopulationTable, PopulationError> {
    let (singles, binaries) = synthesize(rng, config, model)?;
    assemble(rng, &singles, &binaries, config.binary_fraction, lf)
}
