//! Cumulative distance distributions and inverse-transform sampling.
//!
//! A [`DistanceCdf`] is built once per (direction, scale height, scale
//! length, profile) key — the line-of-sight integral behind it is the
//! dominant cost of the whole pipeline — and reused for every subsequent
//! draw.

use log::debug;
use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::density::DensityProfile;
use crate::error::GalaxyError;
use crate::params::GalacticModel;
use crate::volume::volume;

/// Number of logarithmic grid points in a full cumulative distribution.
const CDF_GRID_POINTS: usize = 10_000;
/// Near-zero floor prepended to the grid to avoid the d = 0 singularity.
const CDF_FLOOR: f64 = 1e-2;
/// Logarithmic grid extent: 0.1 pc to 1e6 pc.
const CDF_LOG_MIN: f64 = -1.0;
const CDF_LOG_MAX: f64 = 6.0;

/// An immutable monotone mapping from distance to cumulative probability.
///
/// Built by integrating the density profile from 0 out to each grid point
/// and normalizing by the (NaN-aware) maximum, so values lie in [0, 1].
/// Queries outside the grid clamp to the end values; callers choose a grid
/// that covers their query range. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceCdf {
    grid: Vec<f64>,
    values: Vec<f64>,
}

impl DistanceCdf {
    /// Build the cumulative distance distribution for one sight line.
    ///
    /// The grid is ~10,000 points logarithmically spaced from 0.1 pc to
    /// 10⁶ pc, prepended with a 10⁻² pc floor.
    ///
    /// # Errors
    /// Propagates volume-integral parameter errors; `DegenerateCdf` if the
    /// accumulated mass has no finite positive maximum.
    pub fn build(
        model: &GalacticModel,
        l: f64,
        b: f64,
        scale_h: f64,
        scale_l: f64,
        profile: DensityProfile,
    ) -> Result<Self, GalaxyError> {
        debug!(
            "building distance CDF for l={:.4} b={:.4} H={} L={} ({:?})",
            l, b, scale_h, scale_l, profile
        );

        let mut grid = Vec::with_capacity(CDF_GRID_POINTS + 1);
        grid.push(CDF_FLOOR);
        let log_step = (CDF_LOG_MAX - CDF_LOG_MIN) / (CDF_GRID_POINTS - 1) as f64;
        for i in 0..CDF_GRID_POINTS {
            grid.push(10f64.powf(CDF_LOG_MIN + log_step * i as f64));
        }

        let mut values = Vec::with_capacity(grid.len());
        for &d in &grid {
            values.push(volume(model, l, b, 0.0, d, scale_h, scale_l, profile)?);
        }

        let max = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);
        if !(max > 0.0) {
            return Err(GalaxyError::DegenerateCdf);
        }
        for v in &mut values {
            *v /= max;
        }

        Ok(Self { grid, values })
    }

    /// Construct directly from precomputed (grid, value) pairs.
    ///
    /// The grid must be strictly ascending; values are taken as-is.
    pub fn from_parts(grid: Vec<f64>, values: Vec<f64>) -> Self {
        debug_assert_eq!(grid.len(), values.len());
        Self { grid, values }
    }

    /// Evaluate the cumulative value at distance `d` by piecewise-linear
    /// interpolation, clamped to the grid ends.
    pub fn evaluate(&self, d: f64) -> f64 {
        let grid = &self.grid;
        if d <= grid[0] {
            return self.values[0];
        }
        if d >= grid[grid.len() - 1] {
            return self.values[grid.len() - 1];
        }
        let hi = grid.partition_point(|&g| g < d);
        let lo = hi - 1;
        let span = grid[hi] - grid[lo];
        let t = if span > 0.0 { (d - grid[lo]) / span } else { 1.0 };
        self.values[lo] + t * (self.values[hi] - self.values[lo])
    }

    /// The distance grid the distribution was built over.
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// The normalized cumulative values, aligned with [`Self::grid`].
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Inverse-transform sampling against a tabulated cumulative distribution.
///
/// `values` need not be normalized: they are renormalized by their NaN-aware
/// maximum, and NaN bins are not selectable. Every returned sample lies
/// within `[grid[0], grid[last]]`.
pub fn draw_from_cdf(rng: &mut ChaChaRng, grid: &[f64], values: &[f64], n: usize) -> Vec<f64> {
    debug_assert_eq!(grid.len(), values.len());

    // Drop NaN tail entries, renormalize by the finite maximum
    let mut xs = Vec::with_capacity(grid.len());
    let mut cs = Vec::with_capacity(values.len());
    let mut max = f64::NEG_INFINITY;
    for (&x, &c) in grid.iter().zip(values) {
        if c.is_finite() {
            xs.push(x);
            cs.push(c);
            max = max.max(c);
        }
    }
    if xs.is_empty() || !(max > 0.0) {
        return vec![f64::NAN; n];
    }
    for c in &mut cs {
        *c /= max;
    }

    let last = xs.len() - 1;
    (0..n)
        .map(|_| {
            let u: f64 = rng.random();
            let hi = cs.partition_point(|&c| c < u);
            if hi == 0 {
                return xs[0];
            }
            if hi > last {
                return xs[last];
            }
            let lo = hi - 1;
            let dc = cs[hi] - cs[lo];
            if dc > 0.0 {
                xs[lo] + (u - cs[lo]) * (xs[hi] - xs[lo]) / dc
            } else {
                xs[hi]
            }
        })
        .collect()
}

/// Cache key for one cumulative distance distribution.
///
/// Floating-point parameters are keyed by bit pattern: two pointings hit the
/// same cache entry only when their parameters are bit-identical, which is
/// exactly the reuse the pipeline performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CdfKey {
    l: u64,
    b: u64,
    scale_h: u64,
    scale_l: u64,
    profile: DensityProfile,
}

impl CdfKey {
    pub fn new(l: f64, b: f64, scale_h: f64, scale_l: f64, profile: DensityProfile) -> Self {
        Self {
            l: l.to_bits(),
            b: b.to_bits(),
            scale_h: scale_h.to_bits(),
            scale_l: scale_l.to_bits(),
            profile,
        }
    }
}
