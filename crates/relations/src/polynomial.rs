//! Polynomial fits with scatter and validity ranges.

use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::sampling::sample_gaussian;

/// One empirical polynomial fit `y = P(x - x_shift)` with a Gaussian scatter
/// term and a validity range on `x`.
///
/// Coefficients are in ascending powers. Queries outside `range` evaluate to
/// NaN rather than erroring; that NaN is expected to propagate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialRelation {
    /// Coefficients c0 + c1·t + c2·t² + … with t = x - x_shift
    pub coeffs: Vec<f64>,
    /// Offset subtracted from x before evaluation
    pub x_shift: f64,
    /// One-sigma scatter of the fit
    pub scatter: f64,
    /// Inclusive validity range on x
    pub range: (f64, f64),
}

impl PolynomialRelation {
    pub fn new(coeffs: Vec<f64>, x_shift: f64, scatter: f64, range: (f64, f64)) -> Self {
        Self {
            coeffs,
            x_shift,
            scatter,
            range,
        }
    }

    /// Whether `x` falls inside the fit's validity range.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.range.0 && x <= self.range.1
    }

    /// Mean fit value at `x`, NaN outside the validity range.
    pub fn evaluate(&self, x: f64) -> f64 {
        if !self.contains(x) {
            return f64::NAN;
        }
        self.evaluate_raw(x)
    }

    /// Mean fit value at `x` with no range masking. For callers that
    /// enforce their own validity window.
    pub fn evaluate_raw(&self, x: f64) -> f64 {
        let t = x - self.x_shift;
        // Horner, highest power first
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
    }

    /// Draw one value from Normal(fit(x), scatter), NaN outside the range.
    pub fn sample(&self, rng: &mut ChaChaRng, x: f64) -> f64 {
        if !self.contains(x) {
            return f64::NAN;
        }
        sample_gaussian(rng, self.evaluate_raw(x), self.scatter)
    }
}

/// A relation defined piecewise over disjoint segments.
///
/// Segments are tried in order; the first whose range contains `x` wins.
/// NaN outside every segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseRelation {
    pub segments: Vec<PolynomialRelation>,
}

impl PiecewiseRelation {
    pub fn new(segments: Vec<PolynomialRelation>) -> Self {
        Self { segments }
    }

    fn segment_for(&self, x: f64) -> Option<&PolynomialRelation> {
        self.segments.iter().find(|s| s.contains(x))
    }

    /// Overall inclusive validity range across all segments.
    pub fn range(&self) -> (f64, f64) {
        let lo = self
            .segments
            .iter()
            .map(|s| s.range.0)
            .fold(f64::INFINITY, f64::min);
        let hi = self
            .segments
            .iter()
            .map(|s| s.range.1)
            .fold(f64::NEG_INFINITY, f64::max);
        (lo, hi)
    }

    /// Mean fit value at `x`, NaN outside every segment.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.segment_for(x).map_or(f64::NAN, |s| s.evaluate_raw(x))
    }

    /// Draw from the matching segment's Normal(fit(x), scatter), NaN
    /// outside every segment.
    pub fn sample(&self, rng: &mut ChaChaRng, x: f64) -> f64 {
        match self.segment_for(x) {
            Some(s) => sample_gaussian(rng, s.evaluate_raw(x), s.scatter),
            None => f64::NAN,
        }
    }

    /// Invert the relation numerically on a uniform grid over its validity
    /// range: returns the grid `x` whose fit value is closest to `y`.
    ///
    /// Works for non-monotone fits (nearest match wins). NaN when `y` is
    /// NaN, the relation is empty, or `y` lies outside the values the fit
    /// reaches anywhere on the grid.
    pub fn invert_on_grid(&self, y: f64, grid_points: usize) -> f64 {
        if y.is_nan() || self.segments.is_empty() {
            return f64::NAN;
        }
        let (lo, hi) = self.range();
        let step = (hi - lo) / (grid_points - 1) as f64;
        let mut best_x = f64::NAN;
        let mut best_err = f64::INFINITY;
        let mut fit_min = f64::INFINITY;
        let mut fit_max = f64::NEG_INFINITY;
        for i in 0..grid_points {
            let x = lo + step * i as f64;
            let fx = self.evaluate(x);
            if fx.is_nan() {
                continue;
            }
            fit_min = fit_min.min(fx);
            fit_max = fit_max.max(fx);
            let err = (fx - y).abs();
            if err < best_err {
                best_err = err;
                best_x = x;
            }
        }
        if y < fit_min || y > fit_max {
            return f64::NAN;
        }
        best_x
    }
}
