//! The observed local luminosity function used to calibrate simulated
//! counts.

use serde::{Deserialize, Serialize};

/// Space density of local objects per effective-temperature bin, with
/// per-bin uncertainties.
///
/// Consumed read-only by the population assembler's scaling step. Values
/// are in units of 10⁻³ objects pc⁻³ per bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalLuminosityFunction {
    /// Bin centers in K
    pub bin_centers: Vec<f64>,
    /// Observed space densities per bin
    pub values: Vec<f64>,
    /// One-sigma uncertainties per bin
    pub uncertainties: Vec<f64>,
    /// Half the bin width in K
    pub bin_half_width: f64,
}

impl LocalLuminosityFunction {
    /// The Kirkpatrick et al. (2021) 20-pc census: eleven 150 K bins from
    /// 450 K to 2100 K.
    pub fn kirkpatrick2021() -> Self {
        Self {
            bin_centers: vec![
                525.0, 675.0, 825.0, 975.0, 1125.0, 1275.0, 1425.0, 1575.0, 1725.0, 1875.0,
                2025.0,
            ],
            values: vec![4.24, 2.8, 1.99, 1.72, 1.11, 1.95, 0.94, 0.81, 0.78, 0.5, 0.72],
            uncertainties: vec![0.7, 0.37, 0.32, 0.3, 0.25, 0.3, 0.22, 0.2, 0.2, 0.17, 0.18],
            bin_half_width: 75.0,
        }
    }

    pub fn n_bins(&self) -> usize {
        self.bin_centers.len()
    }

    /// Bin edges: one more entry than there are bins.
    pub fn bin_edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self
            .bin_centers
            .iter()
            .map(|c| c - self.bin_half_width)
            .collect();
        edges.push(self.bin_centers[self.bin_centers.len() - 1] + self.bin_half_width);
        edges
    }

    /// Histogram of model temperatures against this function's bins.
    ///
    /// NaN temperatures and values outside the binned range are dropped;
    /// counts are returned as f64 for the least-squares scaling that
    /// follows.
    pub fn histogram(&self, teffs: &[f64]) -> Vec<f64> {
        let edges = self.bin_edges();
        let mut counts = vec![0.0; self.n_bins()];
        for &t in teffs {
            if t.is_nan() {
                continue;
            }
            for i in 0..self.n_bins() {
                // Right-inclusive on the last bin, matching the usual
                // histogram convention
                let in_bin = if i == self.n_bins() - 1 {
                    t >= edges[i] && t <= edges[i + 1]
                } else {
                    t >= edges[i] && t < edges[i + 1]
                };
                if in_bin {
                    counts[i] += 1.0;
                    break;
                }
            }
        }
        counts
    }
}
