//! Kinematic draws from age–velocity-dispersion relations.
//!
//! Thin-disk dispersions follow component-specific age power laws with an
//! asymmetric-drift correction on V; the thick disk and halo use fixed
//! Gaussian dispersions.

use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::error::GalaxyError;
use crate::sampling::sample_gaussian;

/// Asymmetric-drift constant: mean V = -σ_V² / k.
pub const ASYMMETRIC_DRIFT_K: f64 = 74.0;

// Age power law σ(t) = v10 * ((t + τ) / (10 + τ))^β per component
const U_V10: f64 = 41.899;
const U_TAU: f64 = 0.001;
const U_BETA: f64 = 0.307;

const V_V10: f64 = 28.823;
const V_TAU: f64 = 0.715;
const V_BETA: f64 = 0.430;

const W_V10: f64 = 23.381;
const W_TAU: f64 = 0.001;
const W_BETA: f64 = 0.445;

// Fixed thick-disk dispersions (Bensby-style) and asymmetric drift
const THICK_SIGMA_U: f64 = 67.0;
const THICK_SIGMA_V: f64 = 38.0;
const THICK_SIGMA_W: f64 = 35.0;
const THICK_V_DRIFT: f64 = -46.0;

// Fixed halo (mean, sigma) per cylindrical component
const HALO_VR: (f64, f64) = (3.0, 150.0);
const HALO_VPHI: (f64, f64) = (7.0, 95.0);
const HALO_VZ: (f64, f64) = (3.0, 85.0);

/// Which galactic population the kinematics are drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PopulationKind {
    ThinDisk,
    ThickDisk,
    Halo,
}

/// Velocity components drawn for a set of stars.
///
/// Disk populations get heliocentric Cartesian (U, V, W); the halo is drawn
/// in galactocentric cylindrical components instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VelocitySample {
    Disk {
        u: Vec<f64>,
        v: Vec<f64>,
        w: Vec<f64>,
    },
    Halo {
        v_r: Vec<f64>,
        v_phi: Vec<f64>,
        v_z: Vec<f64>,
    },
}

impl VelocitySample {
    pub fn len(&self) -> usize {
        match self {
            VelocitySample::Disk { u, .. } => u.len(),
            VelocitySample::Halo { v_r, .. } => v_r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Velocity dispersions (σ_U, σ_V, σ_W) of the thin disk at a given age in
/// Gyr.
pub fn thin_disk_dispersions(age: f64) -> (f64, f64, f64) {
    let sigma_u = U_V10 * ((age + U_TAU) / (10.0 + U_TAU)).powf(U_BETA);
    let sigma_v = V_V10 * ((age + V_TAU) / (10.0 + V_TAU)).powf(V_BETA);
    let sigma_w = W_V10 * ((age + W_TAU) / (10.0 + W_TAU)).powf(W_BETA);
    (sigma_u, sigma_v, sigma_w)
}

/// Draw one velocity set per star from the population's dispersion
/// relations.
///
/// Thin-disk draws are age-dependent per star; thick-disk and halo draws use
/// fixed dispersions (ages only set the number of draws there). The V
/// component of the thin disk is asymmetric-drift corrected:
/// `mean(V) = -σ_V(age)² / 74`.
///
/// # Errors
/// `EmptyAges` if `ages` is empty.
pub fn draw_velocities(
    rng: &mut ChaChaRng,
    ages: &[f64],
    kind: PopulationKind,
) -> Result<VelocitySample, GalaxyError> {
    if ages.is_empty() {
        return Err(GalaxyError::EmptyAges);
    }

    match kind {
        PopulationKind::ThinDisk => {
            let mut u = Vec::with_capacity(ages.len());
            let mut v = Vec::with_capacity(ages.len());
            let mut w = Vec::with_capacity(ages.len());
            for &age in ages {
                let (sigma_u, sigma_v, sigma_w) = thin_disk_dispersions(age);
                let v_off = -(sigma_v * sigma_v) / ASYMMETRIC_DRIFT_K;
                u.push(sample_gaussian(rng, 0.0, sigma_u));
                v.push(sample_gaussian(rng, v_off, sigma_v));
                w.push(sample_gaussian(rng, 0.0, sigma_w));
            }
            Ok(VelocitySample::Disk { u, v, w })
        }
        PopulationKind::ThickDisk => {
            let n = ages.len();
            let u = (0..n)
                .map(|_| sample_gaussian(rng, 0.0, THICK_SIGMA_U))
                .collect();
            let v = (0..n)
                .map(|_| sample_gaussian(rng, THICK_V_DRIFT, THICK_SIGMA_V))
                .collect();
            let w = (0..n)
                .map(|_| sample_gaussian(rng, 0.0, THICK_SIGMA_W))
                .collect();
            Ok(VelocitySample::Disk { u, v, w })
        }
        PopulationKind::Halo => {
            let n = ages.len();
            let v_r = (0..n)
                .map(|_| sample_gaussian(rng, HALO_VR.0, HALO_VR.1))
                .collect();
            let v_phi = (0..n)
                .map(|_| sample_gaussian(rng, HALO_VPHI.0, HALO_VPHI.1))
                .collect();
            let v_z = (0..n)
                .map(|_| sample_gaussian(rng, HALO_VZ.0, HALO_VZ.1))
                .collect();
            Ok(VelocitySample::Halo { v_r, v_phi, v_z })
        }
    }
}
