//! Line-of-sight volume integration.
//!
//! Integrates density × the spherical volume element d² along a sight line,
//! giving the unnormalized stellar mass enclosed between two distances.

use crate::coords::to_cylindrical;
use crate::density::{profile_density, DensityProfile};
use crate::error::GalaxyError;
use crate::params::GalacticModel;

/// Grid resolution of the line-of-sight integral.
pub const DEFAULT_RESOLUTION: usize = 1000;

/// Unnormalized mass enclosed between `d_min` and `d_max` along the sight
/// line `(l, b)`, at the default 1000-sample resolution.
///
/// `l` and `b` are in radians, distances and scale parameters in pc.
/// Deterministic: no randomness is involved.
///
/// # Errors
/// `InvalidDistanceRange` if `d_min >= d_max`, `NonPositiveScale` for
/// non-physical scale parameters.
pub fn volume(
    model: &GalacticModel,
    l: f64,
    b: f64,
    d_min: f64,
    d_max: f64,
    scale_h: f64,
    scale_l: f64,
    profile: DensityProfile,
) -> Result<f64, GalaxyError> {
    volume_with_resolution(
        model,
        l,
        b,
        d_min,
        d_max,
        scale_h,
        scale_l,
        profile,
        DEFAULT_RESOLUTION,
    )
}

/// Same as [`volume`], with an explicit grid resolution.
#[allow(clippy::too_many_arguments)]
pub fn volume_with_resolution(
    model: &GalacticModel,
    l: f64,
    b: f64,
    d_min: f64,
    d_max: f64,
    scale_h: f64,
    scale_l: f64,
    profile: DensityProfile,
    resolution: usize,
) -> Result<f64, GalaxyError> {
    if d_min >= d_max {
        return Err(GalaxyError::InvalidDistanceRange { d_min, d_max });
    }
    if scale_h <= 0.0 {
        return Err(GalaxyError::NonPositiveScale(scale_h));
    }
    if scale_l <= 0.0 {
        return Err(GalaxyError::NonPositiveScale(scale_l));
    }

    let n = resolution.max(2);
    let step = (d_max - d_min) / (n - 1) as f64;

    // Trapezoidal rule over density(d) * d^2
    let integrand = |d: f64| {
        let p = to_cylindrical(model, l, b, d);
        profile_density(model, profile, p.r, p.z, scale_h, scale_l) * d * d
    };

    let mut sum = 0.0;
    let mut prev = integrand(d_min);
    for i in 1..n {
        let d = d_min + step * i as f64;
        let cur = integrand(d);
        sum += 0.5 * (prev + cur) * step;
        prev = cur;
    }

    Ok(sum)
}
