use serde::{Deserialize, Serialize};

use crate::params::GalacticModel;

/// A point in galactocentric cylindrical coordinates.
///
/// Derived deterministically from a heliocentric line of sight via
/// [`to_cylindrical`]. Invariant: `r >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalacticPoint {
    /// Cylindrical galactocentric radius in pc
    pub r: f64,
    /// Height above the galactic midplane in pc
    pub z: f64,
}

/// Convert a heliocentric position (galactic longitude `l`, latitude `b`,
/// distance `d`) to galactocentric cylindrical coordinates.
///
/// `l` and `b` are in radians, `d` in pc. Uses the solar position carried by
/// the model, including the tilt correction for the Sun's height above the
/// midplane.
///
/// # Example
/// ```
/// use galaxy::{to_cylindrical, GalacticModel};
///
/// let model = GalacticModel::default();
/// let p = to_cylindrical(&model, 0.0, 0.0, 0.0);
/// assert!((p.r - model.r_sun).abs() < 1e-9);
/// ```
pub fn to_cylindrical(model: &GalacticModel, l: f64, b: f64, d: f64) -> GalacticPoint {
    let r = ((d * b.cos()).powi(2)
        + model.r_sun * (model.r_sun - 2.0 * d * b.cos() * l.cos()))
    .sqrt();
    let z = model.z_sun + d * (b - (model.z_sun / model.r_sun).atan()).sin();
    GalacticPoint { r, z }
}
