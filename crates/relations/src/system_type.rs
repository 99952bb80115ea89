//! Combined spectral type of an unresolved binary.
//!
//! The blend of two late-type components is estimated photometrically: both
//! component types map to J-band absolute magnitudes, the fluxes add, and
//! the combined magnitude is inverted back to a type on the same relation.

use crate::absolute_mags::dupuy_j_mko;
use crate::polynomial::PiecewiseRelation;

/// Primary spectral types the combination is calibrated for.
pub const SYSTEM_TYPE_PRIMARY_RANGE: (f64, f64) = (15.0, 39.0);

const INVERSION_GRID: usize = 2000;

/// Estimate the combined spectral type of a binary from its component
/// types.
///
/// Valid only for primaries in [15, 39]; anything else (or a NaN component)
/// returns NaN — callers that want the "extreme primary dominates" policy
/// apply it themselves. The secondary is clamped into the same range, since
/// a companion more than the full range fainter contributes no measurable
/// flux anyway.
pub fn system_spectral_type(primary: f64, secondary: f64) -> f64 {
    let (lo, hi) = SYSTEM_TYPE_PRIMARY_RANGE;
    if primary.is_nan() || secondary.is_nan() || primary < lo || primary > hi {
        return f64::NAN;
    }
    let secondary = secondary.clamp(lo, hi);

    // Range masking is handled here, not by the polynomial: the fit is
    // evaluated raw so a type-15 primary (just below the Dupuy validity
    // floor) still blends smoothly.
    let fit = dupuy_j_mko();
    let m_primary = fit.evaluate_raw(primary);
    let m_secondary = fit.evaluate_raw(secondary);

    let flux = 10f64.powf(-0.4 * m_primary) + 10f64.powf(-0.4 * m_secondary);
    let m_combined = -2.5 * flux.log10();

    // Invert on the same fit, restricted to the calibrated range so the
    // answer stays comparable to the inputs
    let mut bounded = fit;
    bounded.range = SYSTEM_TYPE_PRIMARY_RANGE;
    let inverted = PiecewiseRelation::new(vec![bounded]).invert_on_grid(m_combined, INVERSION_GRID);

    // An equal-flux pair is 0.75 mag brighter than its primary, which can
    // push the combined magnitude just past the bright end of the fit; the
    // blend cannot be earlier than the brighter component
    if inverted.is_nan() {
        primary.min(secondary)
    } else {
        inverted
    }
}
