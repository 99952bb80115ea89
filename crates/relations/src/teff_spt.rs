//! Spectral type ↔ effective temperature relations.
//!
//! Two relations cover the sequence: the Kirkpatrick (2021) piecewise
//! polynomials over types 20–42 (L0 and later) and the Pecaut & Mamajek
//! (2013) interpolation table from early types through the L/T transition.
//! The pipeline switches at type 20 (temperature side: 2000 K).

use rand_chacha::ChaChaRng;

use crate::polynomial::{PiecewiseRelation, PolynomialRelation};
use crate::sampling::sample_gaussian;

/// One-sigma scatter of the Pecaut & Mamajek table, in K.
pub const PECAUT_SCATTER: f64 = 108.0;

/// Grid resolution for numeric inversion of the Kirkpatrick fit.
const INVERSION_GRID: usize = 5000;

/// Spectral types of the Pecaut & Mamajek (2013) table. Numeric encoding:
/// 0 = K0 through 10 = M0, 20 = L0, 30 = T0, 40 = Y0.
const PECAUT_SPT: [f64; 67] = [
    0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 8.0, 9.0, 10.0,
    10.5, 11.0, 11.5, 12.0, 12.5, 13.0, 13.5, 14.0, 14.5, 15.0, 15.5, 16.0, 16.5, 17.0, 17.5,
    18.0, 18.5, 19.0, 19.5, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 26.0, 27.0, 28.0, 29.0, 30.0,
    31.0, 32.0, 33.0, 34.0, 34.5, 35.0, 35.5, 36.0, 37.0, 37.5, 38.0, 38.5, 39.0, 39.5, 40.0,
    40.5, 41.0, 41.5, 42.0,
];

/// Effective temperatures aligned with [`PECAUT_SPT`], in K.
const PECAUT_TEFF: [f64; 67] = [
    5280.0, 5240.0, 5170.0, 5140.0, 5040.0, 4990.0, 4830.0, 4700.0, 4600.0, 4540.0, 4410.0,
    4330.0, 4230.0, 4190.0, 4070.0, 4000.0, 3940.0, 3870.0, 3800.0, 3700.0, 3650.0, 3550.0,
    3500.0, 3410.0, 3250.0, 3200.0, 3100.0, 3030.0, 3000.0, 2850.0, 2710.0, 2650.0, 2600.0,
    2500.0, 2440.0, 2400.0, 2320.0, 2250.0, 2100.0, 1960.0, 1830.0, 1700.0, 1590.0, 1490.0,
    1410.0, 1350.0, 1300.0, 1260.0, 1230.0, 1200.0, 1160.0, 1120.0, 1090.0, 1050.0, 1010.0,
    960.0, 840.0, 770.0, 700.0, 610.0, 530.0, 475.0, 420.0, 390.0, 350.0, 325.0, 250.0,
];

/// Kirkpatrick (2021) spt → Teff piecewise polynomial, valid over types
/// 20–42.
pub fn kirkpatrick_spt_teff() -> PiecewiseRelation {
    PiecewiseRelation::new(vec![
        PolynomialRelation::new(vec![2237.5, -144.96, 4.0301], 20.0, 134.0, (20.0, 28.75)),
        PolynomialRelation::new(vec![1437.9, -18.309], 20.0, 79.0, (28.75, 34.75)),
        PolynomialRelation::new(vec![5141.3, -368.65, 6.7301], 20.0, 79.0, (34.75, 42.0)),
    ])
}

/// Linear interpolation over (x, y) pairs; `xs` may be in any monotone
/// order. NaN outside the table.
fn interp(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    // Walk pairs in ascending-x orientation
    let ascending = xs[0] < xs[xs.len() - 1];
    let at = |i: usize| {
        if ascending {
            (xs[i], ys[i])
        } else {
            (xs[xs.len() - 1 - i], ys[ys.len() - 1 - i])
        }
    };
    let n = xs.len();
    let (x0, _) = at(0);
    let (xn, _) = at(n - 1);
    if x < x0 || x > xn {
        return f64::NAN;
    }
    for i in 0..n - 1 {
        let (xa, ya) = at(i);
        let (xb, yb) = at(i + 1);
        if x >= xa && x <= xb {
            if xb == xa {
                return ya;
            }
            return ya + (x - xa) * (yb - ya) / (xb - xa);
        }
    }
    f64::NAN
}

/// Mean Kirkpatrick temperature for a spectral type, NaN outside 20–42.
pub fn spt_to_teff_kirkpatrick(spt: f64) -> f64 {
    kirkpatrick_spt_teff().evaluate(spt)
}

/// Spectral type for a temperature by numeric inversion of the Kirkpatrick
/// fit, NaN when the temperature is not reached over types 20–42.
pub fn teff_to_spt_kirkpatrick(teff: f64) -> f64 {
    kirkpatrick_spt_teff().invert_on_grid(teff, INVERSION_GRID)
}

/// Temperature sampled from the Pecaut table at a spectral type:
/// Normal(interp(spt), 108 K). NaN outside the table.
pub fn spt_to_teff_pecaut(rng: &mut ChaChaRng, spt: f64) -> f64 {
    let mean = interp(&PECAUT_SPT, &PECAUT_TEFF, spt);
    if mean.is_nan() {
        return f64::NAN;
    }
    sample_gaussian(rng, mean, PECAUT_SCATTER)
}

/// Spectral type from the Pecaut table at a temperature, with the 108 K
/// table scatter applied to the input before inverse interpolation. NaN
/// outside the table.
pub fn teff_to_spt_pecaut(rng: &mut ChaChaRng, teff: f64) -> f64 {
    let scattered = sample_gaussian(rng, teff, PECAUT_SCATTER);
    interp(&PECAUT_TEFF, &PECAUT_SPT, scattered)
}

/// Assign spectral types to a set of effective temperatures.
///
/// Kirkpatrick inversion for the cold end, Pecaut for everything warmer
/// than 2000 K (the Kirkpatrick fit does not reach those temperatures).
/// NaN temperatures stay NaN.
pub fn assign_spectral_types(rng: &mut ChaChaRng, teffs: &[f64]) -> Vec<f64> {
    teffs
        .iter()
        .map(|&teff| {
            if teff.is_nan() {
                f64::NAN
            } else if teff > 2000.0 {
                teff_to_spt_pecaut(rng, teff)
            } else {
                teff_to_spt_kirkpatrick(teff)
            }
        })
        .collect()
}

/// Temperature of a combined (unresolved binary) spectral type.
///
/// Kirkpatrick mean fit for types later than 20, Pecaut draw otherwise,
/// matching the single-star switch; NaN in, NaN out.
pub fn combined_binary_teff(rng: &mut ChaChaRng, spt: f64) -> f64 {
    if spt.is_nan() {
        f64::NAN
    } else if spt > 20.0 {
        spt_to_teff_kirkpatrick(spt)
    } else {
        spt_to_teff_pecaut(rng, spt)
    }
}
