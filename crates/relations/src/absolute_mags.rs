//! Absolute-magnitude relations keyed by filter name.

use std::collections::BTreeMap;

use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::polynomial::PolynomialRelation;

const DUPUY_J_MKO_COEFFS: [f64; 7] = [
    -28.3129, 16.3986, -2.74405, 0.232771, -0.0103332, 0.000227641, -1.94920e-6,
];

/// Dupuy & Liu (2012) absolute-magnitude polynomials, valid over spectral
/// types 16–39 with x shifted by 10.
fn dupuy2012_fits() -> Vec<(&'static str, Vec<f64>, f64)> {
    vec![
        (
            "y_mko",
            vec![
                -35.1560, 19.5444, -3.26895, 0.279438, -0.0126151, 0.000285027, -2.52638e-6,
            ],
            0.40,
        ),
        ("j_mko", DUPUY_J_MKO_COEFFS.to_vec(), 0.40),
        (
            "h_mko",
            vec![
                -29.7306, 16.9138, -2.85705, 0.245209, -0.0110960, 0.000251601, -2.24083e-6,
            ],
            0.40,
        ),
        (
            "ks_mko",
            vec![
                -15.2200, 10.1248, -1.63930, 0.135177, -0.00584342, 0.000125731, -1.04935e-6,
            ],
            0.38,
        ),
        (
            "j_2mass",
            vec![
                -9.67994, 8.16362, -1.33053, 0.111715, -0.00482973, 0.000100820, -7.84614e-7,
            ],
            0.40,
        ),
        (
            "h_2mass",
            vec![
                -11.7526, 9.00279, -1.50370, 0.129202, -0.00580847, 0.000129363, -1.11499e-6,
            ],
            0.40,
        ),
        (
            "ks_2mass",
            vec![11.0114, -0.867471, 0.134163, -0.00642118, 1.06693e-4],
            0.43,
        ),
    ]
}

/// The Dupuy J (MKO) fit by itself; the binary combiner blends component
/// fluxes in this band.
pub(crate) fn dupuy_j_mko() -> PolynomialRelation {
    PolynomialRelation::new(DUPUY_J_MKO_COEFFS.to_vec(), 10.0, 0.40, (16.0, 39.0))
}

/// Kirkpatrick (2021) spt → M_J (MKO) fit, valid over types 20–42.
///
/// Used by the binary system-type combiner for the late-type end.
pub fn kirkpatrick_m_j() -> PolynomialRelation {
    PolynomialRelation::new(
        vec![
            11.808, 0.3379, -0.19013, 0.071759, -0.0099829, 0.00063147, -1.8672e-5, 2.1526e-7,
        ],
        20.0,
        0.6,
        (20.0, 42.0),
    )
}

/// Registry of absolute-magnitude fits, one per filter name.
///
/// Filter keys follow `<band>_<system>` (e.g. `j_2mass`, `ks_mko`).
/// Queries for unknown filters or out-of-range spectral types return NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeRelations {
    fits: BTreeMap<String, PolynomialRelation>,
}

impl MagnitudeRelations {
    /// The Dupuy & Liu (2012) J/H/Ks (+MKO Y) set, valid types 16–39.
    pub fn dupuy2012() -> Self {
        let mut fits = BTreeMap::new();
        for (filter, coeffs, scatter) in dupuy2012_fits() {
            fits.insert(
                filter.to_string(),
                PolynomialRelation::new(coeffs, 10.0, scatter, (16.0, 39.0)),
            );
        }
        Self { fits }
    }

    /// Build from explicit per-filter fits.
    pub fn from_fits(fits: BTreeMap<String, PolynomialRelation>) -> Self {
        Self { fits }
    }

    pub fn get(&self, filter: &str) -> Option<&PolynomialRelation> {
        self.fits.get(filter)
    }

    /// Filter names in deterministic order.
    pub fn filters(&self) -> impl Iterator<Item = &str> {
        self.fits.keys().map(String::as_str)
    }

    /// Mean absolute magnitude for a filter at a spectral type, NaN for
    /// unknown filters or out-of-range types.
    pub fn absolute_magnitude(&self, filter: &str, spt: f64) -> f64 {
        self.fits.get(filter).map_or(f64::NAN, |p| p.evaluate(spt))
    }

    /// Absolute magnitude drawn with the fit's scatter, NaN for unknown
    /// filters or out-of-range types.
    pub fn sample_magnitude(&self, rng: &mut ChaChaRng, filter: &str, spt: f64) -> f64 {
        self.fits
            .get(filter)
            .map_or(f64::NAN, |p| p.sample(rng, spt))
    }
}
