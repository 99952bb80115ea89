use crate::config::{Imf, PopulationConfig};
use crate::error::PopulationError;

#[test]
fn defaults_match_the_reference_run() {
    let config = PopulationConfig::default();

    assert_eq!(config.imf, Imf::Power(-0.6));
    assert_eq!(config.binary_fraction, 0.2);
    assert_eq!(config.binary_q, 4.0);
    assert_eq!(config.age_range, (0.01, 14.0));
    assert_eq!(config.mass_range, (0.01, 1.0));
    assert_eq!(config.n_sample, 10_000);
    assert!(config.validate().is_ok());
}

#[test]
fn rejects_binary_fraction_outside_unit_interval() {
    let config = PopulationConfig {
        binary_fraction: 1.0,
        ..PopulationConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(PopulationError::InvalidBinaryFraction(1.0))
    );

    let config = PopulationConfig {
        binary_fraction: -0.1,
        ..PopulationConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn rejects_a_non_positive_mass_ratio_exponent() {
    let config = PopulationConfig {
        binary_q: 0.0,
        ..PopulationConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(PopulationError::NonPositiveBinaryQ(0.0))
    );

    let config = PopulationConfig {
        binary_q: -1.0,
        ..PopulationConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn rejects_empty_ranges() {
    let config = PopulationConfig {
        age_range: (5.0, 5.0),
        ..PopulationConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(PopulationError::InvalidRange {
            name: "age",
            min: 5.0,
            max: 5.0,
        })
    );

    let config = PopulationConfig {
        mass_range: (0.5, 0.1),
        ..PopulationConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(PopulationError::InvalidRange {
            name: "mass",
            min: 0.5,
            max: 0.1,
        })
    );
}

#[test]
fn rejects_zero_sample_size() {
    let config = PopulationConfig {
        n_sample: 0,
        ..PopulationConfig::default()
    };
    assert_eq!(config.validate(), Err(PopulationError::EmptySample));
}
