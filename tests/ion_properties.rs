//! Property tests for the ion model.
//!
//! These tests check invariants that must hold for every valid ion:
//! - Charge states form a contiguous run
//! - Mobility signs match charge signs
//! - Temperature adjustment is idempotent and exact at the reference temperature
//! - Speciation is a probability distribution
//! - Serialisation round-trips

use approx::assert_relative_eq;
use ionize::prelude::*;
use ionize::{valences_from_floats, ValidationError};
use is_close::is_close;
use std::collections::BTreeSet;

/// Solvent with fixed properties
#[derive(Debug, Clone, Copy)]
struct FixedSolvent {
    viscosity: f64,
    dielectric: f64,
}

impl Solvent for FixedSolvent {
    fn viscosity(&self, _temperature: f64) -> f64 {
        self.viscosity
    }

    fn dielectric(&self, _temperature: f64) -> f64 {
        self.dielectric
    }
}

fn library() -> Vec<Ion> {
    vec![
        Ion::new("acetic acid", -1, 4.756, -42.4e-9).unwrap(),
        Ion::new("tris", 1, 8.076, 29.5e-9).unwrap(),
        Ion::builder(
            "citric acid",
            vec![-3, -2, -1],
            vec![6.40, 4.76, 3.13],
            vec![-70.4e-9, -54.7e-9, -28.7e-9],
        )
        .with_enthalpy(vec![3380.0, -2230.0, -4180.0])
        .with_heat_capacity(vec![-254.0, -178.0, -131.0])
        .build()
        .unwrap(),
        Ion::new(
            "histidine",
            vec![2, 1, -1],
            vec![1.8, 6.04, 9.33],
            vec![57.6e-9, 28.8e-9, -28.8e-9],
        )
        .unwrap(),
        Ion::new(
            "lysine",
            vec![-1, 1, 2],
            vec![10.7, 9.06, 2.15],
            vec![-25.0e-9, 26.0e-9, 52.0e-9],
        )
        .unwrap(),
    ]
}

mod charge_states {
    use super::*;

    #[test]
    fn test_charge_states_are_contiguous() {
        for ion in library() {
            let z = ion.z();
            let min = *z.iter().min().unwrap();
            let max = *z.iter().max().unwrap();
            let actual: BTreeSet<i32> = z.iter().copied().collect();
            let expected: BTreeSet<i32> = (min..=max).filter(|&v| v != 0).collect();
            assert_eq!(actual, expected, "{}", ion.name());
            assert!(z.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn test_gap_fails_validation() {
        let result = Ion::new("gap", vec![-2, 1], vec![3.0, 9.0], vec![-5e-8, 3e-8]);
        assert!(matches!(
            result,
            Err(IonizeError::Validation(
                ValidationError::MissingChargeStates { .. }
            ))
        ));
    }

    #[test]
    fn test_float_valences() {
        assert_eq!(valences_from_floats(&[-1.0, 1.0]).unwrap(), vec![-1, 1]);
        assert_eq!(
            valences_from_floats(&[-1.0, 0.5]),
            Err(ValidationError::NonIntegerValence(0.5))
        );
    }

    #[test]
    fn test_z0_contains_neutral_state() {
        for ion in library() {
            let z0 = ion.z0();
            assert_eq!(z0.len(), ion.z().len() + 1);
            assert!(z0.contains(&0));
            assert!(z0.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

mod sign_consistency {
    use super::*;

    #[test]
    fn test_mobility_signs_match_charges() {
        for mut ion in library() {
            for temperature in [25.0, 5.0, 60.0] {
                ion.set_temperature(temperature);
                for (&z, &mobility) in ion.z().iter().zip(ion.absolute_mobility()) {
                    assert_eq!(z.signum() as f64, mobility.signum(), "{}", ion.name());
                }
            }
        }
    }

    #[test]
    fn test_mismatched_sign_is_coerced_with_warning() {
        let ion = Ion::new("cation", vec![1], vec![9.0], vec![-5e-8]).unwrap();
        assert_eq!(ion.absolute_mobility(), &[5e-8]);
        assert_eq!(ion.warnings().len(), 1);
        assert!(matches!(
            ion.warnings()[0],
            IonWarning::MobilitySignMismatch { z: 1, .. }
        ));
    }
}

mod temperature {
    use super::*;

    #[test]
    fn test_reference_equality() {
        for ion in library() {
            assert_eq!(ion.pka(), ion.pka_ref(), "{}", ion.name());
            assert_eq!(ion.absolute_mobility(), ion.absolute_mobility_ref());
        }
    }

    #[test]
    fn test_idempotence() {
        for mut ion in library() {
            ion.set_temperature(37.0);
            let pka = ion.pka().to_vec();
            let mobility = ion.absolute_mobility().to_vec();
            let z0 = ion.z0().to_vec();

            ion.set_temperature(ion.temperature());
            for (a, b) in ion.pka().iter().zip(&pka) {
                assert!(is_close!(*a, *b));
            }
            for (a, b) in ion.absolute_mobility().iter().zip(&mobility) {
                assert!(is_close!(*a, *b));
            }
            assert_eq!(ion.z0(), z0.as_slice());
        }
    }

    #[test]
    fn test_pka_without_thermal_data_is_invariant() {
        let mut ion = Ion::new("tris", 1, 8.076, 29.5e-9).unwrap();
        ion.set_temperature(50.0);
        assert_eq!(ion.pka(), &[8.076]);
    }

    #[test]
    fn test_warmer_water_raises_mobility() {
        let mut ion = Ion::new("acetic acid", -1, 4.756, -42.4e-9).unwrap();
        ion.set_temperature(37.0);
        assert!(ion.absolute_mobility()[0] < -42.4e-9);
    }

    #[test]
    fn test_solvent_substitution() {
        let solvent = FixedSolvent {
            viscosity: 1e-3,
            dielectric: 78.3,
        };
        let ion = Ion::builder("acetic acid", -1, 4.756, -42.4e-9)
            .with_solvent(solvent)
            .with_temperature(37.0)
            .build()
            .unwrap();
        assert!(is_close!(ion.absolute_mobility()[0], -42.4e-9));
    }

    #[test]
    fn test_non_default_reference_temperature() {
        let ion = Ion::builder("acetic acid", -1, 4.756, -42.4e-9)
            .with_enthalpy(vec![-400.0])
            .with_reference_temperature(20.0)
            .with_temperature(20.0)
            .build()
            .unwrap();
        assert_eq!(ion.pka(), &[4.756]);
        assert_eq!(ion.reference_temperature(), 20.0);
    }
}

mod speciation {
    use super::*;

    #[test]
    fn test_fractions_are_normalised() {
        for ion in library() {
            for step in 0..=360 {
                let ph = -2.0 + step as f64 / 20.0;
                let fraction = ion.ionization_fraction(ph);
                assert_eq!(fraction.len(), ion.z0().len());
                assert!(fraction.iter().all(|&f| f >= 0.0));
                let total: f64 = fraction.iter().sum();
                assert!((total - 1.0).abs() < 1e-9, "{} at pH {ph}", ion.name());

                let fraction = ion.ionization_fraction_at(ph, 0.1, 25.0);
                let total: f64 = fraction.iter().sum();
                assert!((total - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_acetic_acid_scenario() {
        let ion = Ion::new("acetic_acid", vec![-1], vec![4.76], vec![-4.24e-8]).unwrap();
        assert_eq!(ion.ka(), vec![10.0_f64.powf(-4.76)]);
        assert_eq!(ion.z0(), &[-1, 0]);
        let fraction = ion.ionization_fraction(4.76);
        assert_relative_eq!(fraction[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(fraction[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_neutral_activity_is_one() {
        for ion in library() {
            let gamma = ion.activity_coefficient(0.1, 25.0);
            let neutral = ion.z0().iter().position(|&z| z == 0).unwrap();
            assert_eq!(gamma[neutral], 1.0);
        }
    }
}

mod transport {
    use super::*;

    #[test]
    fn test_diffusivity_positive() {
        for ion in library() {
            for ph in [0.0, 3.0, 7.0, 11.0, 14.0] {
                assert!(ion.diffusivity(ph) > 0.0, "{} at pH {ph}", ion.name());
            }
        }
    }

    #[test]
    fn test_diffusivity_magnitude() {
        // Acetate diffusivity is about 1.1e-9 m^2/s
        let ion = Ion::new("acetic acid", -1, 4.756, -42.4e-9).unwrap();
        assert_relative_eq!(ion.diffusivity(7.0), 1.09e-9, max_relative = 0.02);
    }

    #[test]
    fn test_effective_mobility_sign() {
        for ion in library() {
            let mobility = ion.effective_mobility(14.0, 0.0, 25.0);
            assert!(mobility <= 0.0 || ion.z().iter().all(|&z| z > 0));
        }
        let tris = Ion::new("tris", 1, 8.076, 29.5e-9).unwrap();
        assert!(tris.effective_mobility(7.0, 0.01, 25.0) > 0.0);
    }

    #[test]
    fn test_ionic_strength_reduces_effective_mobility() {
        let ion = Ion::new("acetic acid", -1, 4.756, -42.4e-9).unwrap();
        let dilute = ion.effective_mobility(9.0, 0.0, 25.0);
        let concentrated = ion.effective_mobility(9.0, 0.05, 25.0);
        assert!(concentrated.abs() < dilute.abs());
    }

    #[test]
    fn test_molar_conductivity_consistent_with_effective_mobility() {
        // For a single-state ion, conductivity is |z| F 1000 times the effective mobility
        let ion = Ion::new("acetic acid", -1, 4.756, -42.4e-9).unwrap();
        let mobility = ion.effective_mobility(6.0, 0.01, 25.0);
        let conductivity = ion.molar_conductivity(6.0, 0.01, 25.0);
        assert_relative_eq!(
            conductivity,
            -mobility * 1000.0 * ionize::constants::FARADAY,
            max_relative = 1e-12
        );
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_round_trip_preserves_properties() {
        for ion in library() {
            let text = ion.serialize().unwrap();
            let rebuilt = Ion::deserialize(&text).unwrap();
            assert_eq!(rebuilt.z(), ion.z());
            assert_eq!(rebuilt.pka(), ion.pka());
            assert_eq!(rebuilt.absolute_mobility(), ion.absolute_mobility());
        }
    }

    #[test]
    fn test_round_trip_at_other_temperature() {
        for mut ion in library() {
            ion.set_temperature(40.0);
            let record = IonRecord::from_json(&ion.serialize().unwrap()).unwrap();
            let rebuilt = IonBuilder::from_record(record)
                .unwrap()
                .with_temperature(40.0)
                .build()
                .unwrap();
            assert_eq!(rebuilt.pka(), ion.pka());
            assert_eq!(rebuilt.absolute_mobility(), ion.absolute_mobility());
        }
    }

    #[test]
    fn test_save_load() {
        let dir = tempfile::tempdir().unwrap();
        for (index, ion) in library().into_iter().enumerate() {
            let path = dir.path().join(format!("ion_{index}.json"));
            ion.save(&path).unwrap();
            let loaded = Ion::load(&path).unwrap();
            assert_eq!(loaded.record(), ion.record());
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Ion::load(dir.path().join("missing.json")),
            Err(IonizeError::Io(_))
        ));
    }
}
