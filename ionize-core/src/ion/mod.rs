//! The ion model
//!
//! An [`Ion`] is a dissolved species with one or more charge (valence) states. It owns
//! the reference-state properties of every state and keeps a temperature-adjusted copy
//! of them in sync with its working temperature.
//!
//! Methods are grouped by concern:
//! - [`charge`]: charge-state validation and ordering
//! - [`temperature`]: pKa and mobility temperature corrections
//! - [`equilibrium`]: acidity constants, activity coefficients and speciation
//! - [`transport`]: ionic-strength corrected mobility, conductivity and diffusivity
//! - [`record`]: the serialized reference record

pub mod charge;
pub mod equilibrium;
pub mod record;
pub mod temperature;
pub mod transport;

use crate::constants::REFERENCE_TEMPERATURE;
use crate::errors::{IonWarning, IonizeResult, ValidationError};
use crate::solvent::{Aqueous, Solvent};
use crate::values::{FloatValue, OneOrMany};
use charge::{charge_order, charge_sign, permute, validate_charge_states, with_neutral};
use temperature::{walden_mobility, NightingaleData, Thermodynamics};

/// An ion dissolved in a solvent
///
/// The reference properties (`pka_ref`, `absolute_mobility_ref`) are given at
/// `reference_temperature`. The working properties (`pka`, `absolute_mobility`) are the
/// reference properties corrected to `temperature` and are recomputed by
/// [`Ion::set_temperature`].
///
/// All per-state vectors are index-aligned with `z`, which is sorted ascending.
///
/// ```
/// use ionize_core::Ion;
///
/// let acetic = Ion::new("acetic acid", -1, 4.76, -4.24e-8).unwrap();
/// assert_eq!(acetic.z0(), &[-1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Ion<S = Aqueous> {
    name: String,
    z: Vec<i32>,
    pka_ref: Vec<FloatValue>,
    absolute_mobility_ref: Vec<FloatValue>,
    thermodynamics: Thermodynamics,
    nightingale: Option<NightingaleData>,
    temperature: FloatValue,
    reference_temperature: FloatValue,
    solvent: S,

    pka: Vec<FloatValue>,
    absolute_mobility: Vec<FloatValue>,
    z0: Vec<i32>,
    warnings: Vec<IonWarning>,
}

impl Ion<Aqueous> {
    /// Create an ion in water at 25 C from reference properties at 25 C
    ///
    /// Scalars and sequences are both accepted for the per-state inputs.
    ///
    /// # Arguments
    ///
    /// * `name` - Chemical name of the ion
    /// * `z` - Valence of each state
    /// * `pka_ref` - pKa of each state at the reference temperature
    /// * `absolute_mobility_ref` - Signed absolute mobility of each state at the
    ///   reference temperature, in m^2/V/s (typically O(1e-8))
    pub fn new(
        name: impl Into<String>,
        z: impl Into<OneOrMany<i32>>,
        pka_ref: impl Into<OneOrMany<FloatValue>>,
        absolute_mobility_ref: impl Into<OneOrMany<FloatValue>>,
    ) -> IonizeResult<Self> {
        IonBuilder::new(name, z, pka_ref, absolute_mobility_ref).build()
    }

    /// Start building an ion with optional thermal data, calibration or temperatures
    pub fn builder(
        name: impl Into<String>,
        z: impl Into<OneOrMany<i32>>,
        pka_ref: impl Into<OneOrMany<FloatValue>>,
        absolute_mobility_ref: impl Into<OneOrMany<FloatValue>>,
    ) -> IonBuilder<Aqueous> {
        IonBuilder::new(name, z, pka_ref, absolute_mobility_ref)
    }
}

impl<S: Solvent> Ion<S> {
    /// Change the working temperature and recompute the temperature-dependent properties
    ///
    /// Returns the same ion so calls can be chained. Setting the current temperature
    /// again reproduces the same derived values.
    pub fn set_temperature(&mut self, temperature: FloatValue) -> &mut Self {
        self.temperature = temperature;
        self.temperature_adjust();
        self
    }

    /// Recompute `pka`, `absolute_mobility` and `z0` for the current temperature
    fn temperature_adjust(&mut self) {
        log::trace!(
            "Adjusting {} from {} C to {} C",
            self.name,
            self.reference_temperature,
            self.temperature
        );
        self.warnings.retain(|warning| {
            !matches!(
                warning,
                IonWarning::OutsideCalibrationRange { .. }
                    | IonWarning::AdjustedMobilitySignMismatch { .. }
            )
        });

        let (pka, mut absolute_mobility) = if self.temperature == self.reference_temperature {
            (self.pka_ref.clone(), self.absolute_mobility_ref.clone())
        } else {
            let pka = self.thermodynamics.correct_pka(
                &self.pka_ref,
                self.temperature,
                self.reference_temperature,
            );
            (pka, self.corrected_mobility())
        };

        // An extrapolated calibration can flip the sign of a mobility.
        for (index, (&valence, mobility)) in
            self.z.iter().zip(absolute_mobility.iter_mut()).enumerate()
        {
            let coerced = mobility.abs() * charge_sign(valence);
            if coerced != *mobility {
                let warning = IonWarning::AdjustedMobilitySignMismatch {
                    index,
                    z: valence,
                    temperature: self.temperature,
                };
                log::warn!("{}: {}", self.name, warning);
                self.warnings.push(warning);
                *mobility = coerced;
            }
        }

        // States are kept sorted by charge; all other methods rely on it.
        let order = charge_order(&self.z);
        let z = permute(&self.z, &order);
        debug_assert!(validate_charge_states(&z).is_ok());

        self.pka = permute(&pka, &order);
        self.absolute_mobility = permute(&absolute_mobility, &order);
        self.z0 = with_neutral(&z);
        self.z = z;
    }

    fn corrected_mobility(&mut self) -> Vec<FloatValue> {
        match &self.nightingale {
            Some(data) => {
                if !data.in_range(self.temperature) {
                    let warning = IonWarning::OutsideCalibrationRange {
                        temperature: self.temperature,
                        min: data.min,
                        max: data.max,
                    };
                    log::warn!("{}: {}", self.name, warning);
                    self.warnings.push(warning);
                }
                self.z
                    .iter()
                    .map(|&z| data.mobility(&self.solvent, charge_sign(z), self.temperature))
                    .collect()
            }
            None => self
                .absolute_mobility_ref
                .iter()
                .map(|&mobility| {
                    walden_mobility(
                        &self.solvent,
                        mobility,
                        self.temperature,
                        self.reference_temperature,
                    )
                })
                .collect(),
        }
    }

    /// Chemical name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Valence of each state, ascending
    pub fn z(&self) -> &[i32] {
        &self.z
    }

    /// Valences with the neutral state inserted, ascending
    pub fn z0(&self) -> &[i32] {
        &self.z0
    }

    /// pKa of each state at the working temperature
    pub fn pka(&self) -> &[FloatValue] {
        &self.pka
    }

    /// Signed absolute mobility of each state at the working temperature
    /// unit: m^2/V/s
    pub fn absolute_mobility(&self) -> &[FloatValue] {
        &self.absolute_mobility
    }

    /// pKa of each state at the reference temperature
    pub fn pka_ref(&self) -> &[FloatValue] {
        &self.pka_ref
    }

    /// Signed absolute mobility of each state at the reference temperature
    /// unit: m^2/V/s
    pub fn absolute_mobility_ref(&self) -> &[FloatValue] {
        &self.absolute_mobility_ref
    }

    /// Thermal data used to correct the pKa values
    pub fn thermodynamics(&self) -> &Thermodynamics {
        &self.thermodynamics
    }

    /// Mobility calibration, if the ion has one
    pub fn nightingale(&self) -> Option<&NightingaleData> {
        self.nightingale.as_ref()
    }

    /// Working temperature
    /// unit: degrees C
    pub fn temperature(&self) -> FloatValue {
        self.temperature
    }

    /// Temperature at which the reference properties were measured
    /// unit: degrees C
    pub fn reference_temperature(&self) -> FloatValue {
        self.reference_temperature
    }

    /// Solvent the ion is dissolved in
    pub fn solvent(&self) -> &S {
        &self.solvent
    }

    /// Non-fatal warnings from construction and the latest temperature adjustment
    pub fn warnings(&self) -> &[IonWarning] {
        &self.warnings
    }
}

/// Builder for [`Ion`]
///
/// Collects the optional inputs of an ion before validation.
///
/// ```
/// use ionize_core::Ion;
///
/// let tris = Ion::builder("tris", 1, 8.076, 2.95e-8)
///     .with_enthalpy(vec![47_450.0])
///     .with_heat_capacity(vec![-59.0])
///     .with_temperature(37.0)
///     .build()
///     .unwrap();
/// assert!(tris.pka()[0] < 8.076);
/// ```
#[derive(Debug, Clone)]
pub struct IonBuilder<S = Aqueous> {
    name: String,
    z: Vec<i32>,
    pka_ref: Vec<FloatValue>,
    absolute_mobility_ref: Vec<FloatValue>,
    enthalpy: Option<Vec<FloatValue>>,
    heat_capacity: Option<Vec<FloatValue>>,
    nightingale: Option<NightingaleData>,
    temperature: FloatValue,
    reference_temperature: FloatValue,
    solvent: S,
}

impl IonBuilder<Aqueous> {
    pub fn new(
        name: impl Into<String>,
        z: impl Into<OneOrMany<i32>>,
        pka_ref: impl Into<OneOrMany<FloatValue>>,
        absolute_mobility_ref: impl Into<OneOrMany<FloatValue>>,
    ) -> Self {
        Self {
            name: name.into(),
            z: z.into().into_vec(),
            pka_ref: pka_ref.into().into_vec(),
            absolute_mobility_ref: absolute_mobility_ref.into().into_vec(),
            enthalpy: None,
            heat_capacity: None,
            nightingale: None,
            temperature: REFERENCE_TEMPERATURE,
            reference_temperature: REFERENCE_TEMPERATURE,
            solvent: Aqueous,
        }
    }
}

impl<S: Solvent> IonBuilder<S> {
    /// Enthalpy of dissociation of each state
    /// unit: J/mol
    pub fn with_enthalpy(mut self, enthalpy: impl Into<OneOrMany<FloatValue>>) -> Self {
        self.enthalpy = Some(enthalpy.into().into_vec());
        self
    }

    /// Heat capacity of dissociation of each state
    /// unit: J/(mol K)
    pub fn with_heat_capacity(mut self, heat_capacity: impl Into<OneOrMany<FloatValue>>) -> Self {
        self.heat_capacity = Some(heat_capacity.into().into_vec());
        self
    }

    /// Enthalpy and heat capacity together, replacing any set before
    pub fn with_thermodynamics(mut self, thermodynamics: Thermodynamics) -> Self {
        self.enthalpy = thermodynamics.enthalpy().map(<[FloatValue]>::to_vec);
        self.heat_capacity = thermodynamics.heat_capacity().map(<[FloatValue]>::to_vec);
        self
    }

    /// Calibrated mobility-temperature fit, used instead of Walden's rule
    pub fn with_nightingale(mut self, data: NightingaleData) -> Self {
        self.nightingale = Some(data);
        self
    }

    /// Working temperature
    /// unit: degrees C
    pub fn with_temperature(mut self, temperature: FloatValue) -> Self {
        self.temperature = temperature;
        self
    }

    /// Temperature of the reference properties
    /// unit: degrees C
    pub fn with_reference_temperature(mut self, reference_temperature: FloatValue) -> Self {
        self.reference_temperature = reference_temperature;
        self
    }

    /// Use a different solvent model
    pub fn with_solvent<T: Solvent>(self, solvent: T) -> IonBuilder<T> {
        IonBuilder {
            name: self.name,
            z: self.z,
            pka_ref: self.pka_ref,
            absolute_mobility_ref: self.absolute_mobility_ref,
            enthalpy: self.enthalpy,
            heat_capacity: self.heat_capacity,
            nightingale: self.nightingale,
            temperature: self.temperature,
            reference_temperature: self.reference_temperature,
            solvent,
        }
    }

    /// Validate the inputs and build the ion at its working temperature
    pub fn build(self) -> IonizeResult<Ion<S>> {
        let n_states = self.z.len();
        if self.pka_ref.len() != n_states {
            return Err(ValidationError::LengthMismatch {
                field: "pKa",
                expected: n_states,
                actual: self.pka_ref.len(),
            }
            .into());
        }
        if self.absolute_mobility_ref.len() != n_states {
            return Err(ValidationError::LengthMismatch {
                field: "absolute_mobility",
                expected: n_states,
                actual: self.absolute_mobility_ref.len(),
            }
            .into());
        }
        let thermodynamics = Thermodynamics::from_parts(self.enthalpy, self.heat_capacity);
        thermodynamics.validate(n_states)?;
        validate_charge_states(&self.z)?;

        let order = charge_order(&self.z);
        let z = permute(&self.z, &order);
        let pka_ref = permute(&self.pka_ref, &order);
        let mut absolute_mobility_ref = permute(&self.absolute_mobility_ref, &order);
        let thermodynamics = thermodynamics.permuted(&order);

        // Fully ionized mobilities carry the sign of their charge.
        let mut warnings = Vec::new();
        for (index, (&valence, mobility)) in z
            .iter()
            .zip(absolute_mobility_ref.iter_mut())
            .enumerate()
        {
            let coerced = mobility.abs() * charge_sign(valence);
            if coerced != *mobility {
                let warning = IonWarning::MobilitySignMismatch { index, z: valence };
                log::warn!("{}: {}", self.name, warning);
                warnings.push(warning);
                *mobility = coerced;
            }
        }

        let mut ion = Ion {
            name: self.name,
            z,
            pka_ref,
            absolute_mobility_ref,
            thermodynamics,
            nightingale: self.nightingale,
            temperature: self.temperature,
            reference_temperature: self.reference_temperature,
            solvent: self.solvent,
            pka: Vec::new(),
            absolute_mobility: Vec::new(),
            z0: Vec::new(),
            warnings,
        };
        ion.temperature_adjust();
        Ok(ion)
    }
}
