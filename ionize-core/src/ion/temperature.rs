//! Temperature dependence of ion properties
//!
//! pKa values are corrected with the van't Hoff equation, extended with a
//! heat-capacity term (Clark-Glew) when one is available. Mobilities follow Walden's
//! rule (mobility scales with inverse viscosity) unless the ion carries a Nightingale
//! calibration.

use crate::constants::{to_kelvin, GAS_CONSTANT};
use crate::errors::ValidationError;
use crate::solvent::Solvent;
use crate::values::FloatValue;
use serde::{Deserialize, Serialize};
use std::f64::consts::LN_10;

/// Scale from a Nightingale fit (limiting conductance times viscosity,
/// S cm^2 P / mol) to mobility times viscosity (m^2/V/s Pa s)
pub const NIGHTINGALE_SCALE: FloatValue = 10.35e-11;

/// Thermodynamic data used to correct pKa values for temperature
///
/// Values are index-aligned with the charge states of the owning ion.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Thermodynamics {
    /// No thermal data: pKa values do not change with temperature
    #[default]
    Invariant,
    /// Enthalpy of dissociation only
    VantHoff {
        /// unit: J/mol
        enthalpy: Vec<FloatValue>,
    },
    /// Enthalpy and heat capacity of dissociation
    ClarkGlew {
        /// unit: J/mol
        enthalpy: Vec<FloatValue>,
        /// unit: J/(mol K)
        heat_capacity: Vec<FloatValue>,
    },
    /// Heat capacity without an enthalpy
    ///
    /// Not enough to correct pKa values, which stay invariant. Kept so records
    /// reproduce their inputs.
    HeatCapacityOnly {
        /// unit: J/(mol K)
        heat_capacity: Vec<FloatValue>,
    },
}

impl Thermodynamics {
    /// Build from the optional `dH`/`dCp` lists of a record
    ///
    /// A heat capacity without an enthalpy cannot be used for correction and is only
    /// carried along.
    pub fn from_parts(
        enthalpy: Option<Vec<FloatValue>>,
        heat_capacity: Option<Vec<FloatValue>>,
    ) -> Self {
        match (enthalpy, heat_capacity) {
            (Some(enthalpy), Some(heat_capacity)) => Thermodynamics::ClarkGlew {
                enthalpy,
                heat_capacity,
            },
            (Some(enthalpy), None) => Thermodynamics::VantHoff { enthalpy },
            (None, Some(heat_capacity)) => {
                log::warn!("Heat capacity given without enthalpy; pKa will not be corrected");
                Thermodynamics::HeatCapacityOnly { heat_capacity }
            }
            (None, None) => Thermodynamics::Invariant,
        }
    }

    /// Enthalpy of dissociation, if present
    pub fn enthalpy(&self) -> Option<&[FloatValue]> {
        match self {
            Thermodynamics::Invariant | Thermodynamics::HeatCapacityOnly { .. } => None,
            Thermodynamics::VantHoff { enthalpy } | Thermodynamics::ClarkGlew { enthalpy, .. } => {
                Some(enthalpy.as_slice())
            }
        }
    }

    /// Heat capacity of dissociation, if present
    pub fn heat_capacity(&self) -> Option<&[FloatValue]> {
        match self {
            Thermodynamics::ClarkGlew { heat_capacity, .. }
            | Thermodynamics::HeatCapacityOnly { heat_capacity } => Some(heat_capacity.as_slice()),
            Thermodynamics::Invariant | Thermodynamics::VantHoff { .. } => None,
        }
    }

    pub(crate) fn validate(&self, n_states: usize) -> Result<(), ValidationError> {
        let check = |field: &'static str, values: Option<&[FloatValue]>| match values {
            Some(values) if values.len() != n_states => Err(ValidationError::LengthMismatch {
                field,
                expected: n_states,
                actual: values.len(),
            }),
            _ => Ok(()),
        };
        check("dH", self.enthalpy())?;
        check("dCp", self.heat_capacity())
    }

    /// Apply the same charge-ordering permutation as the other per-state vectors
    pub(crate) fn permuted(&self, order: &[usize]) -> Self {
        let apply = |values: &Vec<FloatValue>| super::charge::permute(values, order);
        match self {
            Thermodynamics::Invariant => Thermodynamics::Invariant,
            Thermodynamics::VantHoff { enthalpy } => Thermodynamics::VantHoff {
                enthalpy: apply(enthalpy),
            },
            Thermodynamics::ClarkGlew {
                enthalpy,
                heat_capacity,
            } => Thermodynamics::ClarkGlew {
                enthalpy: apply(enthalpy),
                heat_capacity: apply(heat_capacity),
            },
            Thermodynamics::HeatCapacityOnly { heat_capacity } => {
                Thermodynamics::HeatCapacityOnly {
                    heat_capacity: apply(heat_capacity),
                }
            }
        }
    }

    /// Correct reference pKa values from `t_ref` to `t` (both degrees C)
    pub fn correct_pka(
        &self,
        pka_ref: &[FloatValue],
        t: FloatValue,
        t_ref: FloatValue,
    ) -> Vec<FloatValue> {
        let t = to_kelvin(t);
        let t_ref = to_kelvin(t_ref);
        match self {
            Thermodynamics::Invariant | Thermodynamics::HeatCapacityOnly { .. } => {
                log::debug!("No enthalpy; pKa is not temperature adjusted");
                pka_ref.to_vec()
            }
            Thermodynamics::VantHoff { enthalpy } => pka_ref
                .iter()
                .zip(enthalpy)
                .map(|(&pka, &dh)| vant_hoff(pka, dh, t, t_ref))
                .collect(),
            Thermodynamics::ClarkGlew {
                enthalpy,
                heat_capacity,
            } => pka_ref
                .iter()
                .zip(enthalpy.iter().zip(heat_capacity))
                .map(|(&pka, (&dh, &dcp))| clark_glew(pka, dh, dcp, t, t_ref))
                .collect(),
        }
    }
}

/// van't Hoff correction, temperatures in K
///
/// $$ pK_a(T) = pK_a(T_r) - \frac{\Delta H}{R \ln 10}\left(\frac{1}{T_r} - \frac{1}{T}\right) $$
fn vant_hoff(
    pka_ref: FloatValue,
    dh: FloatValue,
    t: FloatValue,
    t_ref: FloatValue,
) -> FloatValue {
    pka_ref - dh / (GAS_CONSTANT * LN_10) * (1.0 / t_ref - 1.0 / t)
}

/// Clark-Glew correction, temperatures in K
///
/// $$ pK_a(T) = pK_a^{vH}(T) - \frac{\Delta C_p}{R \ln 10}\left(\frac{T_r}{T} - 1 + \ln\frac{T}{T_r}\right) $$
fn clark_glew(
    pka_ref: FloatValue,
    dh: FloatValue,
    dcp: FloatValue,
    t: FloatValue,
    t_ref: FloatValue,
) -> FloatValue {
    vant_hoff(pka_ref, dh, t, t_ref)
        - dcp / (GAS_CONSTANT * LN_10) * (t_ref / t - 1.0 + (t / t_ref).ln())
}

/// Empirical mobility-temperature calibration for specific ions
///
/// `fit` holds polynomial coefficients with the highest degree first. The polynomial
/// gives mobility times viscosity (before [`NIGHTINGALE_SCALE`]) as a function of
/// temperature in degrees C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightingaleData {
    pub fit: Vec<FloatValue>,
    /// Lowest calibrated temperature
    /// unit: degrees C
    pub min: FloatValue,
    /// Highest calibrated temperature
    /// unit: degrees C
    pub max: FloatValue,
}

impl NightingaleData {
    pub fn new(fit: Vec<FloatValue>, min: FloatValue, max: FloatValue) -> Self {
        Self { fit, min, max }
    }

    /// Evaluate the fitted polynomial (Horner's method)
    pub fn evaluate(&self, temperature: FloatValue) -> FloatValue {
        self.fit
            .iter()
            .fold(0.0, |acc, &coefficient| acc * temperature + coefficient)
    }

    pub fn in_range(&self, temperature: FloatValue) -> bool {
        temperature >= self.min && temperature <= self.max
    }

    /// Absolute mobility of a state with sign `sign` at `temperature`
    pub fn mobility<S: Solvent>(
        &self,
        solvent: &S,
        sign: FloatValue,
        temperature: FloatValue,
    ) -> FloatValue {
        self.evaluate(temperature) * NIGHTINGALE_SCALE * sign / solvent.viscosity(temperature)
    }
}

/// Walden's rule: mobility is inversely proportional to viscosity
pub fn walden_mobility<S: Solvent>(
    solvent: &S,
    mobility_ref: FloatValue,
    t: FloatValue,
    t_ref: FloatValue,
) -> FloatValue {
    solvent.viscosity(t_ref) / solvent.viscosity(t) * mobility_ref
}
