//! Acid-base equilibria and speciation
//!
//! The convention for acidity constants follows the charge ladder: the pKa stored for
//! a negative state `z` describes the loss of a proton from state `z + 1`, and the pKa
//! stored for a positive state `z` describes the loss of a proton from `z` itself.
//! Either way, every constant links its state to the next state closer to neutral.

use super::Ion;
use crate::solvent::Solvent;
use crate::values::FloatValue;

/// Empirical ion size parameter of the extended Debye-Hückel equation
/// unit: L^1/2 mol^-1/2
///
/// Treated as a constant although it varies slightly with temperature.
pub const DEBYE_HUCKEL_AD: FloatValue = 1.5;

impl<S: Solvent> Ion<S> {
    /// Acidity constants at the working temperature
    ///
    /// These are not corrected for ionic strength.
    pub fn ka(&self) -> Vec<FloatValue> {
        self.pka.iter().map(|&pka| 10.0_f64.powf(-pka)).collect()
    }

    /// Activity coefficient of a single valence
    ///
    /// Extended Debye-Hückel equation:
    ///
    /// $$ \log_{10} \gamma = -A z^2 \frac{\sqrt{I}}{1 + a_D \sqrt{I}} $$
    ///
    /// The neutral state always has an activity coefficient of exactly one.
    pub fn valence_activity_coefficient(
        &self,
        z: i32,
        ionic_strength: FloatValue,
        temperature: FloatValue,
    ) -> FloatValue {
        if z == 0 {
            return 1.0;
        }
        let a = self.solvent.debye_huckel_a(temperature);
        let root_i = ionic_strength.sqrt();
        let z2 = FloatValue::from(z * z);
        10.0_f64.powf(-a * z2 * root_i / (1.0 + DEBYE_HUCKEL_AD * root_i))
    }

    /// Activity coefficient of every state in [`Ion::z0`]
    ///
    /// # Arguments
    ///
    /// * `ionic_strength` - Ionic strength of the solution, mol/L
    /// * `temperature` - Temperature of the solution, degrees C
    pub fn activity_coefficient(
        &self,
        ionic_strength: FloatValue,
        temperature: FloatValue,
    ) -> Vec<FloatValue> {
        self.z0
            .iter()
            .map(|&z| self.valence_activity_coefficient(z, ionic_strength, temperature))
            .collect()
    }

    /// Concentration-based acidity constants at finite ionic strength
    ///
    /// For the transition from acid state `a` to base state `b = a - 1`:
    ///
    /// $$ K_{a,eff} = K_a \frac{\gamma_a}{\gamma_b \gamma_{H^+}} $$
    ///
    /// At zero ionic strength this equals [`Ion::ka`].
    pub fn ka_eff(&self, ionic_strength: FloatValue, temperature: FloatValue) -> Vec<FloatValue> {
        let gamma = |z: i32| self.valence_activity_coefficient(z, ionic_strength, temperature);
        let gamma_h = gamma(1);
        self.z
            .iter()
            .zip(self.ka())
            .map(|(&z, ka)| {
                let (acid, base) = if z < 0 { (z + 1, z) } else { (z, z - 1) };
                ka * gamma(acid) / (gamma(base) * gamma_h)
            })
            .collect()
    }

    /// log10 of [`Ion::l`]
    fn log_l(&self, ionic_strength: FloatValue, temperature: FloatValue) -> Vec<FloatValue> {
        let log_ka: Vec<FloatValue> = self
            .ka_eff(ionic_strength, temperature)
            .iter()
            .map(|ka| ka.log10())
            .collect();
        let neutral = self.z0.iter().position(|&z| z == 0).unwrap_or_default();

        // Negative states accumulate towards -inf, positive states towards +inf.
        let mut log_l = vec![0.0; self.z0.len()];
        for index in (0..neutral).rev() {
            log_l[index] = log_l[index + 1] + log_ka[index];
        }
        for index in neutral + 1..self.z0.len() {
            log_l[index] = log_l[index - 1] - log_ka[index - 1];
        }
        log_l
    }

    /// Cumulative acidity-constant products relating each state in [`Ion::z0`] to the
    /// neutral state
    ///
    /// $$ L_z = \begin{cases} \prod_{k=z}^{-1} K_k & z < 0 \\ 1 & z = 0 \\ \prod_{k=1}^{z} K_k^{-1} & z > 0 \end{cases} $$
    ///
    /// The concentration of state $z$ is proportional to $L_z [H^+]^z$.
    pub fn l(&self, ionic_strength: FloatValue, temperature: FloatValue) -> Vec<FloatValue> {
        self.log_l(ionic_strength, temperature)
            .into_iter()
            .map(|log_l| 10.0_f64.powf(log_l))
            .collect()
    }

    /// log10 of the unnormalised weight of each state in [`Ion::z0`]
    pub(crate) fn log_weights(
        &self,
        ph: FloatValue,
        ionic_strength: FloatValue,
        temperature: FloatValue,
    ) -> Vec<FloatValue> {
        self.log_l(ionic_strength, temperature)
            .into_iter()
            .zip(&self.z0)
            .map(|(log_l, &z)| log_l - FloatValue::from(z) * ph)
            .collect()
    }

    /// Fraction of the ion in each state of [`Ion::z0`] at zero ionic strength
    ///
    /// The fractions are non-negative and sum to one for any finite pH.
    pub fn ionization_fraction(&self, ph: FloatValue) -> Vec<FloatValue> {
        self.ionization_fraction_at(ph, 0.0, self.temperature)
    }

    /// Fraction of the ion in each state of [`Ion::z0`], corrected for ionic strength
    pub fn ionization_fraction_at(
        &self,
        ph: FloatValue,
        ionic_strength: FloatValue,
        temperature: FloatValue,
    ) -> Vec<FloatValue> {
        normalise_log10(&self.log_weights(ph, ionic_strength, temperature))
    }
}

/// Normalise weights given as log10 values so that they sum to one
pub(crate) fn normalise_log10(log_weights: &[FloatValue]) -> Vec<FloatValue> {
    let max = log_weights
        .iter()
        .copied()
        .fold(FloatValue::NEG_INFINITY, FloatValue::max);
    let weights: Vec<FloatValue> = log_weights
        .iter()
        .map(|log_weight| 10.0_f64.powf(log_weight - max))
        .collect();
    let total: FloatValue = weights.iter().sum();
    weights.into_iter().map(|weight| weight / total).collect()
}
