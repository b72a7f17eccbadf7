//! Mobility and transport properties
//!
//! The absolute mobility of an ion is its mobility at infinite dilution. In a real
//! buffer the mobility is reduced by the ionic atmosphere; the Robinson-Stokes
//! expression below gives the "actual" mobility used for observable quantities.

use super::charge::charge_sign;
use super::equilibrium::{normalise_log10, DEBYE_HUCKEL_AD};
use super::Ion;
use crate::constants::{to_kelvin, BOLTZMANN, ELEMENTARY_CHARGE, FARADAY, LITRES_PER_CUBIC_METRE};
use crate::solvent::Solvent;
use crate::values::FloatValue;

/// Temperature at which the Robinson-Stokes coefficients were fitted
/// unit: degrees C
pub const ROBINSON_STOKES_REFERENCE_TEMPERATURE: FloatValue = 25.0;

impl<S: Solvent> Ion<S> {
    /// Robinson-Stokes correction of the absolute mobility for ionic strength
    ///
    /// $$ \mu = \mu_0 - \left(A \mu_0 + B\,\mathrm{sgn}(z)\right) \frac{\sqrt{I}}{1 + a_D \sqrt{I}} $$
    ///
    /// with
    ///
    /// $$ A = 0.2297 \left(\frac{T_r \varepsilon_r}{T \varepsilon}\right)^{-3/2}, \quad
    ///    B = 31.41 \times 10^{-9} \left(\frac{T_r \varepsilon_r}{T \varepsilon}\right)^{-1/2} \frac{\eta_r}{\eta} $$
    ///
    /// `ionic_strength` enters as given (mol/L), not doubled.
    ///
    /// Returns one mobility per state in [`Ion::z`], in m^2/V/s.
    pub fn robinson_stokes_mobility(
        &self,
        ionic_strength: FloatValue,
        temperature: FloatValue,
    ) -> Vec<FloatValue> {
        let t_ref = ROBINSON_STOKES_REFERENCE_TEMPERATURE;
        let dielectric = self.solvent.dielectric(temperature);
        let dielectric_ref = self.solvent.dielectric(t_ref);
        let ratio = to_kelvin(t_ref) * dielectric_ref / (to_kelvin(temperature) * dielectric);

        let a = 0.2297 * ratio.powf(-1.5);
        let b = 31.410e-9 * ratio.powf(-0.5) * self.solvent.viscosity(t_ref)
            / self.solvent.viscosity(temperature);

        let root_i = ionic_strength.sqrt();
        let screening = root_i / (1.0 + DEBYE_HUCKEL_AD * root_i);
        self.absolute_mobility
            .iter()
            .zip(&self.z)
            .map(|(&mobility, &z)| mobility - (a * mobility + b * charge_sign(z)) * screening)
            .collect()
    }

    /// Fractions of the charged states only, aligned with [`Ion::z`]
    fn charged_fractions(
        &self,
        ph: FloatValue,
        ionic_strength: FloatValue,
        temperature: FloatValue,
    ) -> Vec<FloatValue> {
        self.ionization_fraction_at(ph, ionic_strength, temperature)
            .into_iter()
            .zip(&self.z0)
            .filter(|&(_, &z)| z != 0)
            .map(|(fraction, _)| fraction)
            .collect()
    }

    /// Observable mobility of the species
    ///
    /// Sum of the ionic-strength corrected mobility of each state weighted by the
    /// fraction of the ion in that state. The neutral state does not move.
    /// unit: m^2/V/s
    pub fn effective_mobility(
        &self,
        ph: FloatValue,
        ionic_strength: FloatValue,
        temperature: FloatValue,
    ) -> FloatValue {
        self.charged_fractions(ph, ionic_strength, temperature)
            .iter()
            .zip(self.robinson_stokes_mobility(ionic_strength, temperature))
            .map(|(fraction, mobility)| fraction * mobility)
            .sum()
    }

    /// Molar conductivity of the species
    ///
    /// $$ \Lambda = 1000\, F \sum_z z \mu_z \alpha_z $$
    pub fn molar_conductivity(
        &self,
        ph: FloatValue,
        ionic_strength: FloatValue,
        temperature: FloatValue,
    ) -> FloatValue {
        let total: FloatValue = self
            .charged_fractions(ph, ionic_strength, temperature)
            .iter()
            .zip(self.robinson_stokes_mobility(ionic_strength, temperature))
            .zip(&self.z)
            .map(|((fraction, mobility), &z)| FloatValue::from(z) * mobility * fraction)
            .sum();
        LITRES_PER_CUBIC_METRE * FARADAY * total
    }

    /// Diffusivity of the species at `ph`
    ///
    /// Nernst-Einstein relation for each charged state, averaged with the ionization
    /// fraction of the charged states as weights:
    ///
    /// $$ D = \frac{k_B T}{e} \frac{\sum_{z \ne 0} \alpha_z \mu_z / z}{\sum_{z \ne 0} \alpha_z} $$
    ///
    /// The neutral state has no mobility and is left out of both sums.
    /// unit: m^2/s
    pub fn diffusivity(&self, ph: FloatValue) -> FloatValue {
        let log_weights: Vec<FloatValue> = self
            .log_weights(ph, 0.0, self.temperature)
            .into_iter()
            .zip(&self.z0)
            .filter(|&(_, &z)| z != 0)
            .map(|(log_weight, _)| log_weight)
            .collect();

        let mean: FloatValue = normalise_log10(&log_weights)
            .iter()
            .zip(self.absolute_mobility.iter().zip(&self.z))
            .map(|(weight, (&mobility, &z))| weight * mobility / FloatValue::from(z))
            .sum();
        mean * BOLTZMANN * to_kelvin(self.temperature) / ELEMENTARY_CHARGE
    }
}
