//! Solvent properties
//!
//! An ion only needs two properties of the solvent it is dissolved in: the dynamic
//! viscosity and the relative permittivity, each as a function of temperature.
//! Anything implementing [`Solvent`] can be injected into an ion; [`Aqueous`] is the
//! default water model.

use crate::constants::to_kelvin;
use crate::values::FloatValue;
use serde::{Deserialize, Serialize};

/// Temperature-dependent properties of a solvent
///
/// Implementations must be pure functions of temperature (degrees C).
pub trait Solvent {
    /// Dynamic viscosity
    /// unit: Pa s
    fn viscosity(&self, temperature: FloatValue) -> FloatValue;

    /// Relative permittivity (dielectric constant)
    /// unit: dimensionless
    fn dielectric(&self, temperature: FloatValue) -> FloatValue;

    /// Debye-Hückel limiting-law coefficient
    ///
    /// $$ A = 1.82 \times 10^{6} (\varepsilon T)^{-3/2} $$
    ///
    /// unit: L^1/2 mol^-1/2
    fn debye_huckel_a(&self, temperature: FloatValue) -> FloatValue {
        1.82e6 * (self.dielectric(temperature) * to_kelvin(temperature)).powf(-1.5)
    }
}

/// Liquid water
///
/// Viscosity follows the Vogel equation and the dielectric constant the
/// Malmberg-Maryott polynomial fit, both valid over roughly 0-100 C.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aqueous;

impl Solvent for Aqueous {
    /// $$ \eta = 2.414 \times 10^{-5} \cdot 10^{247.8 / (T - 140)} $$
    fn viscosity(&self, temperature: FloatValue) -> FloatValue {
        2.414e-5 * 10.0_f64.powf(247.8 / (to_kelvin(temperature) - 140.0))
    }

    /// $$ \varepsilon = 87.740 - 0.40008 T + 9.398 \times 10^{-4} T^2 - 1.410 \times 10^{-6} T^3 $$
    fn dielectric(&self, temperature: FloatValue) -> FloatValue {
        let t = temperature;
        87.740 - 0.40008 * t + 9.398e-4 * t.powi(2) - 1.410e-6 * t.powi(3)
    }
}
