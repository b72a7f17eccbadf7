//! Physical constants
//!
//! Process-wide values shared by every ion. There is no configuration surface for these.

use crate::values::FloatValue;

/// Litres per cubic metre
pub const LITRES_PER_CUBIC_METRE: FloatValue = 1000.0;

/// Faraday's constant
/// unit: C/mol
pub const FARADAY: FloatValue = 96485.34;

/// Boltzmann's constant
/// unit: J/K
pub const BOLTZMANN: FloatValue = 1.38e-23;

/// Universal gas constant
/// unit: J/(mol K)
pub const GAS_CONSTANT: FloatValue = 8.31;

/// Permittivity of free space
/// unit: F/m
pub const PERMITTIVITY: FloatValue = 8.85e-12;

/// Avogadro's number
/// unit: 1/mol
pub const AVOGADRO: FloatValue = 6.02e23;

/// Charge of a proton
/// unit: C
pub const ELEMENTARY_CHARGE: FloatValue = 1.602e-19;

/// Default reference temperature for tabulated ion properties
/// unit: degrees C
pub const REFERENCE_TEMPERATURE: FloatValue = 25.0;

/// Offset from degrees C to K
pub const KELVIN_CONVERSION: FloatValue = 273.15;

/// Convert a temperature in degrees C to K
pub fn to_kelvin(temperature: FloatValue) -> FloatValue {
    temperature + KELVIN_CONVERSION
}
