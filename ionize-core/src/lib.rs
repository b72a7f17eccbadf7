//! Core model of dissolved ions for electrophoresis
//!
//! An [`Ion`] describes a species with several protonation states. From reference
//! properties at one temperature it derives temperature-corrected pKa values and
//! mobilities, and from those the speciation, effective mobility, conductivity and
//! diffusivity at a given pH and ionic strength.
//!
//! Solvent properties are injected through the [`Solvent`] trait; [`Aqueous`] is the
//! default.

pub mod constants;
pub mod errors;
pub mod ion;
pub mod solvent;
pub mod values;

pub use errors::{IonWarning, IonizeError, IonizeResult, ValidationError};
pub use ion::charge::valences_from_floats;
pub use ion::record::IonRecord;
pub use ion::temperature::{NightingaleData, Thermodynamics};
pub use ion::{Ion, IonBuilder};
pub use solvent::{Aqueous, Solvent};
pub use values::{FloatValue, OneOrMany};
