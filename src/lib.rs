//! Ion chemistry for electrophoresis simulations
//!
//! Re-exports the ion model from [`ionize_core`]. Downstream solvers should depend on
//! this crate rather than on the core crate directly.
//!
//! ```
//! use ionize::Ion;
//!
//! let acetic = Ion::new("acetic acid", -1, 4.76, -4.24e-8).unwrap();
//! let fraction = acetic.ionization_fraction(4.76);
//! assert!((fraction[0] - 0.5).abs() < 1e-12);
//! ```

pub use ionize_core::*;

/// Commonly used items
pub mod prelude {
    pub use ionize_core::{
        Aqueous, Ion, IonBuilder, IonRecord, IonWarning, IonizeError, IonizeResult,
        NightingaleData, Solvent, Thermodynamics,
    };
}
