use thiserror::Error;

/// Invalid construction inputs for an ion.
///
/// Raised while building an [`Ion`](crate::ion::Ion). A failed construction never
/// produces a partially initialised ion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("An ion requires at least one charge state")]
    NoChargeStates,
    #[error("z contains a non-integer valence: {0}")]
    NonIntegerValence(f64),
    #[error("Zero is not a valid charge state; the neutral state is implicit")]
    ZeroChargeState,
    #[error("Charge state {0} appears more than once")]
    DuplicateChargeState(i32),
    #[error("Charge states missing. Valences must form a contiguous run excluding zero, got {z:?}")]
    MissingChargeStates { z: Vec<i32> },
    #[error("{field} is not the same length as z. Expected {expected}, got {actual}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Error type for ion operations.
#[derive(Error, Debug)]
pub enum IonizeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Record is not tagged as an ion record")]
    NotAnIonRecord,
    #[error("Could not access ion record file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not (de)serialise ion record: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Could not serialise ion record as TOML: {0}")]
    TomlSerialization(#[from] toml::ser::Error),
    #[error("Could not parse TOML ion record: {0}")]
    TomlDeserialization(#[from] toml::de::Error),
}

/// Convenience type for `Result<T, IonizeError>`.
pub type IonizeResult<T> = Result<T, IonizeError>;

/// Non-fatal problems found while constructing or adjusting an ion.
///
/// These never abort a computation. They are logged through `log::warn!` and kept on
/// the ion so callers can inspect them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IonWarning {
    #[error("Mobility sign of state {index} did not match charge {z}; sign coerced to match")]
    MobilitySignMismatch { index: usize, z: i32 },
    #[error("Mobility of state {index} at {temperature} C did not match charge {z}; sign coerced to match")]
    AdjustedMobilitySignMismatch {
        index: usize,
        z: i32,
        temperature: f64,
    },
    #[error("Temperature {temperature} outside range [{min}, {max}] for nightingale data")]
    OutsideCalibrationRange {
        temperature: f64,
        min: f64,
        max: f64,
    },
}
