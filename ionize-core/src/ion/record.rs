//! Serialized ion records
//!
//! A record holds the reference-state inputs of an ion and nothing derived from
//! them. Rebuilding an ion from its record at the same temperatures gives the same
//! working properties.
//!
//! The text form is JSON:
//!
//! ```json
//! {"__ion__": true, "name": "acetic acid", "z": [-1], "pKa_ref": [4.76],
//!  "absolute_mobility_ref": [-4.24e-8], "dH": null, "dCp": null,
//!  "nightingale_data": null}
//! ```
//!
//! The same record can be written as TOML for hand-maintained ion libraries, in which
//! case null fields are simply omitted.

use super::temperature::{NightingaleData, Thermodynamics};
use super::{Ion, IonBuilder};
use crate::errors::{IonizeError, IonizeResult};
use crate::solvent::{Aqueous, Solvent};
use crate::values::{FloatValue, OneOrMany};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Reference-state snapshot of an ion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IonRecord {
    /// Discriminator marking the record as an ion. Always `true` when serialised.
    #[serde(rename = "__ion__")]
    pub is_ion: bool,
    pub name: String,
    pub z: OneOrMany<i32>,
    #[serde(rename = "pKa_ref")]
    pub pka_ref: OneOrMany<FloatValue>,
    pub absolute_mobility_ref: OneOrMany<FloatValue>,
    #[serde(rename = "dH")]
    pub dh: Option<Vec<FloatValue>>,
    #[serde(rename = "dCp")]
    pub dcp: Option<Vec<FloatValue>>,
    pub nightingale_data: Option<NightingaleData>,
}

impl IonRecord {
    /// Parse a record from JSON text
    pub fn from_json(text: &str) -> IonizeResult<Self> {
        let record: IonRecord = serde_json::from_str(text)?;
        if !record.is_ion {
            return Err(IonizeError::NotAnIonRecord);
        }
        Ok(record)
    }

    pub fn to_json(&self) -> IonizeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a record from TOML text
    ///
    /// Absent `dH`, `dCp` and `nightingale_data` keys stand for null.
    pub fn from_toml(text: &str) -> IonizeResult<Self> {
        let record: IonRecord = toml::from_str(text)?;
        if !record.is_ion {
            return Err(IonizeError::NotAnIonRecord);
        }
        Ok(record)
    }

    /// TOML text of the record; `None` fields are left out
    pub fn to_toml(&self) -> IonizeResult<String> {
        Ok(toml::to_string(self)?)
    }
}

impl<S: Solvent> Ion<S> {
    /// Structural snapshot of the reference properties
    pub fn record(&self) -> IonRecord {
        IonRecord {
            is_ion: true,
            name: self.name.clone(),
            z: self.z.clone().into(),
            pka_ref: self.pka_ref.clone().into(),
            absolute_mobility_ref: self.absolute_mobility_ref.clone().into(),
            dh: self.thermodynamics.enthalpy().map(<[FloatValue]>::to_vec),
            dcp: self.thermodynamics.heat_capacity().map(<[FloatValue]>::to_vec),
            nightingale_data: self.nightingale.clone(),
        }
    }

    /// JSON text of [`Ion::record`]
    pub fn serialize(&self) -> IonizeResult<String> {
        self.record().to_json()
    }

    /// Write the JSON record to `path`
    ///
    /// The file is closed on every exit path, including a failed write.
    pub fn save(&self, path: impl AsRef<Path>) -> IonizeResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &self.record())?;
        writer.flush()?;
        Ok(())
    }
}

impl Ion<Aqueous> {
    /// Rebuild an ion in water at 25 C from a record
    pub fn from_record(record: IonRecord) -> IonizeResult<Self> {
        IonBuilder::from_record(record)?.build()
    }

    /// Rebuild an ion in water at 25 C from the JSON text of a record
    pub fn deserialize(text: &str) -> IonizeResult<Self> {
        Self::from_record(IonRecord::from_json(text)?)
    }

    /// Read an ion from a JSON record file written by [`Ion::save`]
    pub fn load(path: impl AsRef<Path>) -> IonizeResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        let record: IonRecord = serde_json::from_reader(reader)?;
        if !record.is_ion {
            return Err(IonizeError::NotAnIonRecord);
        }
        Self::from_record(record)
    }
}

impl IonBuilder<Aqueous> {
    /// Start a builder from a record
    ///
    /// Use this instead of [`Ion::from_record`] to choose temperatures or a solvent.
    pub fn from_record(record: IonRecord) -> IonizeResult<Self> {
        if !record.is_ion {
            return Err(IonizeError::NotAnIonRecord);
        }
        let mut builder = IonBuilder::new(
            record.name,
            record.z,
            record.pka_ref,
            record.absolute_mobility_ref,
        )
        .with_thermodynamics(Thermodynamics::from_parts(record.dh, record.dcp));
        if let Some(data) = record.nightingale_data {
            builder = builder.with_nightingale(data);
        }
        Ok(builder)
    }
}
