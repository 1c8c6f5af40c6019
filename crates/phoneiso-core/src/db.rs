// crates/phoneiso-core/src/db.rs

//! # Lookup Facade
//!
//! [`PhoneDb`] bundles both indexes built from one [`Dataset`]. The crate
//! exposes the built-in database through the [`E164`] and [`E212`] statics and
//! a few free functions; callers with their own dataset build a `PhoneDb`.

use crate::e164::E164Index;
use crate::e212::E212Index;
use crate::error::Result;
use crate::model::{Dataset, DbStats};
use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct PhoneDb {
    version: String,
    e164: E164Index,
    e212: E212Index,
}

static BUILTIN_DB: Lazy<PhoneDb> = Lazy::new(|| {
    PhoneDb::from_dataset(&Dataset::builtin()).expect("built-in reference dataset is valid")
});

/// E.164 index over the built-in dataset.
///
/// ```rust
/// use phoneiso_core::E164;
///
/// assert_eq!(E164.lookup(38340118311), "XK");
/// ```
pub static E164: Lazy<&'static E164Index> = Lazy::new(|| &BUILTIN_DB.e164);

/// E.212 index over the built-in dataset.
///
/// ```rust
/// use phoneiso_core::E212;
///
/// assert_eq!(E212.lookup(340, 12), "MQ");
/// ```
pub static E212: Lazy<&'static E212Index> = Lazy::new(|| &BUILTIN_DB.e212);

impl PhoneDb {
    /// Validates `dataset` and builds both indexes.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let e164 = E164Index::build(&dataset.prefixes, &dataset.exceptions)?;
        let e212 = E212Index::build(&dataset.networks, &dataset.mccs)?;
        log::debug!("phone database {} ready", dataset.version);
        Ok(PhoneDb {
            version: dataset.version.clone(),
            e164,
            e212,
        })
    }

    /// The database built from the compiled-in reference data.
    pub fn global() -> &'static PhoneDb {
        &BUILTIN_DB
    }

    pub fn e164(&self) -> &E164Index {
        &self.e164
    }

    pub fn e212(&self) -> &E212Index {
        &self.e212
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            prefixes: self.e164.prefix_count(),
            exceptions: self.e164.exception_count(),
            networks: self.e212.network_count(),
            mccs: self.e212.mcc_count(),
        }
    }
}

/// Country of an E.164 number in the built-in dataset, or `""`.
pub fn country_by_number(number: u64) -> &'static str {
    BUILTIN_DB.e164.lookup(number)
}

/// Country of an MCC/MNC pair in the built-in dataset, or `""`.
pub fn country_by_network(mcc: u16, mnc: u16) -> &'static str {
    BUILTIN_DB.e212.lookup(mcc, mnc)
}

/// Operator name of an MCC/MNC pair in the built-in dataset, or `""`.
///
/// ```rust
/// assert_eq!(phoneiso_core::network_name(238, 1), "TDC A/S");
/// assert_eq!(phoneiso_core::network_name(238, 0), "");
/// ```
pub fn network_name(mcc: u16, mnc: u16) -> &'static str {
    BUILTIN_DB.e212.network_name(mcc, mnc)
}
