// crates/phoneiso-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A generic E.164 calling-code prefix (1 to 4 digits).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixEntry {
    pub prefix: String,
    pub country: String,
}

/// A curated override that beats every generic prefix it overlaps.
///
/// Unlike [`PrefixEntry`], the prefix may be longer than 4 digits
/// (e.g. `3906698` for Vatican City inside Italy's `39`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionEntry {
    pub prefix: String,
    pub country: String,
}

/// A registered mobile network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEntry {
    pub mcc: u16,
    pub mnc: u16,
    pub country: String,
    /// Empty when the registry carries no operator name.
    #[serde(default)]
    pub operator: String,
}

/// The country an MCC belongs to when the MNC is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MccEntry {
    pub mcc: u16,
    pub country: String,
}

/// A complete, versioned reference dataset.
///
/// This is the only input the indexes are built from. It can come from the
/// compiled-in tables ([`Dataset::builtin`]) or be read from disk through the
/// loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub version: String,
    #[serde(default)]
    pub prefixes: Vec<PrefixEntry>,
    #[serde(default)]
    pub exceptions: Vec<ExceptionEntry>,
    #[serde(default)]
    pub networks: Vec<NetworkEntry>,
    #[serde(default)]
    pub mccs: Vec<MccEntry>,
}

impl Dataset {
    /// The reference data compiled into this crate.
    pub fn builtin() -> Self {
        let prefixes = crate::data::e164::PREFIXES
            .iter()
            .map(|&(prefix, country)| PrefixEntry {
                prefix: prefix.to_owned(),
                country: country.to_owned(),
            })
            .collect();

        let exceptions = crate::data::e164::EXCEPTIONS
            .iter()
            .map(|&(prefix, country)| ExceptionEntry {
                prefix: prefix.to_owned(),
                country: country.to_owned(),
            })
            .collect();

        let networks = crate::data::e212::NETWORKS
            .iter()
            .map(|&(mcc, mnc, country, operator)| NetworkEntry {
                mcc,
                mnc,
                country: country.to_owned(),
                operator: operator.to_owned(),
            })
            .collect();

        let mccs = crate::data::e212::MCCS
            .iter()
            .map(|&(mcc, country)| MccEntry {
                mcc,
                country: country.to_owned(),
            })
            .collect();

        Dataset {
            version: crate::data::VERSION.to_owned(),
            prefixes,
            exceptions,
            networks,
            mccs,
        }
    }
}

/// Simple aggregate statistics for a built database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub prefixes: usize,
    pub exceptions: usize,
    pub networks: usize,
    pub mccs: usize,
}

/// Checks an ISO-3166-1 alpha-2 code: exactly two ASCII uppercase letters.
pub(crate) fn is_country_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}
