// crates/phoneiso-core/src/lib.rs

//! Classify telephony identifiers into ISO-3166-1 alpha-2 country codes.
//!
//! - **E.164**: an international number (digits only, no `+`) is resolved by
//!   longest-prefix match over calling codes, with curated exceptions taking
//!   precedence.
//! - **E.212**: an MCC/MNC pair is resolved to a country and an operator name.
//!
//! Every lookup is total and returns `""` when nothing matches.
//!
//! ```rust
//! use phoneiso_core::{network_name, E164, E212};
//!
//! assert_eq!(E164.lookup(12024561111), "US");
//! assert_eq!(E164.lookup_str("37740118311"), "MC");
//! assert_eq!(E212.lookup(238, 0), "DK");
//! assert_eq!(network_name(238, 1), "TDC A/S");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod data;
pub mod db;
pub mod e164;
pub mod e212;
pub mod error;
pub mod exceptions;
pub mod key;
pub mod loader; // Dataset I/O
pub mod model;
pub mod text;

// Re-exports
pub use crate::db::{country_by_network, country_by_number, network_name, PhoneDb, E164, E212};
pub use crate::e164::E164Index;
pub use crate::e212::E212Index;
pub use crate::error::{PhoneIsoError, Result};
pub use crate::key::{append_u64, DigitBuf, DigitKey};
pub use crate::model::{Dataset, DbStats, ExceptionEntry, MccEntry, NetworkEntry, PrefixEntry};

