//! phoneiso-rs
//!
//! Umbrella crate re-exporting [`phoneiso_core`] for the demos in this
//! workspace.

pub use phoneiso_core::*;

pub mod prelude {
    pub use phoneiso_core::{
        append_u64, country_by_network, country_by_number, network_name, Dataset, PhoneDb,
        PhoneIsoError, Result, E164, E212,
    };
}
