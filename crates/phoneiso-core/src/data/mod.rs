// crates/phoneiso-core/src/data/mod.rs

//! Compiled-in reference data.
//!
//! Plain `const` tables; [`crate::model::Dataset::builtin`] turns them into a
//! [`crate::model::Dataset`] and the indexes are built from that. Update the
//! tables and bump [`VERSION`] together when the numbering plans change.

pub mod e164;
pub mod e212;

/// Revision of the compiled-in tables.
pub const VERSION: &str = "2026.10";
