// crates/phoneiso-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (Binary vs JSON). The lookup indexes never touch disk;
//! they are built from whatever [`Dataset`] this module produces.

use crate::error::{PhoneIsoError, Result};
use crate::model::Dataset;
use bincode::Options;
use std::io::Read;
use std::path::Path;

mod common_io;

#[cfg(feature = "builder")]
mod builder;

/// Upper bound for a snapshot; the full numbering plan is a few hundred KB.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

pub(crate) fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl Dataset {
    /// **Smart Load:** JSON for `.json` / `.json.gz`, binary snapshot otherwise.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if is_json_path(path) {
            #[cfg(feature = "json")]
            return Self::load_json(path);

            #[cfg(not(feature = "json"))]
            return Err(PhoneIsoError::InvalidData(format!(
                "{} is JSON but 'json' is disabled",
                path.display()
            )));
        }
        Self::load_binary(path)
    }

    /// Parses an authored JSON dataset (optionally gzipped).
    #[cfg(feature = "json")]
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let dataset: Dataset = serde_json::from_reader(reader)?;
        log::info!(
            "loaded dataset {} from {} ({} prefixes, {} networks)",
            dataset.version,
            path.display(),
            dataset.prefixes.len(),
            dataset.networks.len()
        );
        Ok(dataset)
    }

    /// Reads a bincode snapshot written by [`Dataset::save_as`].
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = common_io::open_stream(path)?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        let dataset = Self::from_bytes(&data)?;
        log::info!("loaded snapshot {} from {}", dataset.version, path.display());
        Ok(dataset)
    }

    /// Decodes an uncompressed bincode snapshot.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        snapshot_options()
            .deserialize(data)
            .map_err(PhoneIsoError::Bincode)
    }
}

fn is_json_path(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    name.ends_with(".json") || name.ends_with(".json.gz")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_detection_follows_file_name() {
        assert!(is_json_path(Path::new("data/plan.json")));
        assert!(is_json_path(Path::new("data/plan.JSON.gz")));
        assert!(!is_json_path(Path::new("data/plan.bin")));
        assert!(!is_json_path(Path::new("data/plan.bin.gz")));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = Dataset::load_binary("/nonexistent/phoneiso.bin").unwrap_err();
        assert!(matches!(err, PhoneIsoError::NotFound(_)));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(Dataset::from_bytes(&[0xff, 0xff, 0xff]).is_err());
    }
}
