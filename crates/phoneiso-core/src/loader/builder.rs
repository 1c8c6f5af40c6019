// crates/phoneiso-core/src/loader/builder.rs
use super::common_io;
use super::snapshot_options;
use crate::error::{PhoneIsoError, Result};
use crate::model::Dataset;
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl Dataset {
    /// Writes a bincode snapshot; gzipped when `path` ends in `.gz`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let compression = if common_io::is_gzip_path(path) {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        };
        write_snapshot(path, self, compression)?;
        log::info!("wrote snapshot {} to {}", self.version, path.display());
        Ok(())
    }
}

fn write_snapshot<T: serde::Serialize>(
    path: &Path,
    value: &T,
    compression: CompressionMode,
) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder: Box<dyn Write> = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Box::new(GzEncoder::new(writer, Compression::default()))
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(PhoneIsoError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => Box::new(writer),
    };

    snapshot_options()
        .serialize_into(&mut encoder, value)
        .map_err(PhoneIsoError::Bincode)?;
    encoder.flush()?;
    Ok(())
}
