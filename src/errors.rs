use std::path::PathBuf;

use thiserror::Error;

/// Everything that can terminate a conversion. No retries anywhere: local
/// file I/O only, so every kind is terminal for the current run.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("failed to load track file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("invalid {name}: {reason}")]
    InvalidInput { name: &'static str, reason: String },

    #[error("track cannot be drawn: {reason}")]
    DegenerateTrack { reason: &'static str },

    #[error("failed to write output file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConversionError>;
