//! Error taxonomy for manifest generation.

use std::path::PathBuf;

/// Errors produced while generating or stamping a build manifest.
#[derive(Debug, thiserror::Error)]
pub enum ShipstampError {
    #[error("GITHUB_WORKSPACE is not set. Please checkout your repository first (see README)")]
    WorkspaceMissing,

    #[error(
        "{requested} not found in {searched:?}. Make sure you have one or turn off the option that needs it (see README)"
    )]
    FileNotFound {
        requested: String,
        searched: PathBuf,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for shipstamp operations.
pub type Result<T> = std::result::Result<T, ShipstampError>;
