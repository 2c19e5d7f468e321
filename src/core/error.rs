//! Error types for the Bosphorus generator

use thiserror::Error;

/// Main error type for configuration and export surfaces.
///
/// Voxel generation itself is total and never fails; only loading,
/// validating and writing artifacts can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Export error: {0}")]
    Export(String),
}
