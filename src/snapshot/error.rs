//! Failures while writing or reading a snapshot.

use thiserror::Error;

/// Why a snapshot could not be written or read back.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The JSON encoding was rejected or the text is not a snapshot.
    #[error("JSON snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    /// The binary encoding was rejected or the bytes are not a snapshot.
    #[error("binary snapshot error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("snapshot format version {found} cannot be read; this build reads version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
