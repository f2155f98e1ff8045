//! Error types for form rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while publishing form assets.
///
/// Rendering itself never fails; only the filesystem side of asset
/// publishing does.
#[derive(Debug, Error)]
pub enum FormError {
    /// Copying an asset into the web root failed.
    #[error("failed to publish asset {path:?}: {source}")]
    AssetPublish {
        /// The file or directory that could not be copied.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configured asset directory does not exist.
    #[error("asset directory not found: {0:?}")]
    InvalidAssetDir(PathBuf),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
