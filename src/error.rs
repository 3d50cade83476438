// Error types for startup resources

use thiserror::Error;

/// Asset Errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssetError {
    #[error("Asset '{0}' is not embedded in the binary")]
    NotFound(String),
    #[error("Asset '{name}' could not be decoded: {reason}")]
    Decode { name: String, reason: String },
}
