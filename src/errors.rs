//! Module with common error types.

use serde_json::Error as JsonError;
use std::io::Error as IoError;
use thiserror::Error;

/// An error in loading or projecting a contract artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// An IO error occurred when loading an artifact from disk.
    #[error("failed to open contract artifact file: {0}")]
    Io(#[from] IoError),

    /// A JSON error occurred while parsing an artifact.
    #[error("failed to parse contract artifact JSON: {0}")]
    Json(#[from] JsonError),

    /// The artifact does not contain an `abi` field.
    #[error("artifact {0} is missing its `abi` field")]
    MissingAbi(String),

    /// The artifact does not contain a `bytecode.object` field.
    #[error("artifact {0} is missing its `bytecode.object` field")]
    MissingBytecode(String),
}
