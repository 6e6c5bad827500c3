//! Error types for the noise-model crate.

use alsvid_ir::IrError;
use thiserror::Error;

/// Errors that can occur when building or parsing noise models.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Structured input could not be parsed: unrecognized kind tag,
    /// or missing/mistyped fields.
    #[error("Malformed structured input: {0}")]
    Malformed(String),

    /// A channel parameter in otherwise well-formed input is outside
    /// its valid domain.
    #[error(transparent)]
    Channel(#[from] IrError),
}

/// Result type for noise-model operations.
pub type ModelResult<T> = Result<T, ModelError>;
