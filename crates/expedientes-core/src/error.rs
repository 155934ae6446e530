//! Error types for `expedientes-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required field was empty after trimming whitespace.
  #[error("required field is empty: {0}")]
  EmptyField(&'static str),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
