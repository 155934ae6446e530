//! Error type for `expedientes-export`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// An export against the same guard is already pending.
  #[error("an export is already in progress")]
  ExportInProgress,

  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
