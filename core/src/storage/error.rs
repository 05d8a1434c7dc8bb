use std::error::Error as StdError;

use thiserror::Error;

use crate::result::BoxError;
use crate::storage::WireKind;

/// Storage conversion error.
#[derive(Debug, Error)]
pub enum StorageError {
  #[error("Type mismatch: expected a {expected} storage value, but got {found}")]
  Mismatch { expected: WireKind, found: WireKind },
  #[error("Incompatible types w/ storage driver: cannot scan a {found} storage value into `{target}`")]
  Incompatible { target: &'static str, found: WireKind },
  #[error(transparent)]
  Custom(BoxError),
}

impl StorageError {
  /// Wraps an error from a type's own storage conversion.
  #[inline]
  pub fn custom(error: impl StdError + Send + Sync + 'static) -> Self {
    Self::Custom(Box::new(error))
  }
}
