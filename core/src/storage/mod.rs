//! Conversion between [`Opt`] and the primitive values a relational storage driver reads and writes.
//!
//! A driver hands each column it reads to [`Opt::scan`], and binds query parameters with [`Opt::to_wire`]. `NULL`
//! maps to the absent state; any other value goes through the [`StorageConvertible`] capability of the contained
//! type.

use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};

use crate::option::Opt;

pub use error::StorageError;

mod error;
mod primitive;
#[cfg(feature = "diesel")]
mod diesel_impls;

/// A primitive value as natively read or written by a storage driver.
#[derive(Clone, PartialEq, Debug)]
pub enum WireValue {
  Null,
  Int(i64),
  Float(f64),
  Bool(bool),
  Bytes(Vec<u8>),
  Text(String),
  Timestamp(DateTime<Utc>),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WireKind {
  Null,
  Int,
  Float,
  Bool,
  Bytes,
  Text,
  Timestamp,
}

impl WireValue {
  #[inline]
  pub fn kind(&self) -> WireKind {
    match self {
      Self::Null => WireKind::Null,
      Self::Int(_) => WireKind::Int,
      Self::Float(_) => WireKind::Float,
      Self::Bool(_) => WireKind::Bool,
      Self::Bytes(_) => WireKind::Bytes,
      Self::Text(_) => WireKind::Text,
      Self::Timestamp(_) => WireKind::Timestamp,
    }
  }

  #[inline]
  pub fn is_null(&self) -> bool { matches!(self, Self::Null) }
}

impl Display for WireKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let name = match self {
      Self::Null => "null",
      Self::Int => "integer",
      Self::Float => "float",
      Self::Bool => "boolean",
      Self::Bytes => "bytes",
      Self::Text => "text",
      Self::Timestamp => "timestamp",
    };
    f.write_str(name)
  }
}


/// Types that convert themselves to and from a [`WireValue`].
///
/// Implemented for the wire primitives (`i64`, `f64`, `bool`, `Vec<u8>`, `String`, `DateTime<Utc>`). Narrower
/// numeric types (`i32`, `f32`, ...) implement it too, but refuse to be scanned, as drivers never produce them.
/// Structured types implement it themselves.
pub trait StorageConvertible: Sized {
  /// Converts a non-null `raw` value read from storage into `Self`.
  fn scan(raw: WireValue) -> Result<Self, StorageError>;

  /// Converts `self` into a value to bind as a query parameter.
  fn to_wire(&self) -> Result<WireValue, StorageError>;
}

impl<T: StorageConvertible> Opt<T> {
  /// Creates a container from `raw` as read from storage: absent if `raw` is null, otherwise scanned by `T`.
  pub fn scan(raw: WireValue) -> Result<Self, StorageError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(kind = %raw.kind(), ty = std::any::type_name::<T>(), "scanning storage value");
    if raw.is_null() {
      return Ok(Self::default());
    }
    let value = T::scan(raw)?;
    Ok(Self::from_option(Some(value)))
  }

  /// Converts this container into a value to bind as a query parameter: null if absent, otherwise converted by `T`.
  pub fn to_wire(&self) -> Result<WireValue, StorageError> {
    let raw = match self.as_option() {
      None => WireValue::Null,
      Some(value) => value.to_wire()?,
    };
    #[cfg(feature = "tracing")]
    tracing::trace!(kind = %raw.kind(), ty = std::any::type_name::<T>(), "converted value for storage");
    Ok(raw)
  }
}
