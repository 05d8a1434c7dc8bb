use chrono::{DateTime, Utc};

use crate::storage::{StorageConvertible, StorageError, WireKind, WireValue};

macro_rules! impl_wire_primitive {
  ($ty:ty, $variant:ident) => {
    impl StorageConvertible for $ty {
      #[inline]
      fn scan(raw: WireValue) -> Result<Self, StorageError> {
        match raw {
          WireValue::$variant(value) => Ok(value),
          raw => Err(StorageError::Mismatch { expected: WireKind::$variant, found: raw.kind() }),
        }
      }

      #[inline]
      fn to_wire(&self) -> Result<WireValue, StorageError> {
        Ok(WireValue::$variant(self.clone()))
      }
    }
  };
}

impl_wire_primitive!(i64, Int);
impl_wire_primitive!(f64, Float);
impl_wire_primitive!(bool, Bool);
impl_wire_primitive!(Vec<u8>, Bytes);
impl_wire_primitive!(String, Text);
impl_wire_primitive!(DateTime<Utc>, Timestamp);

// Drivers only emit the wide primitives above, so scanning into these is always refused, even when the value would
// fit. Binding widens them.
macro_rules! impl_narrow_numeric {
  ($ty:ty, $wide:ty, $variant:ident) => {
    impl StorageConvertible for $ty {
      #[inline]
      fn scan(raw: WireValue) -> Result<Self, StorageError> {
        Err(StorageError::Incompatible { target: stringify!($ty), found: raw.kind() })
      }

      #[inline]
      fn to_wire(&self) -> Result<WireValue, StorageError> {
        Ok(WireValue::$variant(<$wide>::from(*self)))
      }
    }
  };
}

impl_narrow_numeric!(i8, i64, Int);
impl_narrow_numeric!(i16, i64, Int);
impl_narrow_numeric!(i32, i64, Int);
impl_narrow_numeric!(u8, i64, Int);
impl_narrow_numeric!(u16, i64, Int);
impl_narrow_numeric!(u32, i64, Int);
impl_narrow_numeric!(f32, f64, Float);

impl StorageConvertible for isize {
  #[inline]
  fn scan(raw: WireValue) -> Result<Self, StorageError> {
    Err(StorageError::Incompatible { target: "isize", found: raw.kind() })
  }

  // Lossless: supported targets have at most 64-bit pointers.
  #[inline]
  fn to_wire(&self) -> Result<WireValue, StorageError> {
    Ok(WireValue::Int(*self as i64))
  }
}
