pub mod option;
pub mod result;
pub mod storage;

#[cfg(feature = "serde")]
mod serde_impls;

pub use option::Opt;
pub use result::{BoxError, Res};
pub use storage::{StorageConvertible, StorageError, WireKind, WireValue};
