use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Nullable;

use crate::option::Opt;

// Diesel checks column types statically, so these delegate to `T` directly instead of going through `WireValue`.

impl<T, ST, DB> FromSql<Nullable<ST>, DB> for Opt<T> where
  T: FromSql<ST, DB>,
  DB: Backend,
{
  #[inline]
  fn from_sql(bytes: DB::RawValue<'_>) -> deserialize::Result<Self> {
    T::from_sql(bytes).map(|value| Opt::from_option(Some(value)))
  }

  #[inline]
  fn from_nullable_sql(bytes: Option<DB::RawValue<'_>>) -> deserialize::Result<Self> {
    match bytes {
      Some(bytes) => Self::from_sql(bytes),
      None => Ok(Opt::default()),
    }
  }
}

impl<T, ST, DB> ToSql<Nullable<ST>, DB> for Opt<T> where
  T: ToSql<ST, DB>,
  DB: Backend,
{
  #[inline]
  fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, DB>) -> serialize::Result {
    match self.as_option() {
      Some(value) => value.to_sql(out),
      None => Ok(IsNull::Yes),
    }
  }
}
