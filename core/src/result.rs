use std::error::Error;

/// Boxed error type used when no specific error type is given.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// The outcome of a fallible operation: either a success value or an error.
///
/// Constructed from the `(value, error)` pair a fallible operation produces. When the error is present, the value is
/// still held, but none of the accessors hand it out.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Res<T, E = BoxError> {
  ok: T,
  err: Option<E>,
}

impl<T, E> Res<T, E> {
  #[inline]
  pub fn new(value: T, error: Option<E>) -> Self {
    Self { ok: value, err: error }
  }

  #[inline]
  pub fn is_ok(&self) -> bool { self.err.is_none() }
  #[inline]
  pub fn is_err(&self) -> bool { self.err.is_some() }

  /// Returns the success value.
  ///
  /// # Panics
  ///
  /// Panics if this is a failure.
  #[inline]
  #[track_caller]
  pub fn ok(&self) -> &T {
    if self.err.is_some() {
      panic!("ok on err");
    }
    &self.ok
  }

  /// Returns the error.
  ///
  /// # Panics
  ///
  /// Panics if this is a success.
  #[inline]
  #[track_caller]
  pub fn err(&self) -> &E {
    match &self.err {
      Some(err) => err,
      None => panic!("err on ok"),
    }
  }

  /// Consumes the result, returning the success value.
  ///
  /// # Panics
  ///
  /// Panics if this is a failure.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    if self.err.is_some() {
      panic!("unwrap on err");
    }
    self.ok
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    if self.err.is_some() { default } else { self.ok }
  }

  /// Returns the success value, or the result of `f` on failure. `f` is only called on the failure path.
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
    if self.err.is_some() { f() } else { self.ok }
  }


  #[inline]
  pub fn into_result(self) -> Result<T, E> {
    match self.err {
      Some(err) => Err(err),
      None => Ok(self.ok),
    }
  }
}

impl<T: Default, E> Res<T, E> {
  /// Creates a result from a [`Result`]. On failure, the held value is `T::default()`.
  #[inline]
  pub fn from_result(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::new(value, None),
      Err(err) => Self::new(T::default(), Some(err)),
    }
  }
}

impl<T: Default, E> From<Result<T, E>> for Res<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self { Self::from_result(result) }
}
