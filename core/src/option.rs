/// A value that is either present or absent.
///
/// Construct with [`Opt::new`] from an optional reference, or from an owned [`Option`]. There are no mutating
/// methods: once constructed, the state never changes.
///
/// The unchecked accessors ([`some`](Self::some), [`none`](Self::none), [`unwrap`](Self::unwrap)) panic when called
/// in the wrong state. Check [`is_some`](Self::is_some)/[`is_none`](Self::is_none) first, or use
/// [`unwrap_or`](Self::unwrap_or)/[`unwrap_or_else`](Self::unwrap_or_else).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Opt<T> {
  inner: Option<T>,
}

impl<T: Clone> Opt<T> {
  /// Creates a container from `value`, cloning the referenced value if there is one.
  #[inline]
  pub fn new(value: Option<&T>) -> Self {
    Self { inner: value.cloned() }
  }
}

impl<T> Opt<T> {
  #[inline]
  pub fn from_option(value: Option<T>) -> Self { Self { inner: value } }

  #[inline]
  pub fn is_none(&self) -> bool { self.inner.is_none() }
  #[inline]
  pub fn is_some(&self) -> bool { self.inner.is_some() }

  /// Returns the contained value.
  ///
  /// # Panics
  ///
  /// Panics if the container is absent.
  #[inline]
  #[track_caller]
  pub fn some(&self) -> &T {
    match &self.inner {
      Some(value) => value,
      None => panic!("some on none"),
    }
  }

  /// Returns the "no value" marker, for handing absence on to code that expects a plain [`Option`].
  ///
  /// # Panics
  ///
  /// Panics if the container is present.
  #[inline]
  #[track_caller]
  pub fn none(&self) -> Option<&T> {
    if self.inner.is_some() {
      panic!("none on some");
    }
    None
  }

  /// Consumes the container, returning the contained value.
  ///
  /// # Panics
  ///
  /// Panics if the container is absent.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self.inner {
      Some(value) => value,
      None => panic!("unwrap on none"),
    }
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self.inner {
      Some(value) => value,
      None => default,
    }
  }

  /// Returns the contained value, or the result of `f` if absent. `f` is only called on the absent path.
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
    match self.inner {
      Some(value) => value,
      None => f(),
    }
  }


  #[inline]
  pub fn as_option(&self) -> Option<&T> { self.inner.as_ref() }
  #[inline]
  pub fn into_option(self) -> Option<T> { self.inner }
}

impl<T> Default for Opt<T> {
  #[inline]
  fn default() -> Self { Self { inner: None } }
}

impl<T> From<Option<T>> for Opt<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::from_option(value) }
}

impl<T> From<Opt<T>> for Option<T> {
  #[inline]
  fn from(value: Opt<T>) -> Self { value.into_option() }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;
  use std::panic::catch_unwind;

  use rstest::rstest;

  use super::*;

  #[test]
  fn absent_from_none() {
    let o = Opt::<i32>::new(None);
    assert!(o.is_none());
    assert!(!o.is_some());
    assert_eq!(o.none(), None);
    assert_eq!(o.unwrap_or(1), 1);
    assert_eq!(o.unwrap_or_else(|| 1), 1);
  }

  #[test]
  fn present_from_reference() {
    let j = 1;
    let o = Opt::new(Some(&j));
    assert!(!o.is_none());
    assert!(o.is_some());
    assert_eq!(*o.some(), 1);
    assert_eq!(o.unwrap(), 1);
    assert_eq!(o.unwrap_or(2), 1);
    assert_eq!(o.unwrap_or_else(|| 2), 1);
  }

  #[test]
  fn present_clones_the_referenced_value() {
    let source = String::from("hello");
    let o = Opt::new(Some(&source));
    drop(source);
    assert_eq!(o.some(), "hello");
  }

  #[rstest]
  #[case(7)]
  #[case(0)]
  #[case(-42)]
  #[case(i64::MAX)]
  fn present_unwraps_to_source(#[case] v: i64) {
    let o = Opt::new(Some(&v));
    assert!(o.is_some());
    assert_eq!(o.unwrap(), v);
  }

  #[test]
  fn seven_scenario() {
    let o = Opt::new(Some(&7));
    assert!(o.is_some());
    assert_eq!(o.unwrap(), 7);
    assert_eq!(o.unwrap_or(0), 7);
  }

  #[test]
  fn producer_not_called_when_present() {
    let calls = Cell::new(0);
    let o = Opt::from(Some(3));
    let v = o.unwrap_or_else(|| {
      calls.set(calls.get() + 1);
      9
    });
    assert_eq!(v, 3);
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn producer_called_once_when_absent() {
    let calls = Cell::new(0);
    let o = Opt::<i32>::default();
    let v = o.unwrap_or_else(|| {
      calls.set(calls.get() + 1);
      9
    });
    assert_eq!(v, 9);
    assert_eq!(calls.get(), 1);
  }

  #[test]
  #[should_panic(expected = "some on none")]
  fn some_on_absent_panics() {
    let o = Opt::<i32>::new(None);
    let _ = o.some();
  }

  #[test]
  #[should_panic(expected = "unwrap on none")]
  fn unwrap_on_absent_panics() {
    Opt::<i32>::new(None).unwrap();
  }

  #[test]
  #[should_panic(expected = "none on some")]
  fn none_on_present_panics() {
    let o = Opt::new(Some(&1));
    let _ = o.none();
  }

  #[test]
  fn panic_in_producer_reaches_caller() {
    let result = catch_unwind(|| Opt::<i32>::new(None).unwrap_or_else(|| panic!("producer failed")));
    assert!(result.is_err());
  }

  #[test]
  fn option_conversions() {
    let o: Opt<&str> = Some("x").into();
    assert_eq!(o.as_option(), Some(&"x"));
    let back: Option<&str> = o.into();
    assert_eq!(back, Some("x"));
    assert_eq!(Opt::<u8>::default().into_option(), None);
  }

  #[test]
  fn shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Opt<String>>();

    let o = Opt::new(Some(&String::from("shared")));
    std::thread::scope(|s| {
      for _ in 0..4 {
        s.spawn(|| assert_eq!(o.some(), "shared"));
      }
    });
  }

  #[test]
  fn function_return_type() {
    let f = |v: f64| -> Opt<i32> {
      if v > 0.5 {
        let k = 1;
        Opt::new(Some(&k))
      } else {
        Opt::new(None)
      }
    };
    assert!(f(0.9).is_some());
    assert!(f(0.1).is_none());
  }
}
