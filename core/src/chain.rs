use std::iter::FusedIterator;

use crate::error::AccessError;

/// Capabilities shared by the contentful/failing container families.
///
/// The contentful variant implements every capability productively; the failing variant short-circuits. Chaining never
/// mutates: every step consumes `self` and produces a new container.
pub trait Chain: Sized {
  /// Payload of the contentful variant.
  type Value;
  /// The same container family, carrying a `U` in its contentful variant.
  type Rewrap<U>: Chain<Value=U>;

  /// Name of the current variant, used in access error messages.
  fn variant_name(&self) -> &'static str;

  fn as_value(&self) -> Option<&Self::Value>;

  fn into_value(self) -> Option<Self::Value>;

  /// Wraps `value` in the contentful variant of this family.
  fn wrap<U>(value: U) -> Self::Rewrap<U>;

  /// Unwrap-and-call: passes the payload to `f` and returns its result as is. The failing variant returns itself
  /// (re-typed) without calling `f`.
  fn bind<U>(self, f: impl FnOnce(Self::Value) -> Self::Rewrap<U>) -> Self::Rewrap<U>;

  /// Unwrap-transform-rewrap: [`bind`](Self::bind) with the result of `f` wrapped back into the contentful variant.
  #[inline]
  fn and_then<U>(self, f: impl FnOnce(Self::Value) -> U) -> Self::Rewrap<U> {
    self.bind(|value| Self::wrap(f(value)))
  }


  /// Truthiness: `true` for the contentful variant whatever its payload, `false` otherwise.
  #[inline]
  fn has_value(&self) -> bool { self.as_value().is_some() }

  /// Number of elements [`iter`](Self::iter) yields: 1 or 0.
  #[inline]
  fn len(&self) -> usize { usize::from(self.has_value()) }

  #[inline]
  fn try_value(&self) -> Result<&Self::Value, AccessError> {
    self.as_value().ok_or(AccessError::NoValue { variant: self.variant_name() })
  }

  /// Returns the payload.
  ///
  /// # Panics
  ///
  /// Panics if this is the failing variant.
  #[inline]
  #[track_caller]
  fn value(&self) -> &Self::Value {
    match self.try_value() {
      Ok(value) => value,
      Err(e) => panic!("{}", e),
    }
  }

  #[inline]
  fn value_or(self, default: Self::Value) -> Self::Value {
    self.into_value().unwrap_or(default)
  }

  #[inline]
  fn value_or_else(self, default: impl FnOnce() -> Self::Value) -> Self::Value {
    self.into_value().unwrap_or_else(default)
  }

  /// Iterates over the payload: one element for the contentful variant, none otherwise. Can be called any number of
  /// times with the same result.
  #[inline]
  fn iter(&self) -> Iter<'_, Self::Value> {
    Iter::new(self.as_value())
  }
}

/// Turns `f` into a function over any [`Chain`] container, applying it with [`and_then`](Chain::and_then).
#[inline]
pub fn lift<C, U, F>(f: F) -> impl Fn(C) -> C::Rewrap<U> where
  C: Chain,
  F: Fn(C::Value) -> U,
{
  move |chain| chain.and_then(&f)
}

/// Payloads of every contentful element in `chains`, skipping the failing ones.
#[inline]
pub fn collect_values<C: Chain>(chains: impl IntoIterator<Item=C>) -> Vec<C::Value> {
  chains.into_iter().filter_map(Chain::into_value).collect()
}


/// Borrowing iterator over the payload of a [`Chain`] container.
#[derive(Debug)]
pub struct Iter<'a, T> {
  inner: Option<&'a T>,
}
impl<'a, T> Iter<'a, T> {
  #[inline]
  pub(crate) fn new(inner: Option<&'a T>) -> Self { Self { inner } }
}
impl<T> Clone for Iter<'_, T> {
  #[inline]
  fn clone(&self) -> Self { Self { inner: self.inner } }
}
impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> { self.inner.take() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = usize::from(self.inner.is_some());
    (len, Some(len))
  }
}
impl<T> DoubleEndedIterator for Iter<'_, T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> { self.inner.take() }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the payload of a [`Chain`] container.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
  inner: Option<T>,
}
impl<T> IntoIter<T> {
  #[inline]
  pub(crate) fn new(inner: Option<T>) -> Self { Self { inner } }
}
impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> { self.inner.take() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = usize::from(self.inner.is_some());
    (len, Some(len))
  }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> { self.inner.take() }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
