//! Optional value: [`Present`](Optional::Present) or [`Empty`](Optional::Empty).

use std::ops::{BitAnd, BitOr, Shr};

use crate::chain::{Chain, IntoIter, Iter};
use crate::outcome::Outcome;

/// Presence or absence of a value.
///
/// `Empty` carries no data, so every empty value is the same value: comparing against `Optional::Empty` is an
/// identity check.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[must_use]
pub enum Optional<T> {
  Present(T),
  #[default]
  Empty,
}

impl<T> Optional<T> {
  /// `Present(value)` if `value` is `Some`, `Empty` otherwise.
  #[inline]
  pub fn of(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Present(value),
      None => Self::Empty,
    }
  }

  /// `Present(value)` if `predicate(&value)` holds, `Empty` otherwise.
  #[inline]
  pub fn of_with(value: T, predicate: impl FnOnce(&T) -> bool) -> Self {
    if predicate(&value) { Self::Present(value) } else { Self::Empty }
  }

  /// Lazily maps [`of_with`](Self::of_with) over `values`.
  #[inline]
  pub fn map_of<I, P>(values: I, mut predicate: P) -> impl Iterator<Item=Self> where
    I: IntoIterator<Item=T>,
    P: FnMut(&T) -> bool,
  {
    values.into_iter().map(move |value| Self::of_with(value, &mut predicate))
  }


  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }

  #[inline]
  pub const fn is_empty(&self) -> bool { matches!(self, Self::Empty) }

  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Empty => Optional::Empty,
    }
  }


  /// Returns `self` if present, without calling `f`. Recovers `Empty` to `Present(f())`.
  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> T) -> Self {
    match self {
      present @ Self::Present(_) => present,
      Self::Empty => Self::Present(f()),
    }
  }

  /// Converts into an [`Outcome`], using `error` for `Empty`.
  #[inline]
  pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
    match self {
      Self::Present(value) => Outcome::Ok(value),
      Self::Empty => Outcome::Err(error),
    }
  }
}

impl<T> Optional<T> {
  /// `Present(x)` for the first element `x` of `values`, `Empty` if there is none. Pulls at most one element.
  #[inline]
  pub fn first(values: impl IntoIterator<Item=T>) -> Self {
    Self::of(values.into_iter().next())
  }
}

impl<T> Optional<Vec<T>> {
  /// `Present` with every payload if all of `optionals` are present, `Empty` otherwise.
  ///
  /// Stops pulling from `optionals` at the first `Empty`. An empty input gives `Present(vec![])`.
  #[inline]
  pub fn sequence(optionals: impl IntoIterator<Item=Optional<T>>) -> Self {
    optionals.into_iter().collect()
  }

  /// Drops every `Empty` from `optionals` and [sequences](Self::sequence) the rest; always `Present`.
  #[inline]
  pub fn pack(optionals: impl IntoIterator<Item=Optional<T>>) -> Self {
    Self::sequence(optionals.into_iter().filter(Optional::is_present))
  }
}

impl<T, C: FromIterator<T>> FromIterator<Optional<T>> for Optional<C> {
  #[inline]
  fn from_iter<I: IntoIterator<Item=Optional<T>>>(iter: I) -> Self {
    // `Option`'s collect stops at the first `None`.
    let collected: Option<C> = iter.into_iter().map(Option::<T>::from).collect();
    collected.into()
  }
}


impl<T> Chain for Optional<T> {
  type Value = T;
  type Rewrap<U> = Optional<U>;

  #[inline]
  fn variant_name(&self) -> &'static str {
    match self {
      Self::Present(_) => "Present",
      Self::Empty => "Empty",
    }
  }

  #[inline]
  fn as_value(&self) -> Option<&T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Empty => None,
    }
  }

  #[inline]
  fn into_value(self) -> Option<T> { self.into() }

  #[inline]
  fn wrap<U>(value: U) -> Optional<U> { Optional::Present(value) }

  #[inline]
  fn bind<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self {
      Self::Present(value) => f(value),
      Self::Empty => Optional::Empty,
    }
  }
}


/// `>>`: [`bind`](Chain::bind).
impl<T, U, F> Shr<F> for Optional<T> where
  F: FnOnce(T) -> Optional<U>
{
  type Output = Optional<U>;
  #[inline]
  fn shr(self, f: F) -> Self::Output { self.bind(f) }
}

/// `&`: [`and_then`](Chain::and_then).
impl<T, U, F> BitAnd<F> for Optional<T> where
  F: FnOnce(T) -> U
{
  type Output = Optional<U>;
  #[inline]
  fn bitand(self, f: F) -> Self::Output { self.and_then(f) }
}

/// `|`: [`or_else`](Optional::or_else).
impl<T, F> BitOr<F> for Optional<T> where
  F: FnOnce() -> T
{
  type Output = Optional<T>;
  #[inline]
  fn bitor(self, f: F) -> Self::Output { self.or_else(f) }
}


impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::of(value) }
}
impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(optional: Optional<T>) -> Self {
    match optional {
      Optional::Present(value) => Some(value),
      Optional::Empty => None,
    }
  }
}

impl<T> IntoIterator for Optional<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { IntoIter::new(self.into()) }
}
impl<'a, T> IntoIterator for &'a Optional<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
