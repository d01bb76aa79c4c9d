//! Success-or-failure value: [`Ok`](Outcome::Ok) or [`Err`](Outcome::Err).

use std::ops::{BitAnd, BitOr, Shr};

use crate::chain::{Chain, IntoIter, Iter};
use crate::error::AccessError;
use crate::optional::Optional;

/// Success with a value, or failure with an error.
///
/// Once an outcome is `Err`, [`bind`](Chain::bind) and [`and_then`](Chain::and_then) pass the error along untouched;
/// only [`or_else`](Outcome::or_else) turns it back into a success.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[must_use]
pub enum Outcome<T, E> {
  Ok(T),
  Err(E),
}

impl<T, E> Outcome<T, E> {
  /// `Ok(value)` if `value` is `Some`, `Err(otherwise)` otherwise.
  #[inline]
  pub fn of(value: Option<T>, otherwise: E) -> Self {
    match value {
      Some(value) => Self::Ok(value),
      None => Self::Err(otherwise),
    }
  }

  /// `Ok(value)` if `predicate(&value)` holds, `Err(otherwise)` otherwise.
  #[inline]
  pub fn of_with(value: T, otherwise: E, predicate: impl FnOnce(&T) -> bool) -> Self {
    if predicate(&value) { Self::Ok(value) } else { Self::Err(otherwise) }
  }


  #[inline]
  pub const fn is_ok(&self) -> bool { matches!(self, Self::Ok(_)) }

  #[inline]
  pub const fn is_err(&self) -> bool { matches!(self, Self::Err(_)) }

  #[inline]
  pub const fn as_ref(&self) -> Outcome<&T, &E> {
    match self {
      Self::Ok(value) => Outcome::Ok(value),
      Self::Err(error) => Outcome::Err(error),
    }
  }

  #[inline]
  pub fn as_error(&self) -> Option<&E> {
    match self {
      Self::Ok(_) => None,
      Self::Err(error) => Some(error),
    }
  }

  #[inline]
  pub fn into_error(self) -> Option<E> {
    match self {
      Self::Ok(_) => None,
      Self::Err(error) => Some(error),
    }
  }

  #[inline]
  pub fn try_error(&self) -> Result<&E, AccessError> {
    self.as_error().ok_or(AccessError::NoError { variant: self.variant_name() })
  }

  /// Returns the error.
  ///
  /// # Panics
  ///
  /// Panics if this is `Ok`.
  #[inline]
  #[track_caller]
  pub fn error(&self) -> &E {
    match self.try_error() {
      Ok(error) => error,
      Err(e) => panic!("{}", e),
    }
  }


  /// Returns `self` if `Ok`, without calling `f`. Recovers `Err(e)` to `Ok(f(e))`.
  #[inline]
  pub fn or_else(self, f: impl FnOnce(E) -> T) -> Self {
    match self {
      ok @ Self::Ok(_) => ok,
      Self::Err(error) => Self::Ok(f(error)),
    }
  }

  /// Returns `self` if `Ok`, without calling `f`. Transforms `Err(e)` into `Err(f(e))`.
  #[inline]
  pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
    match self {
      Self::Ok(value) => Outcome::Ok(value),
      Self::Err(error) => Outcome::Err(f(error)),
    }
  }

  /// Swaps the variants, keeping the payload: `Ok(v)` becomes `Err(v)` and `Err(e)` becomes `Ok(e)`.
  #[inline]
  pub fn inverse(self) -> Outcome<E, T> {
    match self {
      Self::Ok(value) => Outcome::Err(value),
      Self::Err(error) => Outcome::Ok(error),
    }
  }

  /// Converts into an [`Optional`], discarding the error.
  #[inline]
  pub fn ok(self) -> Optional<T> {
    match self {
      Self::Ok(value) => Optional::Present(value),
      Self::Err(_) => Optional::Empty,
    }
  }
}

impl<T, E> Outcome<Vec<T>, Vec<E>> {
  /// `Ok` with every value if all of `outcomes` are `Ok`, otherwise `Err` with every error, in order.
  ///
  /// Unlike [`Optional::sequence`], this always consumes all of `outcomes`.
  #[inline]
  pub fn collect(outcomes: impl IntoIterator<Item=Outcome<T, E>>) -> Self {
    outcomes.into_iter().collect()
  }
}

impl<T, E> Outcome<T, E> {
  /// Every error in `outcomes`, skipping the `Ok` ones.
  #[inline]
  pub fn collect_errors(outcomes: impl IntoIterator<Item=Self>) -> Vec<E> {
    outcomes.into_iter().filter_map(Self::into_error).collect()
  }
}

impl<T, E, C, EC> FromIterator<Outcome<T, E>> for Outcome<C, EC> where
  C: FromIterator<T>,
  EC: FromIterator<E>,
{
  fn from_iter<I: IntoIterator<Item=Outcome<T, E>>>(iter: I) -> Self {
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for outcome in iter {
      match outcome {
        Outcome::Ok(value) => values.push(value),
        Outcome::Err(error) => errors.push(error),
      }
    }
    if errors.is_empty() {
      Outcome::Ok(values.into_iter().collect())
    } else {
      tracing::trace!(errors = errors.len(), values = values.len(), "collected outcomes into Err");
      Outcome::Err(errors.into_iter().collect())
    }
  }
}


impl<T, E> Chain for Outcome<T, E> {
  type Value = T;
  type Rewrap<U> = Outcome<U, E>;

  #[inline]
  fn variant_name(&self) -> &'static str {
    match self {
      Self::Ok(_) => "Ok",
      Self::Err(_) => "Err",
    }
  }

  #[inline]
  fn as_value(&self) -> Option<&T> {
    match self {
      Self::Ok(value) => Some(value),
      Self::Err(_) => None,
    }
  }

  #[inline]
  fn into_value(self) -> Option<T> {
    match self {
      Self::Ok(value) => Some(value),
      Self::Err(_) => None,
    }
  }

  #[inline]
  fn wrap<U>(value: U) -> Outcome<U, E> { Outcome::Ok(value) }

  #[inline]
  fn bind<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Self::Ok(value) => f(value),
      Self::Err(error) => Outcome::Err(error),
    }
  }
}


/// `>>`: [`bind`](Chain::bind).
impl<T, E, U, F> Shr<F> for Outcome<T, E> where
  F: FnOnce(T) -> Outcome<U, E>
{
  type Output = Outcome<U, E>;
  #[inline]
  fn shr(self, f: F) -> Self::Output { self.bind(f) }
}

/// `&`: [`and_then`](Chain::and_then).
impl<T, E, U, F> BitAnd<F> for Outcome<T, E> where
  F: FnOnce(T) -> U
{
  type Output = Outcome<U, E>;
  #[inline]
  fn bitand(self, f: F) -> Self::Output { self.and_then(f) }
}

/// `|`: [`or_else`](Outcome::or_else).
impl<T, E, F> BitOr<F> for Outcome<T, E> where
  F: FnOnce(E) -> T
{
  type Output = Outcome<T, E>;
  #[inline]
  fn bitor(self, f: F) -> Self::Output { self.or_else(f) }
}


impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Ok(value),
      Err(error) => Self::Err(error),
    }
  }
}
impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self {
    match outcome {
      Outcome::Ok(value) => Ok(value),
      Outcome::Err(error) => Err(error),
    }
  }
}

impl<T, E> IntoIterator for Outcome<T, E> {
  type Item = T;
  type IntoIter = IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { IntoIter::new(self.into_value()) }
}
impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
