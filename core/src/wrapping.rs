//! Adapting fallible functions into [`Outcome`]-returning ones, catching a closed list of error kinds.

use std::fmt::Debug;
use std::io;
use std::num::{IntErrorKind, ParseIntError};

use tracing::{debug, trace};

use crate::outcome::Outcome;

/// Error that can be classified into a kind, used to decide which errors [`Outcome::catching`] converts.
pub trait ErrorKind {
  type Kind: PartialEq + Debug;

  fn error_kind(&self) -> Self::Kind;
}

impl ErrorKind for io::Error {
  type Kind = io::ErrorKind;
  #[inline]
  fn error_kind(&self) -> io::ErrorKind { self.kind() }
}

impl ErrorKind for ParseIntError {
  type Kind = IntErrorKind;
  #[inline]
  fn error_kind(&self) -> IntErrorKind { self.kind().clone() }
}

#[cfg(feature = "serde_json")]
impl ErrorKind for serde_json::Error {
  type Kind = serde_json::error::Category;
  #[inline]
  fn error_kind(&self) -> serde_json::error::Category { self.classify() }
}


impl<T, E: ErrorKind> Outcome<T, E> {
  /// Converts `result` into an outcome if it succeeded or failed with one of `kinds`.
  ///
  /// Errors of any other kind are returned as `Err`, to be propagated by the caller.
  pub fn catching(kinds: &[E::Kind], result: Result<T, E>) -> Result<Self, E> {
    match result {
      Ok(value) => Ok(Self::Ok(value)),
      Err(error) => {
        let kind = error.error_kind();
        if kinds.contains(&kind) {
          trace!(?kind, "caught error");
          Ok(Self::Err(error))
        } else {
          debug!(?kind, ?kinds, "error kind is not caught; propagating");
          Err(error)
        }
      }
    }
  }

  /// Adapts `f` so that every call goes through [`catching`](Self::catching) with `kinds`.
  ///
  /// Functions of several arguments take them as a tuple.
  pub fn wrapping<A, F>(kinds: impl IntoIterator<Item=E::Kind>, mut f: F) -> impl FnMut(A) -> Result<Self, E> where
    F: FnMut(A) -> Result<T, E>,
  {
    let kinds: Vec<E::Kind> = kinds.into_iter().collect();
    move |args| Self::catching(&kinds, f(args))
  }
}
