use thiserror::Error;

/// Reading a payload slot that the current variant does not have.
///
/// This is a programming error: the panicking accessors ([`Chain::value`](crate::Chain::value),
/// [`Outcome::error`](crate::Outcome::error)) panic with this message, the `try_` accessors return it.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Error)]
pub enum AccessError {
  #[error("No value in {variant}")]
  NoValue { variant: &'static str },
  #[error("No error in {variant}")]
  NoError { variant: &'static str },
}

impl AccessError {
  #[inline]
  pub fn variant(&self) -> &'static str {
    match self {
      Self::NoValue { variant } | Self::NoError { variant } => variant,
    }
  }
}
