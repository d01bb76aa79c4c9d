//! Two small sum types, [`Optional`] and [`Outcome`], sharing one chaining protocol ([`Chain`]), plus collection
//! combinators that fold many of them into one.
//!
//! ```
//! use sumchain_core::prelude::*;
//!
//! let email = Optional::of(Some(" joe "))
//!   .and_then(str::trim)
//!   .bind(|name| Optional::of_with(format!("{name}@example.com"), |_| name != "root"))
//!   .value_or_else(|| "nobody@example.com".to_string());
//! assert_eq!(email, "joe@example.com");
//!
//! assert_eq!(Optional::sequence([Optional::Present(1), Optional::Empty]), Optional::Empty);
//! assert_eq!(Outcome::collect([Outcome::Ok(1), Outcome::Err("x"), Outcome::Err("y")]), Outcome::Err(vec!["x", "y"]));
//! ```

pub mod chain;
pub mod error;
pub mod optional;
pub mod outcome;
pub mod wrapping;

pub mod app;

pub use chain::{Chain, collect_values, lift};
pub use error::AccessError;
pub use optional::Optional;
pub use outcome::Outcome;
pub use wrapping::ErrorKind;

pub mod prelude {
  pub use crate::chain::{Chain, collect_values, lift};
  pub use crate::optional::Optional;
  pub use crate::outcome::Outcome;
  pub use crate::wrapping::ErrorKind;
}
