use std::collections::BTreeMap;

use thiserror::Error;
use tracing::trace;

use sumchain_core::prelude::*;

use crate::config::split_list;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct User {
  pub name: String,
  pub email: Option<String>,
}

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum LookupError {
  #[error("No user named '{0}'")]
  UnknownUser(String),
  #[error("User '{0}' has no email address")]
  NoEmail(String),
  #[error("Malformed user entry '{0}'; expected 'name=email'")]
  MalformedEntry(String),
}

/// Users by name.
#[derive(Default, Debug)]
pub struct Directory {
  users: BTreeMap<String, User>,
}

impl Directory {
  pub fn with_default_users() -> Self {
    let mut directory = Self::default();
    directory.insert(User { name: "joe".to_string(), email: Some("joe@example.com".to_string()) });
    directory.insert(User { name: "ann".to_string(), email: None });
    directory
  }

  /// Parses a comma-separated list of `name=email` entries; an empty email means the user has none. Every malformed
  /// entry is reported, not just the first.
  pub fn parse(entries: &str) -> Outcome<Self, Vec<LookupError>> {
    Outcome::collect(split_list(entries).into_iter().map(|entry| Self::parse_entry(&entry)))
      .and_then(|users| {
        let mut directory = Self::default();
        for user in users {
          directory.insert(user);
        }
        directory
      })
  }

  fn parse_entry(entry: &str) -> Outcome<User, LookupError> {
    Outcome::of(entry.split_once('='), LookupError::MalformedEntry(entry.to_string()))
      .bind(|(name, email)| {
        let name = name.trim();
        Outcome::of_with(name, LookupError::MalformedEntry(entry.to_string()), |name| !name.is_empty())
          .and_then(|name| User {
            name: name.to_string(),
            email: Optional::of_with(email.trim(), |email| !email.is_empty()).and_then(str::to_string).into(),
          })
      })
  }

  pub fn insert(&mut self, user: User) {
    self.users.insert(user.name.clone(), user);
  }

  pub fn len(&self) -> usize { self.users.len() }

  pub fn find_user(&self, name: &str) -> Outcome<&User, LookupError> {
    trace!(name, "looking up user");
    Outcome::of(self.users.get(name), LookupError::UnknownUser(name.to_string()))
  }
}

pub fn user_email(user: &User) -> Outcome<&str, LookupError> {
  Outcome::of(user.email.as_deref(), LookupError::NoEmail(user.name.clone()))
}
