use std::env::{self, VarError};
use std::path::PathBuf;

/// Loads a `.env` file from the current directory (or its parents) into the process environment, returning its path.
/// A missing file is not an error; variables that are already set are kept.
///
/// Call this before setting up tracing, as the log filters may come from the `.env` file.
pub fn load_dotenv_into_env() -> Result<Option<PathBuf>, dotenvy::Error> {
  match dotenvy::dotenv() {
    Ok(path) => Ok(Some(path)),
    Err(e) if e.not_found() => Ok(None),
    Err(e) => Err(e),
  }
}

/// Gets the value of environment variable `key`, or `None` if it is not set. Values that are not valid unicode are
/// treated as not set.
pub fn var_opt(key: &str) -> Option<String> {
  match env::var(key) {
    Ok(value) => Some(value),
    Err(VarError::NotPresent) => None,
    Err(VarError::NotUnicode(_)) => {
      tracing::warn!(key, "ignoring environment variable that is not valid unicode");
      None
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unset_variable_is_none() {
    assert_eq!(var_opt("SUMCHAIN_SURELY_NOT_SET_ANYWHERE"), None);
  }

  #[test]
  fn set_variable_is_some() {
    assert!(var_opt("PATH").is_some());
  }
}
