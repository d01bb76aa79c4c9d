use std::path::PathBuf;

use sumchain_core::app::env::var_opt;

/// Pipeline configuration, read from the environment (which may be populated from a `.env` file).
#[derive(Clone, Debug)]
pub struct Config {
  pub log_file: Option<PathBuf>,
  pub users: Option<String>,
  pub lookups: Vec<String>,
  pub body_file: Option<PathBuf>,
}

const DEFAULT_LOOKUPS: &str = "joe,ann,bob";

impl Config {
  pub fn from_env() -> Self {
    Self {
      log_file: var_opt("PIPELINE_LOG_FILE").map(PathBuf::from),
      users: var_opt("PIPELINE_USERS"),
      lookups: split_list(&var_opt("PIPELINE_LOOKUP").unwrap_or_else(|| DEFAULT_LOOKUPS.to_string())),
      body_file: var_opt("PIPELINE_BODY_FILE").map(PathBuf::from),
    }
  }
}

pub fn split_list(list: &str) -> Vec<String> {
  list.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}
