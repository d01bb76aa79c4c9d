use std::error::Error;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use sumchain_core::app::env;
use sumchain_core::app::tracing::AppTracingBuilder;
use sumchain_core::prelude::*;

use crate::config::Config;
use crate::directory::{Directory, LookupError, user_email};

mod config;
mod directory;

const DEFAULT_BODY: &str = "Welcome aboard!";

fn main() -> Result<(), Box<dyn Error>> {
  let dotenv = env::load_dotenv_into_env();
  let config = Config::from_env();
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_opt(config.log_file.clone())
    .build();
  match dotenv {
    Ok(Some(path)) => debug!(path = %path.display(), "loaded .env file"),
    Ok(None) => {}
    Err(e) => warn!("Cannot load .env file: {}", e),
  }
  debug!(?config, "starting pipeline");

  let directory = match config.users.as_deref().map(Directory::parse) {
    None => Directory::with_default_users(),
    Some(Outcome::Ok(directory)) => directory,
    Some(Outcome::Err(errors)) => {
      for error in errors {
        warn!(%error, "ignoring users from PIPELINE_USERS");
      }
      Directory::with_default_users()
    }
  };
  debug!(users = directory.len(), "created user directory");

  let body = match config.body_file.as_deref() {
    Some(path) => read_body(path)?,
    None => DEFAULT_BODY.to_string(),
  };

  let deliveries: Vec<Outcome<String, LookupError>> = config.lookups.iter()
    .map(|name| directory.find_user(name) >> user_email & (|email: &str| format!("To: {}\n\n{}", email, body)))
    .collect();
  for (name, delivery) in config.lookups.iter().zip(&deliveries) {
    match delivery {
      Outcome::Ok(_) => info!(name = %name, "prepared mail"),
      Outcome::Err(error) => warn!(name = %name, %error, "cannot prepare mail"),
    }
  }

  let first = Optional::first(deliveries.iter().filter(|delivery| delivery.has_value()));
  if let Optional::Present(delivery) = first {
    println!("First deliverable mail:\n{}\n", delivery.value());
  }
  let sent = Optional::pack(deliveries.iter().cloned().map(Outcome::ok)).value_or_else(Vec::new);
  println!("{} of {} mails can be delivered", sent.len(), deliveries.len());

  let summary = Outcome::collect(deliveries)
    .and_then(|mails| format!("all {} lookups succeeded", mails.len()))
    .or_else(|errors| {
      let reasons: Vec<_> = errors.iter().map(ToString::to_string).collect();
      format!("{} lookups failed: {}", errors.len(), reasons.join("; "))
    });
  println!("{}", summary.value());

  Ok(())
}

/// Reads the mail body from `path`, falling back to the default body if the file does not exist. Other I/O errors are
/// returned.
fn read_body(path: &Path) -> Result<String, io::Error> {
  let mut read = Outcome::wrapping([io::ErrorKind::NotFound], |path: &Path| fs::read_to_string(path));
  let body = read(path)? | (|error: io::Error| {
    warn!(%error, path = %path.display(), "mail body file not found; using default body");
    DEFAULT_BODY.to_string()
  });
  Ok(body.value_or_else(|| DEFAULT_BODY.to_string()))
}
