use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Env, Target};

use crate::shared::config::Config;

/// `RUST_LOG` wins over the configured level when both are set. Records go
/// to `config.log_file` when one is configured, otherwise to stderr.
pub fn init_logger(config: &Config) -> io::Result<()> {
  env_logger::Builder::from_env(
    Env::default().default_filter_or(config.log_level.as_str()),
  )
  .target(log_target(config)?)
  .init();
  Ok(())
}

/// Opens the log file for appending, creating it and its directory if needed.
pub fn log_target(config: &Config) -> io::Result<Target> {
  let Some(path) = config.log_file.as_deref() else {
    return Ok(Target::Stderr);
  };
  if let Some(parent) = Path::new(path).parent() {
    fs::create_dir_all(parent)?;
  }
  let file = OpenOptions::new().create(true).append(true).open(path)?;
  Ok(Target::Pipe(Box::new(file)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::helpers::tests::test_config;

  #[test]
  fn test_stderr_without_log_file() {
    let target = log_target(&test_config()).expect("Failed to pick target");
    assert!(matches!(target, Target::Stderr));
  }

  #[test]
  fn test_log_file_is_created() {
    let path = std::env::temp_dir()
      .join(format!("ride-records-{}", std::process::id()))
      .join("rides.log");
    let config = Config {
      log_file: Some(path.to_string_lossy().into_owned()),
      ..test_config()
    };

    let target = log_target(&config).expect("Failed to open log file");
    assert!(matches!(target, Target::Pipe(_)));
    assert!(path.exists());

    if let Some(parent) = path.parent() {
      let _ = fs::remove_dir_all(parent);
    }
  }

  #[test]
  fn test_unwritable_log_file_is_an_error() {
    let file = std::env::temp_dir()
      .join(format!("ride-records-blocker-{}", std::process::id()));
    fs::write(&file, b"").expect("Failed to create file");
    let config = Config {
      log_file: Some(file.join("rides.log").to_string_lossy().into_owned()),
      ..test_config()
    };

    assert!(log_target(&config).is_err());

    let _ = fs::remove_file(&file);
  }
}
