use std::{env, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
  pub host: String,
  pub port: u16,
  pub database_url: String,
  pub default_page_size: i64,
  pub workers: usize,
  pub log_level: String,
  pub log_file: Option<String>,
}

impl Config {
  pub fn server_address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

impl Default for Config {
  fn default() -> Self {
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let database_url = env::var("DATABASE_URL")
      .unwrap_or_else(|_| "sqlite::memory:".to_string());
    let log_level =
      env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    Self {
      host,
      port: parse_env("PORT", 8010),
      database_url,
      default_page_size: parse_env("DEFAULT_PAGE_SIZE", 10),
      workers: parse_env("WORKERS", 1),
      log_level,
      log_file: env::var("LOG_FILE").ok().filter(|path| !path.is_empty()),
    }
  }
}

fn parse_env<T: FromStr>(key: &str, fallback: T) -> T {
  env::var(key)
    .ok()
    .and_then(|value| value.trim().parse().ok())
    .unwrap_or(fallback)
}
