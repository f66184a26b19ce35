use std::{str::FromStr, sync::Arc};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::shared::config::Config;

const CREATE_RIDES_TABLE: &str = r#"
  CREATE TABLE IF NOT EXISTS Rides (
    rideID INTEGER PRIMARY KEY AUTOINCREMENT,
    startLat REAL NOT NULL,
    startLong REAL NOT NULL,
    endLat REAL NOT NULL,
    endLong REAL NOT NULL,
    riderName TEXT NOT NULL,
    driverName TEXT NOT NULL,
    driverVehicle TEXT NOT NULL,
    created DATETIME DEFAULT CURRENT_TIMESTAMP
  )
"#;

pub struct Database {
  pub pool: Arc<Pool<Sqlite>>,
}

impl Database {
  pub async fn new(config: &Config) -> Result<Self, sqlx::Error> {
    let pool = prepare_pool(&config.database_url).await?;
    Ok(Self { pool: Arc::new(pool) })
  }
}

/// Opens the store with a single connection that is never recycled, so an
/// in-memory database survives for the whole process and every request
/// sees the same rows.
pub async fn prepare_pool(database_url: &str) -> Result<Pool<Sqlite>, sqlx::Error> {
  let options =
    SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .min_connections(1)
    .idle_timeout(None)
    .max_lifetime(None)
    .connect_with(options)
    .await?;
  build_schemas(&pool).await?;
  Ok(pool)
}

async fn build_schemas(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
  sqlx::query(CREATE_RIDES_TABLE).execute(pool).await?;
  Ok(())
}
