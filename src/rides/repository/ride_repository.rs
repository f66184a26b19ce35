use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::{sqlite::SqliteRow, Pool, Sqlite};
use thiserror::Error;

use crate::rides::model::Ride;
use crate::shared::database::Database;

#[derive(Debug, Error)]
pub enum RideRepositoryError {
  #[error("Database error: {0}")]
  DatabaseError(#[from] sqlx::Error),

  #[error("Other error: {0}")]
  Other(String),
}

pub trait RideRepository {
  async fn create(
    &self,
    create_ride: CreateRide,
  ) -> Result<Ride, RideRepositoryError>;
  async fn find_one(&self, ride_id: i64)
    -> Result<Option<Ride>, RideRepositoryError>;
  /// Rides in insertion order; `None` returns every row.
  async fn find_all(
    &self,
    pagination: Option<Pagination>,
  ) -> Result<Vec<Ride>, RideRepositoryError>;
}

pub struct RideRepositoryImpl {
  pool: Arc<Pool<Sqlite>>,
}

impl RideRepositoryImpl {
  pub fn new(database: Arc<Database>) -> Self {
    Self {
      pool: database.pool.clone(),
    }
  }
}

const SELECT_RIDE: &str = r#"
  SELECT rideID, startLat, startLong, endLat, endLong,
         riderName, driverName, driverVehicle, created
  FROM Rides
  WHERE rideID = ?
"#;

const SELECT_ALL_RIDES: &str = r#"
  SELECT rideID, startLat, startLong, endLat, endLong,
         riderName, driverName, driverVehicle, created
  FROM Rides
  ORDER BY rideID
"#;

const SELECT_RIDES_PAGE: &str = r#"
  SELECT rideID, startLat, startLong, endLat, endLong,
         riderName, driverName, driverVehicle, created
  FROM Rides
  ORDER BY rideID
  LIMIT ? OFFSET ?
"#;

impl RideRepository for RideRepositoryImpl {
  async fn create(
    &self,
    create_ride: CreateRide,
  ) -> Result<Ride, RideRepositoryError> {
    let query = r#"
      INSERT INTO Rides (startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle)
      VALUES (?, ?, ?, ?, ?, ?, ?)
    "#;
    let ride_id = sqlx::query(query)
      .bind(create_ride.start_lat)
      .bind(create_ride.start_long)
      .bind(create_ride.end_lat)
      .bind(create_ride.end_long)
      .bind(&create_ride.rider_name)
      .bind(&create_ride.driver_name)
      .bind(&create_ride.driver_vehicle)
      .execute(&*self.pool)
      .await?
      .last_insert_rowid();

    self.find_one(ride_id).await?.ok_or_else(|| {
      RideRepositoryError::Other(format!(
        "ride {ride_id} was inserted but could not be read back"
      ))
    })
  }

  async fn find_one(
    &self,
    ride_id: i64,
  ) -> Result<Option<Ride>, RideRepositoryError> {
    sqlx::query(SELECT_RIDE)
      .bind(ride_id)
      .try_map(|row: SqliteRow| Ride::try_from(row))
      .fetch_optional(&*self.pool)
      .await
      .map_err(RideRepositoryError::from)
  }

  async fn find_all(
    &self,
    pagination: Option<Pagination>,
  ) -> Result<Vec<Ride>, RideRepositoryError> {
    let rides = match pagination {
      Some(pagination) => {
        sqlx::query(SELECT_RIDES_PAGE)
          .bind(pagination.limit)
          .bind(pagination.offset)
          .try_map(|row: SqliteRow| Ride::try_from(row))
          .fetch_all(&*self.pool)
          .await?
      }
      None => {
        sqlx::query(SELECT_ALL_RIDES)
          .try_map(|row: SqliteRow| Ride::try_from(row))
          .fetch_all(&*self.pool)
          .await?
      }
    };
    Ok(rides)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateRide {
  pub start_lat: f64,
  pub start_long: f64,
  pub end_lat: f64,
  pub end_long: f64,
  pub rider_name: String,
  pub driver_name: String,
  pub driver_vehicle: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
  pub limit: i64,
  pub offset: i64,
}

impl TryFrom<SqliteRow> for Ride {
  type Error = sqlx::Error;

  fn try_from(row: SqliteRow) -> Result<Self, Self::Error> {
    Ok(Self {
      ride_id: row.try_get("rideID")?,
      start_lat: row.try_get("startLat")?,
      start_long: row.try_get("startLong")?,
      end_lat: row.try_get("endLat")?,
      end_long: row.try_get("endLong")?,
      rider_name: row.try_get("riderName")?,
      driver_name: row.try_get("driverName")?,
      driver_vehicle: row.try_get("driverVehicle")?,
      created: row.try_get::<DateTime<Utc>, _>("created")?,
    })
  }
}
