use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
  pub ride_id: i64,
  pub start_lat: f64,
  pub start_long: f64,
  pub end_lat: f64,
  pub end_long: f64,
  pub rider_name: String,
  pub driver_name: String,
  pub driver_vehicle: String,
  pub created: DateTime<Utc>,
}
