use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideRto {
  #[serde(rename = "rideID")]
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
