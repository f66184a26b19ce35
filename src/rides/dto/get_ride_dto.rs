use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetRideDto {
  pub id: String,
}

impl GetRideDto {
  /// Identifiers that are not integers can never match a stored ride.
  pub fn ride_id(&self) -> Option<i64> {
    self.id.trim().parse().ok()
  }
}
