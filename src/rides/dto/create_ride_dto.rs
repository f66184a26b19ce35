use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use validator_derive::Validate;

/// Ride creation payload as it arrives on the wire. Coordinates that are not
/// numeric and names that are not text deserialize to `None`, which the
/// `required` rules then reject.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateRideDto {
  #[serde(default, deserialize_with = "coerce_coordinate")]
  #[validate(required, range(min = -90.0, max = 90.0))]
  pub start_lat: Option<f64>,
  #[serde(default, deserialize_with = "coerce_coordinate")]
  #[validate(required, range(min = -180.0, max = 180.0))]
  pub start_long: Option<f64>,
  #[serde(default, deserialize_with = "coerce_coordinate")]
  #[validate(required, range(min = -90.0, max = 90.0))]
  pub end_lat: Option<f64>,
  #[serde(default, deserialize_with = "coerce_coordinate")]
  #[validate(required, range(min = -180.0, max = 180.0))]
  pub end_long: Option<f64>,
  #[serde(default, deserialize_with = "text_only")]
  #[validate(required, length(min = 1))]
  pub rider_name: Option<String>,
  #[serde(default, deserialize_with = "text_only")]
  #[validate(required, length(min = 1))]
  pub driver_name: Option<String>,
  #[serde(default, deserialize_with = "text_only")]
  #[validate(required, length(min = 1))]
  pub driver_vehicle: Option<String>,
}

// Only a JSON object is a ride payload; the derived `Deserialize` would
// also take the fields positionally from an array.
impl TryFrom<Map<String, Value>> for CreateRideDto {
  type Error = serde_json::Error;

  fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
    serde_json::from_value(Value::Object(fields))
  }
}

fn coerce_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  let coordinate = match Value::deserialize(deserializer)? {
    Value::Number(number) => number.as_f64(),
    Value::String(text) => text.trim().parse::<f64>().ok(),
    _ => None,
  };
  // "NaN" and "inf" parse as floats but can never satisfy a range rule.
  Ok(coordinate.filter(|value| value.is_finite()))
}

fn text_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  match Value::deserialize(deserializer)? {
    Value::String(text) => Ok(Some(text)),
    _ => Ok(None),
  }
}
