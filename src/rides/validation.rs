use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::rides::dto::create_ride_dto::CreateRideDto;
use crate::rides::repository::ride_repository::CreateRide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RideValidationError {
  #[error("Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively")]
  StartCoordinates,

  #[error("End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively")]
  EndCoordinates,

  #[error("Rider name must be a non empty string")]
  RiderName,

  #[error("Driver name must be a non empty string")]
  DriverName,

  #[error("Driver vehicle must be a non empty string")]
  DriverVehicle,
}

// Checked in this order; the first group with a failing field is reported.
const RULES: [(RideValidationError, &[&str]); 5] = [
  (RideValidationError::StartCoordinates, &["start_lat", "start_long"]),
  (RideValidationError::EndCoordinates, &["end_lat", "end_long"]),
  (RideValidationError::RiderName, &["rider_name"]),
  (RideValidationError::DriverName, &["driver_name"]),
  (RideValidationError::DriverVehicle, &["driver_vehicle"]),
];

pub fn validate_ride(dto: &CreateRideDto) -> Result<(), RideValidationError> {
  let result = dto.validate();
  if result.is_ok() {
    return Ok(());
  }
  RULES
    .iter()
    .find(|(_, fields)| {
      fields
        .iter()
        .any(|field| ValidationErrors::has_error(&result, *field))
    })
    .map_or(Ok(()), |(rule, _)| Err(*rule))
}

impl TryFrom<CreateRideDto> for CreateRide {
  type Error = RideValidationError;

  fn try_from(dto: CreateRideDto) -> Result<Self, Self::Error> {
    validate_ride(&dto)?;
    Ok(Self {
      start_lat: dto.start_lat.ok_or(RideValidationError::StartCoordinates)?,
      start_long: dto.start_long.ok_or(RideValidationError::StartCoordinates)?,
      end_lat: dto.end_lat.ok_or(RideValidationError::EndCoordinates)?,
      end_long: dto.end_long.ok_or(RideValidationError::EndCoordinates)?,
      rider_name: dto.rider_name.ok_or(RideValidationError::RiderName)?,
      driver_name: dto.driver_name.ok_or(RideValidationError::DriverName)?,
      driver_vehicle: dto
        .driver_vehicle
        .ok_or(RideValidationError::DriverVehicle)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn valid_dto() -> CreateRideDto {
    CreateRideDto {
      start_lat: Some(70.0),
      start_long: Some(100.0),
      end_lat: Some(75.0),
      end_long: Some(110.0),
      rider_name: Some(String::from("Test Rider")),
      driver_name: Some(String::from("Driver Name")),
      driver_vehicle: Some(String::from("Bike")),
    }
  }

  #[test]
  fn test_valid_payload_passes() {
    assert_eq!(validate_ride(&valid_dto()), Ok(()));
  }

  #[test]
  fn test_boundaries_are_inclusive() {
    let dto = CreateRideDto {
      start_lat: Some(-90.0),
      start_long: Some(180.0),
      end_lat: Some(90.0),
      end_long: Some(-180.0),
      ..valid_dto()
    };
    assert_eq!(validate_ride(&dto), Ok(()));
  }

  #[test]
  fn test_start_coordinates_out_of_range() {
    for (lat, long) in [(200.0, 0.0), (-90.5, 0.0), (0.0, 180.1), (0.0, -181.0)] {
      let dto = CreateRideDto {
        start_lat: Some(lat),
        start_long: Some(long),
        ..valid_dto()
      };
      assert_eq!(
        validate_ride(&dto),
        Err(RideValidationError::StartCoordinates),
        "({lat}, {long})"
      );
    }
  }

  #[test]
  fn test_end_coordinates_out_of_range() {
    let dto = CreateRideDto {
      end_lat: Some(91.0),
      ..valid_dto()
    };
    assert_eq!(validate_ride(&dto), Err(RideValidationError::EndCoordinates));

    let dto = CreateRideDto {
      end_long: None,
      ..valid_dto()
    };
    assert_eq!(validate_ride(&dto), Err(RideValidationError::EndCoordinates));
  }

  #[test]
  fn test_empty_or_missing_names() {
    let dto = CreateRideDto {
      rider_name: Some(String::new()),
      ..valid_dto()
    };
    assert_eq!(validate_ride(&dto), Err(RideValidationError::RiderName));

    let dto = CreateRideDto {
      driver_name: None,
      ..valid_dto()
    };
    assert_eq!(validate_ride(&dto), Err(RideValidationError::DriverName));

    let dto = CreateRideDto {
      driver_vehicle: Some(String::new()),
      ..valid_dto()
    };
    assert_eq!(validate_ride(&dto), Err(RideValidationError::DriverVehicle));
  }

  #[test]
  fn test_first_failing_rule_wins() {
    let dto = CreateRideDto {
      start_lat: Some(200.0),
      end_lat: Some(-200.0),
      rider_name: None,
      ..valid_dto()
    };
    assert_eq!(validate_ride(&dto), Err(RideValidationError::StartCoordinates));

    let dto = CreateRideDto {
      rider_name: None,
      driver_vehicle: None,
      ..valid_dto()
    };
    assert_eq!(validate_ride(&dto), Err(RideValidationError::RiderName));

    assert_eq!(
      validate_ride(&CreateRideDto::default()),
      Err(RideValidationError::StartCoordinates)
    );
  }

  #[test]
  fn test_messages_name_the_rule() {
    assert_eq!(
      RideValidationError::DriverVehicle.to_string(),
      "Driver vehicle must be a non empty string"
    );
    assert!(RideValidationError::EndCoordinates
      .to_string()
      .starts_with("End latitude and longitude"));
  }

  #[test]
  fn test_create_ride_from_valid_dto() {
    let create_ride =
      CreateRide::try_from(valid_dto()).expect("payload should be valid");
    assert_eq!(create_ride.start_lat, 70.0);
    assert_eq!(create_ride.end_long, 110.0);
    assert_eq!(create_ride.rider_name, "Test Rider");
    assert_eq!(create_ride.driver_vehicle, "Bike");
  }

  #[test]
  fn test_create_ride_from_invalid_dto() {
    let dto = CreateRideDto {
      driver_name: Some(String::new()),
      ..valid_dto()
    };
    assert_eq!(
      CreateRide::try_from(dto),
      Err(RideValidationError::DriverName)
    );
  }
}
