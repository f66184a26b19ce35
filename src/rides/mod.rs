pub mod dto;
pub mod model;
pub mod repository;
pub mod rto;
pub mod validation;

use actix_web::{http::header, web, HttpResponse, Responder, ResponseError};
use dto::create_ride_dto::CreateRideDto;
use dto::get_ride_dto::GetRideDto;
use dto::list_rides_dto::ListRidesDto;
use log::{debug, error, info, warn};
use serde_json::{Map, Value};
use std::fmt::Display;
use model::Ride;
use repository::ride_repository::{CreateRide, RideRepository, RideRepositoryError};
use rto::ride_rto::RideRto;
use validation::RideValidationError;

use crate::shared::http_error::HttpError;
use crate::AppState;

pub async fn create_ride<RR: RideRepository + 'static>(
  data: web::Data<AppState<RR>>,
  payload: web::Json<Map<String, Value>>,
) -> impl Responder {
  let dto = match CreateRideDto::try_from(payload.into_inner()) {
    Ok(dto) => dto,
    Err(err) => return malformed_ride(err).error_response(),
  };
  let create_ride = match CreateRide::try_from(dto) {
    Ok(create_ride) => create_ride,
    Err(failure) => return invalid_ride(failure),
  };
  data
    .ride_repository
    .create(create_ride)
    .await
    .map(ride_created)
    .unwrap_or_else(store_failure)
}

pub async fn list_rides<RR: RideRepository + 'static>(
  data: web::Data<AppState<RR>>,
  query: web::Query<ListRidesDto>,
) -> impl Responder {
  let pagination = query.pagination(data.config.default_page_size);
  data
    .ride_repository
    .find_all(pagination)
    .await
    .map(|rides| {
      if rides.is_empty() {
        rides_not_found()
      } else {
        rides_found(rides)
      }
    })
    .unwrap_or_else(store_failure)
}

pub async fn get_ride<RR: RideRepository + 'static>(
  data: web::Data<AppState<RR>>,
  path: web::Path<GetRideDto>,
) -> impl Responder {
  let Some(ride_id) = path.ride_id() else {
    return rides_not_found();
  };
  data
    .ride_repository
    .find_one(ride_id)
    .await
    .map(|ride| match ride {
      Some(ride) => rides_found(vec![ride]),
      None => rides_not_found(),
    })
    .unwrap_or_else(store_failure)
}

/// Malformed JSON bodies, and bodies that are not a JSON object, get the
/// same envelope as a failed validation rule.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .content_type_required(false)
    .error_handler(|err, _request| malformed_ride(err).into())
}

fn malformed_ride(err: impl Display) -> HttpError {
  warn!("Rejected ride payload: {}", err);
  HttpError::validation(format!("Invalid ride payload: {}", err))
}

// The created ride is wrapped in a list, like every other ride response.
fn ride_created(ride: Ride) -> HttpResponse {
  info!("Created ride {}", ride.ride_id);
  HttpResponse::Created()
    .content_type("application/json")
    .append_header((header::LOCATION, format!("/rides/{}", ride.ride_id)))
    .json(vec![RideRto::from(ride)])
}

fn rides_found(rides: Vec<Ride>) -> HttpResponse {
  HttpResponse::Ok()
    .content_type("application/json")
    .json(rides.into_iter().map(RideRto::from).collect::<Vec<_>>())
}

fn rides_not_found() -> HttpResponse {
  debug!("No rides matched the request");
  HttpError::rides_not_found().error_response()
}

fn invalid_ride(failure: RideValidationError) -> HttpResponse {
  warn!("Ride validation failed: {}", failure);
  HttpError::validation(failure.to_string()).error_response()
}

fn store_failure(error: RideRepositoryError) -> HttpResponse {
  error!("Ride store failure: {}", error);
  HttpError::server_error().error_response()
}

// Transform Ride domain to RTO
impl From<Ride> for RideRto {
  fn from(ride: Ride) -> Self {
    Self {
      ride_id: ride.ride_id,
      start_lat: ride.start_lat,
      start_long: ride.start_long,
      end_lat: ride.end_lat,
      end_long: ride.end_long,
      rider_name: ride.rider_name,
      driver_name: ride.driver_name,
      driver_vehicle: ride.driver_vehicle,
      created: ride.created,
    }
  }
}
