#[cfg(test)]
pub mod tests {
  use crate::{rides::repository::ride_repository::CreateRide, shared::config::Config};
  use actix_web::{
    http::{header::HeaderValue, StatusCode},
    HttpRequest, Responder,
  };
  use fake::{
    faker::{lorem::en::Word, name::en::Name},
    Fake,
  };
  use serde::de::DeserializeOwned;

  /// Built by hand so tests never race with the env-driven `Config::default`.
  pub fn test_config() -> Config {
    Config {
      host: String::from("127.0.0.1"),
      port: 8010,
      database_url: String::from("sqlite::memory:"),
      default_page_size: 10,
      workers: 1,
      log_level: String::from("debug"),
      log_file: None,
    }
  }

  pub fn fake_create_ride() -> CreateRide {
    CreateRide {
      start_lat: (-90.0f64..90.0).fake(),
      start_long: (-180.0f64..180.0).fake(),
      end_lat: (-90.0f64..90.0).fake(),
      end_long: (-180.0f64..180.0).fake(),
      rider_name: Name().fake(),
      driver_name: Name().fake(),
      driver_vehicle: Word().fake(),
    }
  }

  pub fn fake_create_ride_payload() -> serde_json::Value {
    let ride = fake_create_ride();
    serde_json::json!({
      "start_lat": ride.start_lat,
      "start_long": ride.start_long,
      "end_lat": ride.end_lat,
      "end_long": ride.end_long,
      "rider_name": ride.rider_name,
      "driver_name": ride.driver_name,
      "driver_vehicle": ride.driver_vehicle,
    })
  }

  pub fn test_request() -> HttpRequest {
    actix_web::test::TestRequest::default()
      .append_header((
        actix_web::http::header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
      ))
      .to_http_request()
  }

  pub async fn parse_http_response<T: DeserializeOwned>(
    responder: impl Responder,
    request: &HttpRequest,
    status_code: StatusCode,
  ) -> T {
    // Convert the `Responder` into an HttpResponse
    let http_response = responder.respond_to(request);

    // Wrap the HttpResponse in a ServiceResponse so that test utilities can work with it
    let service_response =
      actix_web::test::TestRequest::default().to_srv_response(http_response);

    let service_status_code = service_response.status();
    let body_bytes = actix_web::test::read_body(service_response).await;
    let body_string = String::from_utf8(body_bytes.to_vec())
      .expect("Response body contains invalid UTF-8");

    println!("Response Body (String): {}", body_string);

    assert_eq!(service_status_code, status_code);

    serde_json::from_str(&body_string)
      .expect("Failed to deserialize response body")
  }
}
