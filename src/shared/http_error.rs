use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
  ValidationError,
  ServerError,
  RidesNotFound,
}

impl ErrorCode {
  pub fn status_code(&self) -> StatusCode {
    match self {
      ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
      ErrorCode::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
      ErrorCode::RidesNotFound => StatusCode::NOT_FOUND,
    }
  }
}

/// Body returned for every non-success outcome. `status` always mirrors the
/// transport status of the response carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct HttpError {
  pub error_code: ErrorCode,
  pub message: String,
  pub status: u16,
}

impl HttpError {
  pub fn new(error_code: ErrorCode, message: impl Into<String>) -> Self {
    Self {
      error_code,
      message: message.into(),
      status: error_code.status_code().as_u16(),
    }
  }

  pub fn validation(message: impl Into<String>) -> Self {
    Self::new(ErrorCode::ValidationError, message)
  }

  pub fn server_error() -> Self {
    Self::new(ErrorCode::ServerError, "Unknown error")
  }

  pub fn rides_not_found() -> Self {
    Self::new(ErrorCode::RidesNotFound, "Could not find any rides")
  }
}

impl ResponseError for HttpError {
  fn status_code(&self) -> StatusCode {
    self.error_code.status_code()
  }

  fn error_response(&self) -> HttpResponse {
    HttpResponse::build(self.status_code())
      .content_type("application/json")
      .json(self)
  }
}
