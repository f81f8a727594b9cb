//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  /// Input failed shape or bounds validation.
  #[error("validation: {0}")]
  Validation(String),

  /// A uniqueness rule (email, group name) would be violated. Rendered as
  /// 400, the same status as validation failures.
  #[error("conflict: {0}")]
  Conflict(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Validation(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {e}"))
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

impl From<rolo_core::Error> for ApiError {
  fn from(e: rolo_core::Error) -> Self {
    use rolo_core::Error;
    match e {
      Error::ContactNotFound(_) => {
        ApiError::NotFound("Contact not found".to_string())
      }
      Error::GroupNotFound(_) => {
        ApiError::NotFound("Group not found".to_string())
      }
      Error::EmailTaken(_) => {
        ApiError::Conflict("Email already registered".to_string())
      }
      Error::GroupNameTaken(_) => {
        ApiError::Conflict("Group name already exists".to_string())
      }
      Error::Backend(e) => ApiError::Store(e),
    }
  }
}
