//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tukku_core::error::TukkuError;

/// Wire-level error: every handler failure becomes a `{"error": …}`
/// envelope with a taxonomy-mapped status code. Internal detail is logged
/// here and never reaches the client.
#[derive(Debug)]
pub struct ApiError(pub TukkuError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<TukkuError> for ApiError {
    fn from(err: TukkuError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TukkuError::InvalidInput { message } => (StatusCode::BAD_REQUEST, message.clone()),
            TukkuError::AuthenticationFailed { .. } => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            TukkuError::NotFound { entity, .. } => {
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            TukkuError::Misconfigured { .. } => {
                tracing::error!(error = %self.0, "server misconfiguration");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server misconfiguration".to_string(),
                )
            }
            other => {
                tracing::error!(error = %other, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
