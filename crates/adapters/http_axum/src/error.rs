//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use chorehub_domain::error::ChoreHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ChoreHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(ChoreHubError);

impl From<ChoreHubError> for ApiError {
    fn from(err: ChoreHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ChoreHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ChoreHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ChoreHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ChoreHubError::Broker(err) => {
                tracing::error!(error = %err, "broker error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
