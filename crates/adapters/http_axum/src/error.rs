//! HTTP error response mapping.

use std::error::Error;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use machinehub_domain::error::MachineHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Every failure a handler can surface, mapped to an HTTP response.
pub enum ApiError {
    /// The application layer rejected or failed the request.
    Domain(MachineHubError),
    /// The request body could not be decoded.
    Body(JsonRejection),
}

impl From<MachineHubError> for ApiError {
    fn from(err: MachineHubError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Body(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                (rejection.status(), rejection.body_text())
            }
            Self::Domain(MachineHubError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::Domain(MachineHubError::Conflict(err)) => (StatusCode::CONFLICT, err.to_string()),
            Self::Domain(err @ MachineHubError::Storage(_)) => {
                tracing::error!(error = %error_chain(&err), "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Render an error followed by every nested source, separated by `: `.
fn error_chain(err: &dyn Error) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
