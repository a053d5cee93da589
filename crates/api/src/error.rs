use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use greeter_core::error::CoreError;
use greeter_core::validation::{FieldErrorMap, MalformedPayload, ValidateError};
use serde_json::json;

use crate::response::FieldErrorsResponse;

/// Application-level error type for HTTP handlers.
///
/// Each variant is one terminal state of the request pipeline. Only
/// [`AppError::Validation`] exposes details to the client; everything else
/// is logged in full and answered with an opaque 500 envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be read off the wire.
    #[error("Failed to read request body: {0}")]
    BodyRead(#[from] axum::Error),

    /// The body is not JSON, or not a JSON object.
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] MalformedPayload),

    /// The body is well-formed but breaks declared field rules.
    #[error("Validation failed: {0}")]
    Validation(FieldErrorMap),

    /// The body passed validation but does not fit the typed request.
    #[error("Failed to decode request: {0}")]
    Decode(#[source] serde_json::Error),

    /// The business operation failed.
    #[error(transparent)]
    Operation(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidateError> for AppError {
    fn from(err: ValidateError) -> Self {
        match err {
            ValidateError::Malformed(malformed) => Self::MalformedPayload(malformed),
            ValidateError::Invalid(errors) => Self::Validation(errors),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = match &self {
            AppError::Validation(errors) => {
                tracing::warn!(%errors, "Validation error");
                return (
                    StatusCode::BAD_REQUEST,
                    axum::Json(FieldErrorsResponse {
                        errors: errors.clone(),
                    }),
                )
                    .into_response();
            }
            AppError::BodyRead(_) => "body_read",
            AppError::MalformedPayload(_) => "malformed_payload",
            AppError::Decode(_) => "decode",
            AppError::Operation(_) => "operation",
        };
        tracing::error!(error = %self, kind, "Internal error");

        let body = json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
