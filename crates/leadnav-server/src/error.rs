//! Error types for the LeadNav API.
//!
//! [`ApiError`] unifies all failure modes and implements
//! [`axum::response::IntoResponse`] so handlers can return
//! `Result<…, ApiError>` directly. Every failure renders as the standard
//! `{success: false, message}` envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use leadnav_models::{ApiResponse, ModelError};
use leadnav_store::StoreError;

/// Errors that can occur while serving an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request input failed validation; rejected before any storage call.
    #[error("{0}")]
    Validation(#[from] ModelError),

    /// Missing, malformed, or unverifiable bearer token.
    #[error("{0}")]
    Unauthorized(String),

    /// No record exists for this user — an expected steady state.
    #[error("{0}")]
    NotFound(&'static str),

    /// The storage backend failed. The caller sees only `message`; the
    /// underlying detail goes to the log.
    #[error("{message}")]
    Storage {
        /// Opaque message reported to the caller.
        message: &'static str,
        /// Backend failure detail, logged only.
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Wrap a backend failure with the opaque message for this operation.
    pub fn storage(message: &'static str, source: StoreError) -> Self {
        Self::Storage { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let Self::Storage { message, source } = &self {
            // Internal detail stays in the log; the caller only sees `message`.
            tracing::error!(%status, error = %source, "{message}");
        } else {
            tracing::warn!(%status, error = %self, "request rejected");
        }

        let body = ApiResponse::<()>::error(self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let resp = ApiError::Validation(ModelError::EmptyCookie).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let resp = ApiError::Unauthorized("Authentication required".into()).into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn not_found_maps_to_404() {
        let resp = ApiError::NotFound("No cookie found for this user").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_maps_to_500_with_opaque_message() {
        let err = ApiError::storage(
            "Failed to save cookie",
            StoreError::Backend("connection reset by peer".into()),
        );
        assert_eq!(err.to_string(), "Failed to save cookie");
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
