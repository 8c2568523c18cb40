//! Error types for the HTTP boundary

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use super::types::ErrorResponse;
use crate::table_extractor::ConversionError;

/// Errors raised while handling a conversion request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body could not be buffered, e.g. it exceeds the size limit
    #[error("{message}")]
    BodyRejected { status: StatusCode, message: String },

    /// Request body is not valid UTF-8
    #[error("Cannot read request body")]
    BodyRead,

    /// `content` field could not be URL-decoded
    #[error("Cannot decode content: {0}")]
    Decode(String),

    /// Conversion pipeline failure
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::BodyRejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BodyRejected { status, .. } => *status,
            ApiError::BodyRead | ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Conversion(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Conversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(status = status.as_u16(), error = %self, "Conversion request failed");
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::BodyRead.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Decode("bad escape".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ConversionError::NoTable).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ConversionError::Encode("closed".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_rejected_body_keeps_its_status() {
        let err = ApiError::BodyRejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "length limit exceeded");
    }

    #[test]
    fn test_conversion_message_is_passed_through() {
        assert_eq!(ApiError::from(ConversionError::NoTable).to_string(), "no table");
    }
}
