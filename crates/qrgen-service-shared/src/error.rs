//! JSON error responses.
//!
//! Every failed request is answered with a body of the form
//! `{"message": "..."}` and `Content-Type: application/json`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when `data` is missing or empty.
pub const MESSAGE_MISSING_DATA: &str = "Data is required to create the QR code.";

/// Message returned when `size` is not an integer.
pub const MESSAGE_INVALID_SIZE: &str = "Size in invalid.";

/// Message returned when the encoder cannot produce an image.
pub const MESSAGE_ENCODE_FAILED: &str = "Failed to create the QR code from the given data.";

/// Body of every JSON error response: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `data` was absent or empty.
    #[error("{}", MESSAGE_MISSING_DATA)]
    MissingData,

    /// `size` was present but not an integer.
    #[error("{}", MESSAGE_INVALID_SIZE)]
    InvalidSize { raw: String },

    /// The encoder rejected the request.
    #[error("{}", MESSAGE_ENCODE_FAILED)]
    EncodeFailed(#[source] qrgen_lib::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingData | ApiError::InvalidSize { .. } => StatusCode::BAD_REQUEST,
            ApiError::EncodeFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<qrgen_lib::Error> for ApiError {
    fn from(err: qrgen_lib::Error) -> Self {
        ApiError::EncodeFailed(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::EncodeFailed(source) => {
                tracing::warn!(error = %source, "QR encoding failed");
            }
            ApiError::InvalidSize { raw } => {
                tracing::debug!(size = %raw, "rejected non-integer size");
            }
            ApiError::MissingData => {
                tracing::debug!("rejected request without data");
            }
        }

        // Json sets Content-Type: application/json.
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    #[test]
    fn test_error_response_serialization() {
        let json = serde_json::to_string(&ErrorResponse::new(MESSAGE_INVALID_SIZE)).unwrap();
        assert_eq!(json, r#"{"message":"Size in invalid."}"#);
    }

    #[test]
    fn test_api_error_messages() {
        assert_eq!(ApiError::MissingData.to_string(), MESSAGE_MISSING_DATA);
        assert_eq!(
            ApiError::InvalidSize {
                raw: "abc".to_string()
            }
            .to_string(),
            MESSAGE_INVALID_SIZE
        );
        let err = ApiError::from(qrgen_lib::Error::Encode("boom".to_string()));
        assert_eq!(err.to_string(), MESSAGE_ENCODE_FAILED);
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::MissingData.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidSize { raw: "1.5".into() }.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::EncodeFailed(qrgen_lib::Error::Encode("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_keeps_source() {
        use std::error::Error as _;

        let err = ApiError::EncodeFailed(qrgen_lib::Error::Encode("boom".into()));
        let source = err.source().expect("encode failures carry their cause");
        assert!(source.to_string().contains("boom"));
    }

    #[test]
    fn test_api_error_into_response() {
        let response = ApiError::MissingData.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
