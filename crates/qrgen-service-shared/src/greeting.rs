//! Greeting handler, also used as a liveness probe.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

/// Text returned by [`greeting`].
pub const GREETING: &str = "Hello, World";

/// Greeting body. Same single-field shape as [`crate::ErrorResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// Handle `GET /`.
///
/// Always returns 200 with a fixed message. It touches no state, so a
/// response means the process is up and serving.
///
/// ```text
/// GET /
/// {"message":"Hello, World"}
/// ```
pub async fn greeting() -> impl IntoResponse {
    let body = Greeting {
        message: GREETING.to_string(),
    };
    (StatusCode::OK, Json(body))
}
