//! Shared infrastructure for the qrgen HTTP microservice.
//!
//! This crate provides the HTTP glue used by the service binary:
//!
//! - [`greeting`]: Hello-world handler doubling as a liveness probe
//! - [`ApiError`] / [`ErrorResponse`]: JSON error responses
//! - [`QrCodeQuery`]: Query-string parsing and validation for `/qrcode`
//! - [`ServiceConfig`]: Listener configuration read from the environment
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Access logging with request correlation IDs
//!
//! # Architecture
//!
//! The service follows a thin-handler pattern where QR encoding and rendering
//! reside in `qrgen-lib`. This crate provides only HTTP glue:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse query string                                       │
//! │  - Validate parameters                                      │
//! │  - Call qrgen-lib APIs                                      │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides fixtures for handler testing. Enable the
//! `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod config;
mod error;
mod greeting;
pub mod logging;
pub mod middleware;
mod request;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ServiceConfig, DEFAULT_PORT};
pub use error::{
    ApiError, ErrorResponse, MESSAGE_ENCODE_FAILED, MESSAGE_INVALID_SIZE, MESSAGE_MISSING_DATA,
};
pub use greeting::{greeting, Greeting, GREETING};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, AccessLogLayer, RequestId};
pub use request::{QrCodeQuery, QrCodeRequest, Validate, DEFAULT_SIZE, MAX_SIZE};
