//! qrgen library entry points.
//!
//! This crate wraps the `qrcode` encoder and renders its module matrix into
//! PNG images of a requested pixel size. Higher-level consumers (the HTTP
//! service) should only depend on the functions exported here instead of
//! talking to the encoder directly.
//!

#![deny(warnings)]

pub mod encode;
pub mod error;
pub mod render;

pub use encode::{encode, encode_png, ErrorCorrection};
pub use error::{Error, Result};
pub use render::{render_png, side_length, MAX_IMAGE_SIDE, QUIET_ZONE};
