//! QR encoding with a fixed error-correction level.

use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

use crate::error::{Error, Result};
use crate::render::render_png;

/// Error-correction level used when encoding.
///
/// Higher levels add redundancy and reduce how much data fits in a symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorCorrection {
    /// Recovers roughly 7% of damaged codewords.
    Low,
    /// Recovers roughly 15% of damaged codewords.
    #[default]
    Medium,
    /// Recovers roughly 25% of damaged codewords.
    Quartile,
    /// Recovers roughly 30% of damaged codewords.
    High,
}

impl ErrorCorrection {
    /// Human-readable label used in error messages and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCorrection::Low => "low",
            ErrorCorrection::Medium => "medium",
            ErrorCorrection::Quartile => "quartile",
            ErrorCorrection::High => "high",
        }
    }
}

impl From<ErrorCorrection> for EcLevel {
    fn from(value: ErrorCorrection) -> Self {
        match value {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

impl std::fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode `data` into a QR symbol, picking the smallest version that fits.
pub fn encode(data: &str, level: ErrorCorrection) -> Result<QrCode> {
    QrCode::with_error_correction_level(data.as_bytes(), level.into()).map_err(|e| match e {
        QrError::DataTooLong => Error::DataTooLong {
            len: data.len(),
            level: level.as_str(),
        },
        other => Error::Encode(other.to_string()),
    })
}

/// Encode `data` and render it as a PNG image.
///
/// `size` is the requested side length in pixels. See [`crate::side_length`]
/// for how zero, negative and too-small values are resolved.
///
/// # Example
///
/// ```
/// use qrgen_lib::{encode_png, ErrorCorrection};
///
/// let png = encode_png("https://example.com", ErrorCorrection::Medium, 256).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode_png(data: &str, level: ErrorCorrection, size: i64) -> Result<Vec<u8>> {
    let code = encode(data, level)?;
    tracing::debug!(
        version = ?code.version(),
        width = code.width(),
        level = %level,
        size,
        "encoded QR symbol"
    );
    render_png(&code, size)
}
