//! Query parameters and validation for the QR endpoint.

use crate::ApiError;

/// Side length in pixels used when `size` is omitted.
pub const DEFAULT_SIZE: i64 = 256;

/// Upper bound applied to `size`.
pub const MAX_SIZE: i64 = 2048;

/// Validation trait for raw request types.
///
/// Implementations check every field and convert into the resolved request
/// the handler works with.
pub trait Validate {
    type Output;

    /// Validate the request, returning the first error found.
    fn validate(self) -> Result<Self::Output, ApiError>;
}

/// Raw query parameters of `GET /qrcode`, as sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrCodeQuery {
    pub data: Option<String>,

    pub size: Option<String>,
}

impl QrCodeQuery {
    /// Build the query from decoded key/value pairs.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "data" => &mut query.data,
                "size" => &mut query.size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// A validated QR request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCodeRequest {
    /// Non-empty payload to encode.
    pub data: String,
    /// Requested side length, at most [`MAX_SIZE`]. Zero and negative values
    /// are kept as-is and interpreted by the encoder.
    pub size: i64,
}

impl Validate for QrCodeQuery {
    type Output = QrCodeRequest;

    fn validate(self) -> Result<QrCodeRequest, ApiError> {
        let data = match self.data {
            Some(data) if !data.is_empty() => data,
            _ => return Err(ApiError::MissingData),
        };

        let size = match self.size.as_deref() {
            None | Some("") => DEFAULT_SIZE,
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| ApiError::InvalidSize {
                    raw: raw.to_string(),
                })?
                .min(MAX_SIZE),
        };

        Ok(QrCodeRequest { data, size })
    }
}
