use thiserror::Error;

/// Convenient result alias for the qrgen library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The payload does not fit in the largest QR version at the chosen level.
    #[error("data of {len} bytes exceeds the capacity of a QR code at {level} error correction")]
    DataTooLong { len: usize, level: &'static str },

    /// Any other failure reported by the QR encoder.
    #[error("QR encoding failed: {0}")]
    Encode(String),

    /// Raised when the requested size would render an image beyond [`crate::MAX_IMAGE_SIDE`].
    #[error("requested size {size} renders an image larger than {max}px per side")]
    ImageTooLarge { size: i64, max: u32 },

    /// Wrapper for PNG encoding errors.
    #[error(transparent)]
    Png(#[from] image::ImageError),
}
