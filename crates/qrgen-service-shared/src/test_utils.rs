//! Test utilities for handler testing.
//!
//! Fixtures and helpers shared by the service crates' tests. Enable the
//! `test-utils` feature to use them from another crate.

/// A short payload that fits in a version 1 symbol at every level.
pub const SAMPLE_DATA: &str = "hello";

/// Side length in modules (quiet zone included) of [`SAMPLE_DATA`] at Medium.
pub const SAMPLE_MODULES: u32 = 21 + 2 * qrgen_lib::QUIET_ZONE;

/// A payload larger than the biggest QR symbol can hold at Medium
/// error correction (2331 bytes).
pub fn oversized_data() -> String {
    "x".repeat(4000)
}

/// Decode PNG bytes and return `(width, height)`.
///
/// # Panics
///
/// Panics if the bytes are not a valid PNG image.
pub fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
    let image = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .unwrap_or_else(|e| panic!("response body is not a PNG image: {}", e));
    (image.width(), image.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrgen_lib::{encode_png, ErrorCorrection};

    #[test]
    fn test_sample_data_module_count() {
        let png = encode_png(SAMPLE_DATA, ErrorCorrection::Medium, 0).unwrap();
        assert_eq!(png_dimensions(&png), (SAMPLE_MODULES, SAMPLE_MODULES));
    }

    #[test]
    fn test_oversized_data_is_rejected() {
        assert!(encode_png(&oversized_data(), ErrorCorrection::Medium, 256).is_err());
    }

    #[test]
    #[should_panic(expected = "not a PNG")]
    fn test_png_dimensions_rejects_garbage() {
        png_dimensions(b"definitely not an image");
    }
}
