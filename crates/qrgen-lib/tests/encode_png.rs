use qrgen_lib::{encode_png, Error, ErrorCorrection, MAX_IMAGE_SIDE, QUIET_ZONE};

fn decode(png: &[u8]) -> (u32, u32) {
    let image = image::load_from_memory(png).expect("valid PNG");
    (image.width(), image.height())
}

#[test]
fn encodes_requested_square_size() {
    let png = encode_png("https://example.com", ErrorCorrection::Medium, 256)
        .expect("short URL encodes");
    assert_eq!(decode(&png), (256, 256));
}

#[test]
fn zero_size_yields_one_pixel_per_module() {
    let png = encode_png("hello", ErrorCorrection::Medium, 0).expect("encodes");
    // Version 1 is 21 modules wide plus the quiet zone on both sides.
    let side = 21 + 2 * QUIET_ZONE;
    assert_eq!(decode(&png), (side, side));
}

#[test]
fn negative_size_scales_each_module() {
    let png = encode_png("hello", ErrorCorrection::Medium, -3).expect("encodes");
    let side = (21 + 2 * QUIET_ZONE) * 3;
    assert_eq!(decode(&png), (side, side));
}

#[test]
fn larger_payload_needs_more_modules_than_small_size() {
    // 500 bytes need a symbol far wider than 50 modules at Medium, so the
    // 50px request is silently raised to the module count.
    let data = "x".repeat(500);
    let png = encode_png(&data, ErrorCorrection::Medium, 50).expect("encodes");
    let (width, height) = decode(&png);
    assert_eq!(width, height);
    assert!(width > 50);
}

#[test]
fn data_beyond_capacity_is_rejected() {
    let data = "x".repeat(4000);
    let err = encode_png(&data, ErrorCorrection::Medium, 256).expect_err("too long");
    assert!(matches!(err, Error::DataTooLong { .. }));
    assert_eq!(
        format!("{err}"),
        "data of 4000 bytes exceeds the capacity of a QR code at medium error correction"
    );
}

#[test]
fn oversized_render_is_rejected() {
    let err = encode_png("hello", ErrorCorrection::Medium, -1000).expect_err("too large");
    match err {
        Error::ImageTooLarge { size, max } => {
            assert_eq!(size, -1000);
            assert_eq!(max, MAX_IMAGE_SIDE);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
