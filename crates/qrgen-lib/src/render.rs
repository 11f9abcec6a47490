//! Rasterize a QR symbol into a square grayscale PNG.
//!
//! The symbol is surrounded by a quiet zone of [`QUIET_ZONE`] modules on each
//! side. The canvas is `side × side` pixels where `side` comes from
//! [`side_length`]. Each module is drawn as a square of `side / modules`
//! pixels and the code is centered, so any leftover pixels form an even
//! white margin.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};

use crate::error::{Error, Result};

/// Width of the blank border around the symbol, in modules.
pub const QUIET_ZONE: u32 = 4;

/// Largest image side, in pixels, that will be rendered.
pub const MAX_IMAGE_SIDE: u32 = 8192;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Resolve the pixel side length for a symbol of `modules` modules
/// (quiet zone included).
///
/// - a negative `size` means "`-size` pixels per module"
/// - otherwise `size` is the side length in pixels
/// - a result smaller than `modules` is raised to `modules`
///
/// Returns [`Error::ImageTooLarge`] when the result exceeds [`MAX_IMAGE_SIDE`].
pub fn side_length(modules: u32, size: i64) -> Result<u32> {
    let modules = u64::from(modules);
    let requested = match u64::try_from(size) {
        Ok(pixels) => Some(pixels),
        Err(_) => modules.checked_mul(size.unsigned_abs()),
    };

    let side = requested.map(|side| side.max(modules));
    match side {
        Some(side) if side <= u64::from(MAX_IMAGE_SIDE) => Ok(side as u32),
        _ => Err(Error::ImageTooLarge {
            size,
            max: MAX_IMAGE_SIDE,
        }),
    }
}

/// Render an encoded symbol to PNG bytes at the requested `size`.
pub fn render_png(code: &QrCode, size: i64) -> Result<Vec<u8>> {
    let width = code.width() as u32;
    let modules = width + 2 * QUIET_ZONE;
    let side = side_length(modules, size)?;

    let scale = side / modules;
    let offset = (side - modules * scale) / 2 + QUIET_ZONE * scale;

    let mut canvas = GrayImage::from_pixel(side, side, LIGHT);
    for (i, color) in code.to_colors().into_iter().enumerate() {
        if color != Color::Dark {
            continue;
        }
        let x = offset + (i as u32 % width) * scale;
        let y = offset + (i as u32 / width) * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                canvas.put_pixel(x + dx, y + dy, DARK);
            }
        }
    }

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(canvas).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}
