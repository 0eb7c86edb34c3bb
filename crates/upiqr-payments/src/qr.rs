//! QR rasterization of payment payloads.

use crate::error::PaymentError;
use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;

/// Edge length of one QR module, in pixels.
const MODULE_SIZE: u32 = 10;

/// Width of the quiet zone around the symbol, in modules.
const QUIET_ZONE: u32 = 4;

/// Renders a payload string into an in-memory PNG.
///
/// The symbol uses error-correction level H so a print survives roughly 30%
/// damage. Module size and quiet zone are fixed, which together with the
/// deterministic PNG encoder makes the output byte-identical for a given
/// payload.
pub fn render_png(payload: &str) -> Result<Vec<u8>, PaymentError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)?;
    let modules = u32::try_from(code.width()).unwrap_or_default();
    let side = (modules + 2 * QUIET_ZONE) * MODULE_SIZE;

    let mut img = GrayImage::from_pixel(side, side, Luma([255u8]));
    for (index, color) in code.to_colors().into_iter().enumerate() {
        if color != Color::Dark {
            continue;
        }
        let index = u32::try_from(index).unwrap_or_default();
        let x0 = (index % modules + QUIET_ZONE) * MODULE_SIZE;
        let y0 = (index / modules + QUIET_ZONE) * MODULE_SIZE;
        for dy in 0..MODULE_SIZE {
            for dx in 0..MODULE_SIZE {
                img.put_pixel(x0 + dx, y0 + dy, Luma([0u8]));
            }
        }
    }

    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(img).write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}
