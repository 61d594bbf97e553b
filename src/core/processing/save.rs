use std::path::Path;

use image::{RgbImage, RgbaImage};
use tracing::info;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::tiff::write_tiff_rgba8;
use crate::types::OutputFormat;

/// Composite RGBA over an opaque background color, dropping alpha.
pub fn flatten_over(img: &RgbaImage, background: Color) -> RgbImage {
    let bg = [background.r, background.g, background.b];
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let a = a as u32;
        let mix =
            |c: u8, under: u8| ((c as u32 * a + under as u32 * (255 - a) + 127) / 255) as u8;
        image::Rgb([mix(r, bg[0]), mix(g, bg[1]), mix(b, bg[2])])
    })
}

pub fn save_image(img: &RgbaImage, output: &Path, format: OutputFormat) -> Result<()> {
    let (cols, rows) = img.dimensions();
    if format.is_jpeg() {
        let rgb = flatten_over(img, Color::WHITE);
        write_rgb_jpeg(output, cols, rows, rgb.as_raw())?;
    } else if format.is_tiff() {
        write_tiff_rgba8(output, cols, rows, img.as_raw())?;
    } else {
        let encoder = format
            .image_format()
            .ok_or_else(|| Error::Processing(format!("no encoder for format {format}")))?;
        img.save_with_format(output, encoder)?;
    }
    info!("save_image: {} {}x{} written to {:?}", format, cols, rows, output);
    Ok(())
}
