use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{Error, Result};

pub const JPEG_QUALITY: u8 = 100;

pub fn write_rgb_jpeg(output: &Path, cols: u32, rows: u32, rgb_data: &[u8]) -> Result<()> {
    let limit = u16::MAX as u32;
    if cols > limit || rows > limit {
        return Err(Error::ImageTooLarge {
            width: cols,
            height: rows,
            limit,
            format: "JPEG",
        });
    }
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, JPEG_QUALITY);
    encoder.encode(rgb_data, cols as u16, rows as u16, ColorType::Rgb)?;
    Ok(())
}
