use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::error::Result;

/// Decode any supported image into RGBA8, sniffing the format from content
/// when the extension is missing or wrong.
pub fn read_rgba(path: &Path) -> Result<RgbaImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgba8())
}
