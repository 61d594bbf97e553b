use std::path::{Path, PathBuf};

use image::{RgbaImage, imageops};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::core::processing::geometry::{TRANSPARENT, rotate_expand, trim_transparent};
use crate::error::{Error, Result};
use crate::io::read_rgba;

/// Rotate `img` by `angle`, trim it, and cut band `index` of `count` equal
/// horizontal bands across the full width.
pub fn extract_band(img: &RgbaImage, index: usize, count: usize, angle: i32) -> Result<RgbaImage> {
    if count == 0 || index >= count {
        return Err(Error::Processing(format!(
            "band index {index} out of range for {count} bands"
        )));
    }
    let rotated = trim_transparent(&rotate_expand(img, angle));
    let (width, height) = rotated.dimensions();

    let band_height = height / count as u32;
    if band_height == 0 {
        return Err(Error::BandTooShort { height, count });
    }
    let top = index as u32 * band_height;
    Ok(imageops::crop_imm(&rotated, 0, top, width, band_height).to_image())
}

fn load_band(path: &Path, index: usize, count: usize, angle: i32) -> Result<RgbaImage> {
    let img = read_rgba(path)?;
    extract_band(&img, index, count, angle)
}

/// Fan out one worker per input. Slot `i` holds the band cut from input `i`,
/// or `None` when that input could not be read or cut.
pub fn extract_bands(paths: &[PathBuf], angle: i32) -> Vec<Option<RgbaImage>> {
    let count = paths.len();
    paths
        .par_iter()
        .enumerate()
        .map(|(index, path)| match load_band(path, index, count, angle) {
            Ok(band) => {
                debug!(
                    "Band {}/{} from {:?}: {}x{}",
                    index + 1,
                    count,
                    path,
                    band.width(),
                    band.height()
                );
                Some(band)
            }
            Err(e) => {
                warn!("Error reading image {:?}: {}", path, e);
                None
            }
        })
        .collect()
}

/// Stack the bands top to bottom (left-aligned on a transparent canvas),
/// undo the rotation, and trim. Empty slots are skipped.
pub fn merge_bands(slots: &[Option<RgbaImage>], angle: i32) -> Result<RgbaImage> {
    let bands: Vec<&RgbaImage> = slots
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| {
            if slot.is_none() {
                warn!("Band {} is missing, merging without it", index + 1);
            }
            slot.as_ref()
        })
        .collect();
    if bands.is_empty() {
        return Err(Error::NoBands);
    }

    let width = bands.iter().map(|b| b.width()).max().unwrap_or(0);
    let height: u32 = bands.iter().map(|b| b.height()).sum();
    info!(
        "Merging {} bands into {}x{} before counter-rotation",
        bands.len(),
        width,
        height
    );

    let mut canvas = RgbaImage::from_pixel(width, height, TRANSPARENT);
    let mut y = 0i64;
    for band in bands {
        imageops::replace(&mut canvas, band, 0, y);
        y += band.height() as i64;
    }

    Ok(trim_transparent(&rotate_expand(&canvas, -angle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Image whose rows carry their own index in the red channel
    fn row_coded(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |_, y| Rgba([y as u8, 0, 0, 255]))
    }

    #[test]
    fn band_cut_follows_index() {
        let img = row_coded(6, 10);
        let band = extract_band(&img, 1, 3, 0).unwrap();
        assert_eq!(band.dimensions(), (6, 3));
        assert_eq!(band.get_pixel(0, 0).0[0], 3);
        assert_eq!(band.get_pixel(5, 2).0[0], 5);

        let last = extract_band(&img, 2, 3, 0).unwrap();
        assert_eq!(last.get_pixel(0, 0).0[0], 6);
    }

    #[test]
    fn too_short_image_is_rejected() {
        let img = row_coded(6, 2);
        assert!(matches!(
            extract_band(&img, 0, 3, 0),
            Err(Error::BandTooShort { height: 2, count: 3 })
        ));
        assert!(extract_band(&img, 3, 3, 0).is_err());
    }

    #[test]
    fn merge_stacks_in_slot_order_and_skips_gaps() {
        let red = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        let blue = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 255, 255]));
        let merged = merge_bands(&[Some(red), None, Some(blue)], 0).unwrap();

        assert_eq!(merged.dimensions(), (4, 5));
        assert_eq!(merged.get_pixel(0, 1), &Rgba([255, 0, 0, 255]));
        assert_eq!(merged.get_pixel(0, 2), &Rgba([0, 0, 255, 255]));
        // Narrower band leaves the right edge transparent
        assert_eq!(merged.get_pixel(3, 4).0[3], 0);
    }

    #[test]
    fn merge_without_bands_fails() {
        assert!(matches!(merge_bands(&[None, None], 9), Err(Error::NoBands)));
        assert!(matches!(merge_bands(&[], 0), Err(Error::NoBands)));
    }

    #[test]
    fn extract_bands_keeps_input_order_and_marks_failures() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for (i, shade) in [10u8, 20, 30].iter().enumerate() {
            let path = dir.path().join(format!("in{i}.png"));
            RgbaImage::from_pixel(5, 9, Rgba([*shade, 0, 0, 255]))
                .save(&path)
                .unwrap();
            paths.push(path);
        }
        paths.insert(1, dir.path().join("missing.png"));

        let slots = extract_bands(&paths, 0);
        assert_eq!(slots.len(), 4);
        assert!(slots[1].is_none());
        let shades: Vec<u8> = slots
            .iter()
            .flatten()
            .map(|b| b.get_pixel(0, 0).0[0])
            .collect();
        assert_eq!(shades, vec![10, 20, 30]);
        // Four inputs: every band is a quarter of the 9px height
        assert!(slots.iter().flatten().all(|b| b.height() == 2));
    }
}
