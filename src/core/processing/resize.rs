use std::path::Path;

use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbaImage;
use tracing::debug;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::io::read_rgba;

/// Resize interleaved 8-bit pixels with the given filter. For `U8x4` the
/// resizer premultiplies by alpha, so transparent pixels carry no color weight.
pub fn resize_u8_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    pixel_type: PixelType,
    filter: FilterType,
) -> Result<Vec<u8>> {
    let resize_options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data.to_vec(), pixel_type)
        .map_err(Error::external)?;
    let mut dst_image = Image::new(target_cols, target_rows, pixel_type);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    Ok(dst_image.into_vec())
}

/// Average color of an image, taken by box-filtering it down to a single
/// pixel. Averaging is alpha-weighted and the result is opaque.
pub fn average_color(img: &RgbaImage) -> Result<Color> {
    let (cols, rows) = img.dimensions();
    if cols == 0 || rows == 0 {
        return Err(Error::Processing("cannot sample color of an empty image".into()));
    }
    let px = resize_u8_image(img.as_raw(), cols, rows, 1, 1, PixelType::U8x4, FilterType::Box)?;
    Ok(Color::rgb(px[0], px[1], px[2]))
}

/// Dominant color of an image file: all visible pixels are averaged, then alpha is dropped.
pub fn dominant_color(path: &Path) -> Result<Color> {
    let img = read_rgba(path)?;
    let color = average_color(&img)?;
    debug!("Dominant color of {:?}: {}", path, color);
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    #[test]
    fn uniform_image_keeps_its_color() {
        let img = RgbaImage::from_pixel(17, 9, Rgba([40, 120, 220, 255]));
        assert_eq!(average_color(&img).unwrap(), Color::rgb(40, 120, 220));
    }

    #[test]
    fn split_image_averages_halves() {
        let img = RgbaImage::from_fn(20, 10, |x, _| {
            if x < 10 { Rgba([200, 0, 0, 255]) } else { Rgba([0, 0, 200, 255]) }
        });
        let c = average_color(&img).unwrap();
        assert!(c.r.abs_diff(100) <= 3, "{c}");
        assert!(c.b.abs_diff(100) <= 3, "{c}");
        assert_eq!(c.g, 0);
    }

    #[test]
    fn transparent_pixels_do_not_count() {
        let img = RgbaImage::from_fn(20, 20, |x, _| {
            if x < 10 { Rgba([255, 0, 0, 255]) } else { Rgba([0, 0, 0, 0]) }
        });
        let c = average_color(&img).unwrap();
        assert!(c.r >= 253, "{c}");
        assert_eq!((c.g, c.b, c.a), (0, 0, 255));
    }

    #[test]
    fn resize_keeps_requested_shape() {
        let img = RgbImage::from_pixel(8, 4, Rgb([1, 2, 3]));
        let out =
            resize_u8_image(img.as_raw(), 8, 4, 4, 2, PixelType::U8x3, FilterType::Lanczos3)
                .unwrap();
        assert_eq!(out.len(), 4 * 2 * 3);
    }

    #[test]
    fn dominant_color_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.png");
        RgbImage::from_pixel(6, 6, Rgb([9, 99, 199])).save(&path).unwrap();
        assert_eq!(dominant_color(&path).unwrap(), Color::rgb(9, 99, 199));
    }

    #[test]
    fn dominant_color_ignores_transparent_margin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shadowed.png");
        let img = RgbaImage::from_fn(20, 20, |_, y| {
            if y < 10 { Rgba([0, 255, 0, 255]) } else { Rgba([0, 0, 0, 0]) }
        });
        img.save(&path).unwrap();
        let c = dominant_color(&path).unwrap();
        assert!(c.g >= 253, "{c}");
        assert_eq!((c.r, c.b), (0, 0));
    }
}
