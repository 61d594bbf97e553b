use image::{GrayImage, Luma, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use tracing::debug;

const INSIDE: Luma<u8> = Luma([255]);

/// Coverage mask of a rounded rectangle spanning the whole canvas: 255 inside,
/// 0 outside, with anti-aliased arcs. The radius is clamped to half of the
/// shorter side.
pub fn rounded_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }
    let r = radius.min(width / 2).min(height / 2);
    if r == 0 {
        mask.pixels_mut().for_each(|p| *p = INSIDE);
        return mask;
    }

    // Cross of two rectangles, then the four corner squares
    if width > 2 * r {
        let band = Rect::at(r as i32, 0).of_size(width - 2 * r, height);
        draw_filled_rect_mut(&mut mask, band, INSIDE);
    }
    if height > 2 * r {
        let band = Rect::at(0, r as i32).of_size(width, height - 2 * r);
        draw_filled_rect_mut(&mut mask, band, INSIDE);
    }
    for y in 0..r {
        for x in 0..r {
            let coverage = Luma([arc_coverage(x, y, r)]);
            mask.put_pixel(x, y, coverage);
            mask.put_pixel(width - 1 - x, y, coverage);
            mask.put_pixel(x, height - 1 - y, coverage);
            mask.put_pixel(width - 1 - x, height - 1 - y, coverage);
        }
    }
    mask
}

/// Coverage of pixel `(x, y)` in the top-left corner square by a disc of
/// radius `r` centered at `(r, r)`, ramping over one pixel at the arc.
fn arc_coverage(x: u32, y: u32, r: u32) -> u8 {
    let r = r as f32;
    let dx = r - (x as f32 + 0.5);
    let dy = r - (y as f32 + 0.5);
    let distance = (dx * dx + dy * dy).sqrt();
    ((r + 0.5 - distance).clamp(0.0, 1.0) * 255.0).round() as u8
}

/// "In" composite of the image against its rounded mask: colors are kept,
/// alpha is scaled by mask coverage. `radius <= 0` returns the image as is.
pub fn round_corners(mut img: RgbaImage, radius: i32) -> RgbaImage {
    if radius <= 0 {
        return img;
    }
    let mask = rounded_mask(img.width(), img.height(), radius as u32);
    debug!(
        "Applying rounded mask r={} to {}x{}",
        radius,
        img.width(),
        img.height()
    );
    for (pixel, coverage) in img.pixels_mut().zip(mask.pixels()) {
        let alpha = pixel.0[3] as u16 * coverage.0[0] as u16;
        pixel.0[3] = ((alpha + 127) / 255) as u8;
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn mask_clears_corners_only() {
        let mask = rounded_mask(40, 30, 8);
        for (x, y) in [(0, 0), (39, 0), (0, 29), (39, 29), (1, 1)] {
            assert_eq!(mask.get_pixel(x, y).0[0], 0, "corner ({x},{y})");
        }
        for (x, y) in [(20, 0), (0, 15), (39, 15), (20, 29), (20, 15), (8, 8)] {
            assert_eq!(mask.get_pixel(x, y).0[0], 255, "inside ({x},{y})");
        }
    }

    #[test]
    fn arc_edge_is_antialiased() {
        let mask = rounded_mask(40, 30, 8);
        let edge = mask.get_pixel(2, 2).0[0];
        assert!(edge > 0 && edge < 255, "edge coverage {edge}");
        // Coverage grows toward the center along the diagonal
        let diagonal: Vec<u8> = (0..8).map(|i| mask.get_pixel(i, i).0[0]).collect();
        assert!(diagonal.windows(2).all(|w| w[0] <= w[1]), "{diagonal:?}");
        // All four corners are mirrored
        assert_eq!(mask.get_pixel(37, 2), mask.get_pixel(2, 2));
        assert_eq!(mask.get_pixel(2, 27), mask.get_pixel(2, 2));
        assert_eq!(mask.get_pixel(37, 27), mask.get_pixel(2, 2));
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let mask = rounded_mask(10, 6, 100);
        assert_eq!(mask.get_pixel(0, 0).0[0], 0);
        assert_eq!(mask.get_pixel(5, 3).0[0], 255);
    }

    #[test]
    fn zero_radius_mask_is_full() {
        let mask = rounded_mask(3, 2, 0);
        assert!(mask.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn rounding_keeps_color_and_scales_alpha() {
        let mut img = RgbaImage::from_pixel(20, 20, Rgba([10, 20, 30, 255]));
        img.put_pixel(10, 10, Rgba([1, 1, 1, 128]));
        let rounded = round_corners(img, 5);

        assert_eq!(rounded.get_pixel(0, 0), &Rgba([10, 20, 30, 0]));
        assert_eq!(rounded.get_pixel(10, 0), &Rgba([10, 20, 30, 255]));
        assert_eq!(rounded.get_pixel(10, 10), &Rgba([1, 1, 1, 128]));
    }

    #[test]
    fn non_positive_radius_is_identity() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([5, 6, 7, 255]));
        assert_eq!(round_corners(img.clone(), 0), img);
        assert_eq!(round_corners(img.clone(), -3), img);
    }
}
