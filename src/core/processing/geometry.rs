use image::{Rgba, RgbaImage, imageops};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Rotate clockwise by `degrees` about the center, growing the canvas so the
/// whole rotated image fits. Uncovered pixels are fully transparent.
pub fn rotate_expand(img: &RgbaImage, degrees: i32) -> RgbaImage {
    match degrees.rem_euclid(360) {
        0 => return img.clone(),
        90 => return imageops::rotate90(img),
        180 => return imageops::rotate180(img),
        270 => return imageops::rotate270(img),
        _ => {}
    }
    if img.width() == 0 || img.height() == 0 {
        return img.clone();
    }

    let theta = (degrees as f32).to_radians();
    let (sin, cos) = theta.sin_cos();
    let (w, h) = (img.width() as f32, img.height() as f32);
    // Shave float noise so exact fits do not gain a blank row or column
    let new_w = (w * cos.abs() + h * sin.abs() - 1e-3).ceil().max(1.0) as u32;
    let new_h = (w * sin.abs() + h * cos.abs() - 1e-3).ceil().max(1.0) as u32;

    let projection = Projection::translate(new_w as f32 / 2.0, new_h as f32 / 2.0)
        * Projection::rotate(theta)
        * Projection::translate(-w / 2.0, -h / 2.0);

    let mut out = RgbaImage::from_pixel(new_w, new_h, TRANSPARENT);
    warp_into(img, &projection, Interpolation::Bilinear, TRANSPARENT, &mut out);
    out
}

/// Bounding box `(x, y, width, height)` of all pixels with non-zero alpha.
pub fn opaque_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, p) in img.enumerate_pixels() {
        if p.0[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}

/// Crop to the non-transparent bounding box. Fully transparent images are
/// returned unchanged.
pub fn trim_transparent(img: &RgbaImage) -> RgbaImage {
    match opaque_bounds(img) {
        Some((x, y, w, h)) if (w, h) != img.dimensions() => {
            imageops::crop_imm(img, x, y, w, h).to_image()
        }
        _ => img.clone(),
    }
}
