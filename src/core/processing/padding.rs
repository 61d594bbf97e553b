use std::path::PathBuf;

use image::{RgbaImage, imageops};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::color::Color;
use crate::core::params::StripOptions;
use crate::core::processing::resize::dominant_color;
use crate::error::{Error, Result};

/// Linear gradient over the whole canvas. `angle` is in degrees, clockwise
/// with y pointing down: 0 runs left to right, 90 runs top to bottom. The
/// extreme pixels along the direction get exactly `from` and `to`.
pub fn linear_gradient(
    width: u32,
    height: u32,
    from: Color,
    to: Color,
    angle: i32,
) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    if width == 0 || height == 0 {
        return img;
    }

    let (dy, dx) = (angle as f32).to_radians().sin_cos();
    let (span_x, span_y) = ((width - 1) as f32, (height - 1) as f32);
    let (cx, cy) = (span_x / 2.0, span_y / 2.0);
    let half = (dx.abs() * span_x + dy.abs() * span_y) / 2.0;

    let row_len = width as usize * 4;
    img.par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            let oy = (y as f32 - cy) * dy;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let t = if half <= f32::EPSILON {
                    0.0
                } else {
                    ((x as f32 - cx) * dx + oy + half) / (2.0 * half)
                };
                let c = from.lerp(to, t);
                px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
            }
        });
    img
}

/// Center `img` "over" a gradient canvas `padding` pixels wider and taller.
pub fn pad_with_gradient(
    img: &RgbaImage,
    padding: u32,
    from: Color,
    to: Color,
    angle: i32,
) -> RgbaImage {
    let (width, height) = (img.width() + padding, img.height() + padding);
    info!(
        "Padding {}x{} to {}x{} with gradient {} -> {} at {}°",
        img.width(),
        img.height(),
        width,
        height,
        from,
        to,
        angle
    );
    let mut canvas = linear_gradient(width, height, from, to, angle);
    let offset = (padding / 2) as i64;
    imageops::overlay(&mut canvas, img, offset, offset);
    canvas
}

/// First dominant color that can be sampled, walking `candidates` in order.
fn first_dominant_color<'a>(candidates: impl Iterator<Item = &'a PathBuf>) -> Result<Color> {
    let mut last_err = None;
    for path in candidates {
        match dominant_color(path) {
            Ok(c) => return Ok(c),
            Err(e) => {
                warn!("Cannot sample color from {:?}: {}", path, e);
                last_err = Some(e);
            }
        }
    }
    Err(last_err.unwrap_or(Error::MissingArgument {
        arg: "images".to_string(),
    }))
}

/// Gradient endpoints: explicit colors win; a missing start is sampled from the
/// first image, a missing end from the last one. At most two samplers run at once.
pub fn resolve_gradient_colors(options: &StripOptions) -> Result<(Color, Color)> {
    let images = &options.images;
    let (from, to) = rayon::join(
        || match options.gradient_from {
            Some(c) => Ok(c),
            None => first_dominant_color(images.iter()),
        },
        || match options.gradient_to {
            Some(c) => Ok(c),
            None => first_dominant_color(images.iter().rev()),
        },
    );
    Ok((from?, to?))
}
