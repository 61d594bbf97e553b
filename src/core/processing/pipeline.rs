use tracing::{debug, info};

use crate::core::params::StripOptions;
use crate::core::processing::bands::{extract_bands, merge_bands};
use crate::core::processing::corners::round_corners;
use crate::core::processing::padding::{pad_with_gradient, resolve_gradient_colors};
use crate::error::{Error, Result};
use crate::types::StripImage;

/// Run every stage in order: bands, merge, rounding, gradient padding.
pub fn compose(options: &StripOptions) -> Result<StripImage> {
    if options.images.is_empty() {
        return Err(Error::MissingArgument {
            arg: "images".to_string(),
        });
    }
    debug!("Compositing with {:?}", options);

    info!(
        "Rotating and merging images: cutting {} bands at {}°",
        options.images.len(),
        options.angle
    );
    let slots = extract_bands(&options.images, options.angle);
    let bands = slots.iter().filter(|s| s.is_some()).count();
    info!("Rotating and merging images: {} of {} bands ready", bands, slots.len());
    let merged = merge_bands(&slots, options.angle)?;
    drop(slots);
    let (merged_width, merged_height) = merged.dimensions();
    info!(
        "Rotating and merging images: completed ({}x{})",
        merged_width, merged_height
    );

    let rounded = if options.radius <= 0 {
        info!("Rounding image: radius set to {}, skipping", options.radius);
        merged
    } else {
        info!("Rounding image: radius {}", options.radius);
        round_corners(merged, options.radius)
    };

    let (image, gradient) = if options.padding <= 0 {
        info!(
            "Padding and gradient: padding set to {}, skipping",
            options.padding
        );
        (rounded, None)
    } else {
        let (from, to) = resolve_gradient_colors(options)?;
        info!("Fetched colors: {} & {}", from, to);
        let padded = pad_with_gradient(
            &rounded,
            options.padding as u32,
            from,
            to,
            options.effective_gradient_angle(),
        );
        info!("Padding and gradient: completed");
        (padded, Some((from, to)))
    };

    Ok(StripImage {
        image,
        merged_width,
        merged_height,
        bands,
        gradient,
    })
}
