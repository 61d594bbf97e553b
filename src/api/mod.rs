//! High-level, ergonomic library API: composite a strip in memory or straight
//! to its output file. Prefer these entrypoints over the low-level processing
//! modules when embedding aestishot.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::params::StripOptions;
use crate::core::processing::pipeline::compose;
use crate::core::processing::save::save_image;
use crate::error::Result;
use crate::io::writers::metadata::{StripMetadata, write_metadata_sidecar};
use crate::types::{OutputFormat, StripImage};

/// Composite the strip in memory (no disk output)
pub fn compose_strip(options: &StripOptions) -> Result<StripImage> {
    compose(options)
}

/// Encode an already composed strip
pub fn save_strip(strip: &StripImage, output: &Path, format: OutputFormat) -> Result<()> {
    save_image(&strip.image, output, format)
}

/// Composite and write `<output_name>.<format>`, optionally with a JSON
/// sidecar next to it. Returns the path of the written image.
pub fn compose_strip_to_path(options: &StripOptions, write_metadata: bool) -> Result<PathBuf> {
    let strip = compose(options)?;
    let output = options.output_path();
    save_strip(&strip, &output, options.format)?;
    if write_metadata {
        write_metadata_sidecar(&output, &StripMetadata::new(options, &strip, &output))?;
    }
    info!("Output written to {:?}", output);
    Ok(output)
}
