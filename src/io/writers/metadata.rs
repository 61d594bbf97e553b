use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::color::Color;
use crate::core::params::StripOptions;
use crate::error::Result;
use crate::types::StripImage;

/// Description of a rendered strip, written as a JSON sidecar next to the output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripMetadata {
    /// RFC 3339 timestamp of when the sidecar was produced
    pub generated: String,
    pub generator: String,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub merged_width: u32,
    pub merged_height: u32,
    /// Inputs that contributed a band, out of `inputs.len()`
    pub bands: usize,
    pub inputs: Vec<PathBuf>,
    pub gradient_from: Option<Color>,
    pub gradient_to: Option<Color>,
    pub gradient_angle: Option<i32>,
    pub options: StripOptions,
}

impl StripMetadata {
    pub fn new(options: &StripOptions, strip: &StripImage, output: &Path) -> Self {
        let (gradient_from, gradient_to) = match strip.gradient {
            Some((from, to)) => (Some(from), Some(to)),
            None => (None, None),
        };
        Self {
            generated: chrono::Utc::now().to_rfc3339(),
            generator: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            output: output.to_path_buf(),
            width: strip.width(),
            height: strip.height(),
            merged_width: strip.merged_width,
            merged_height: strip.merged_height,
            bands: strip.bands,
            inputs: options.images.clone(),
            gradient_from,
            gradient_to,
            gradient_angle: strip
                .gradient
                .map(|_| options.effective_gradient_angle()),
            options: options.clone(),
        }
    }
}

/// Sidecar path for an output image: same stem, `.json` extension.
pub fn sidecar_path(output_path: &Path) -> PathBuf {
    output_path.with_extension("json")
}

/// Write the metadata sidecar and return its path
pub fn write_metadata_sidecar(output_path: &Path, meta: &StripMetadata) -> Result<PathBuf> {
    let sidecar = sidecar_path(output_path);
    let json_string = serde_json::to_string_pretty(meta)?;
    std::fs::write(&sidecar, json_string)?;
    info!("Created metadata sidecar: {:?}", sidecar);
    Ok(sidecar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn sidecar_replaces_extension() {
        assert_eq!(
            sidecar_path(Path::new("out/strip.png")),
            PathBuf::from("out/strip.json")
        );
    }

    #[test]
    fn sidecar_records_gradient_and_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("strip.png");
        let options = StripOptions {
            angle: 10,
            images: vec![PathBuf::from("a.png")],
            ..Default::default()
        };
        let strip = StripImage {
            image: RgbaImage::new(12, 8),
            merged_width: 4,
            merged_height: 2,
            bands: 1,
            gradient: Some((Color::BLACK, Color::WHITE)),
        };

        let path = write_metadata_sidecar(&output, &StripMetadata::new(&options, &strip, &output))
            .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["width"], 12);
        assert_eq!(json["merged_height"], 2);
        assert_eq!(json["gradient_from"], "#000000");
        assert_eq!(json["gradient_to"], "#ffffff");
        assert_eq!(json["gradient_angle"], 170);
        assert_eq!(json["options"]["angle"], 10);
        assert!(chrono::DateTime::parse_from_rfc3339(json["generated"].as_str().unwrap()).is_ok());
    }
}
