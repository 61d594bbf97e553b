//! Shared types and enums used across aestishot.
//! Includes `OutputFormat` and the `StripImage` pipeline result.
use clap::ValueEnum;
use image::{ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Output encoding chosen with `-t`. Each variant is written under its own
/// token as file extension, so `jpg` and `jpeg` share an encoder but not a name.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg, // Lossy, alpha is flattened
    Jpg,
    Tiff,
    Tif,
    Bmp,
    Gif,
    Webp, // Lossless only
    Ico,  // At most 256x256
    Tga,
    Qoi,
}

impl OutputFormat {
    /// File extension written after the output base name.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Jpg => "jpg",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Tif => "tif",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Gif => "gif",
            OutputFormat::Webp => "webp",
            OutputFormat::Ico => "ico",
            OutputFormat::Tga => "tga",
            OutputFormat::Qoi => "qoi",
        }
    }

    pub fn is_jpeg(self) -> bool {
        matches!(self, OutputFormat::Jpeg | OutputFormat::Jpg)
    }

    pub fn is_tiff(self) -> bool {
        matches!(self, OutputFormat::Tiff | OutputFormat::Tif)
    }

    /// Encoder of the `image` crate for this format, looked up by extension
    pub fn image_format(self) -> Option<ImageFormat> {
        ImageFormat::from_extension(self.extension())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Result of running the compositing pipeline in memory
#[derive(Debug, Clone)]
pub struct StripImage {
    pub image: RgbaImage,
    /// Size of the merged strip before rounding and padding
    pub merged_width: u32,
    pub merged_height: u32,
    /// Number of inputs that contributed a band
    pub bands: usize,
    /// Gradient endpoints actually used, when the padding stage ran
    pub gradient: Option<(Color, Color)>,
}

impl StripImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
