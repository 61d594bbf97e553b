use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use aestishot::{Color, OutputFormat};

/// Two-letter single-dash flags accepted for compatibility, and their long form
const LEGACY_FLAGS: [(&str, &str); 3] = [
    ("-gf", "--gradient-from"),
    ("-gt", "--gradient-to"),
    ("-ga", "--gradient-angle"),
];

#[derive(Parser, Debug)]
#[command(
    name = "aestishot",
    version,
    about = "Composite photos into a rotated panoramic strip",
    after_help = "EXAMPLE:\n  aestishot -r 25 -p 32 -a 9 -gf \"#ff0000\" -gt \"#00ff00\" -ga 90 -t png -o myoutput images*.png"
)]
pub struct CliArgs {
    /// Padding size for the gradient background [default: 80]
    #[arg(short, long, allow_negative_numbers = true)]
    pub padding: Option<i32>,

    /// Corner radius for the output image, 0 disables rounding [default: 20]
    #[arg(short, long, allow_negative_numbers = true)]
    pub radius: Option<i32>,

    /// Angle to rotate the images by, in degrees [default: 9]
    #[arg(short, long, allow_negative_numbers = true)]
    pub angle: Option<i32>,

    /// Output file format, also used as extension; JPEG drops transparency [default: png]
    #[arg(short = 't', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Name of the output file, without extension [default: output]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Gradient start color, also accepted as -gf [default: dominant color of the first image]
    #[arg(long, value_name = "COLOR")]
    pub gradient_from: Option<Color>,

    /// Gradient end color, also accepted as -gt [default: dominant color of the last image]
    #[arg(long, value_name = "COLOR")]
    pub gradient_to: Option<Color>,

    /// Gradient angle in degrees, also accepted as -ga [default: 180 - angle]
    #[arg(long, value_name = "ANGLE", allow_negative_numbers = true)]
    pub gradient_angle: Option<i32>,

    /// JSON preset providing defaults for any of the options above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the effective options as a JSON preset
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Write a JSON metadata sidecar next to the output
    #[arg(long, default_value_t = false)]
    pub metadata: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Input images, one band each, top to bottom
    #[arg(value_name = "IMAGES")]
    pub images: Vec<PathBuf>,
}

/// Rewrite the legacy `-gf`, `-gt` and `-ga` spellings to their long flags so
/// clap does not read them as bundled short options.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            LEGACY_FLAGS
                .iter()
                .find(|(legacy, _)| arg == **legacy)
                .map(|(_, long)| OsString::from(long))
                .unwrap_or(arg)
        })
        .collect()
}
