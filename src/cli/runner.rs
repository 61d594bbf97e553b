use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use aestishot::{StripOptions, compose_strip_to_path};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Layer flags over the preset (or built-in defaults). Positional images are
/// appended to any images listed in the preset.
pub fn merge_options(args: &CliArgs, base: StripOptions) -> StripOptions {
    let mut options = base;
    if let Some(padding) = args.padding {
        options.padding = padding;
    }
    if let Some(radius) = args.radius {
        options.radius = radius;
    }
    if let Some(angle) = args.angle {
        options.angle = angle;
    }
    if let Some(format) = args.format {
        options.format = format;
    }
    if let Some(output) = &args.output {
        options.output_name = output.clone();
    }
    if args.gradient_from.is_some() {
        options.gradient_from = args.gradient_from;
    }
    if args.gradient_to.is_some() {
        options.gradient_to = args.gradient_to;
    }
    if args.gradient_angle.is_some() {
        options.gradient_angle = args.gradient_angle;
    }
    options.images.extend(args.images.iter().cloned());
    options
}

fn log_options(options: &StripOptions) {
    debug!("Parsed arguments:");
    debug!("Padding: {}", options.padding);
    debug!("Radius: {}", options.radius);
    debug!("Angle: {}", options.angle);
    debug!("Format: {}", options.format);
    debug!("Output file name: {}", options.output_name);
    match options.gradient_from {
        Some(c) => debug!("Gradient from color: {}", c),
        None => debug!("Gradient from color: generated from first image"),
    }
    match options.gradient_to {
        Some(c) => debug!("Gradient to color: {}", c),
        None => debug!("Gradient to color: generated from last image"),
    }
    debug!("Gradient angle: {}", options.effective_gradient_angle());
    debug!("Images: {}", options.images.len());
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let base = match &args.config {
        Some(path) => StripOptions::load_preset(path).map_err(AppError::from)?,
        None => StripOptions::default(),
    };
    let options = merge_options(&args, base);
    log_options(&options);

    if let Some(path) = &args.save_config {
        options.save_preset(path).map_err(AppError::from)?;
    }

    if options.images.is_empty() {
        return Err(AppError::MissingArgument {
            arg: "<IMAGES>".to_string(),
        }
        .into());
    }

    let output = compose_strip_to_path(&options, args.metadata).map_err(AppError::from)?;
    info!("Successfully composited {} images", options.images.len());
    println!("Output written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aestishot::{Color, OutputFormat};
    use clap::Parser;
    use std::path::PathBuf;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn flags_override_preset_values() {
        let preset = StripOptions {
            padding: 10,
            radius: 3,
            format: OutputFormat::Tiff,
            gradient_from: Some(Color::BLACK),
            images: vec![PathBuf::from("preset.png")],
            ..Default::default()
        };
        let merged = merge_options(&args(&["aestishot", "-r", "0", "cli.png"]), preset);

        assert_eq!(merged.padding, 10);
        assert_eq!(merged.radius, 0);
        assert_eq!(merged.format, OutputFormat::Tiff);
        assert_eq!(merged.gradient_from, Some(Color::BLACK));
        assert_eq!(
            merged.images,
            vec![PathBuf::from("preset.png"), PathBuf::from("cli.png")]
        );
    }

    #[test]
    fn no_flags_keeps_defaults() {
        let merged = merge_options(&args(&["aestishot"]), StripOptions::default());
        assert_eq!(merged, StripOptions::default());
    }

    #[test]
    fn run_without_images_fails() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("p.json");
        let argv = ["aestishot", "--save-config", preset.to_str().unwrap()];
        let err = run(args(&argv)).unwrap_err();
        assert!(err.to_string().contains("<IMAGES>"));
        // The preset is still written before the image check
        assert!(StripOptions::load_preset(&preset).is_ok());
    }

    #[test]
    fn run_writes_output_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        image::RgbaImage::from_pixel(12, 12, image::Rgba([90, 60, 30, 255]))
            .save(&input)
            .unwrap();
        let name = dir.path().join("strip");

        let argv = [
            "aestishot",
            "-a",
            "0",
            "-p",
            "4",
            "-t",
            "bmp",
            "--metadata",
            "-o",
            name.to_str().unwrap(),
            input.to_str().unwrap(),
        ];
        run(args(&argv)).unwrap();

        let out = dir.path().join("strip.bmp");
        let img = image::open(&out).unwrap();
        assert_eq!((img.width(), img.height()), (16, 16));
        assert!(dir.path().join("strip.json").exists());
    }
}
