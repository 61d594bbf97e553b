//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, TIFF, and JSON errors, and provides semantic
//! variants for argument validation and pipeline failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("TIFF error: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("JPEG error: {0}")]
    Jpeg(#[from] jpeg_encoder::EncodingError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("No band could be extracted from any input image")]
    NoBands,

    #[error("Image is {height}px tall after rotation, too short for {count} bands")]
    BandTooShort { height: u32, count: usize },

    #[error("Image of {width}x{height} exceeds the {limit}px limit of the {format} encoder")]
    ImageTooLarge {
        width: u32,
        height: u32,
        limit: u32,
        format: &'static str,
    },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
