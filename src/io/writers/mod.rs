pub mod jpeg;
pub mod metadata;
pub mod tiff;
