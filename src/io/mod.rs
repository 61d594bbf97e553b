//! I/O layer: decoding input photographs (`reader`) and the format-specific
//! `writers` for TIFF/JPEG outputs plus the JSON metadata sidecar.
pub mod reader;
pub use reader::read_rgba;

pub mod writers;
