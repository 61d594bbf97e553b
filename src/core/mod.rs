//! Core compositing building blocks: rotation/trim geometry, band extraction
//! and merge, rounded corners, gradient padding, and save helpers. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
