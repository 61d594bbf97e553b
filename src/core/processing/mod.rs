pub mod bands;
pub mod corners;
pub mod geometry;
pub mod padding;
pub mod pipeline;
pub mod resize;
pub mod save;
