//! Pixel plane sources
//!
//! A plane source hands out rectangular tiles of one 2D plane of a
//! multi-dimensional image, addressed by its z, channel and time
//! coordinates. The line extractor only ever needs this one capability.

mod image_source;
mod source;
mod stack;

pub use image_source::ImagePlaneSource;
pub use source::{PlaneIndex, PlaneSource};
pub use stack::PlaneStack;
