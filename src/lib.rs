pub mod errors;
pub mod coordinate;
pub mod plane;
pub mod extractor;
pub mod profile;
pub mod roi;
pub mod config;
pub mod compression;
pub mod output;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::KymoKit;

pub use coordinate::{BoundingBox, LineSegment, Point, Polyline};
pub use errors::{KymoError, KymoResult};
pub use extractor::{extract_line, LineProfileExtractor, ProfileResult, Region};
pub use plane::{ImagePlaneSource, PlaneIndex, PlaneSource, PlaneStack};
pub use profile::{Kymograph, KymographBuilder, PlotProfile, ProfileTable, Projection};
pub use roi::Shape;
