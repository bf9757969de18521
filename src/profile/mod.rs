//! Profiles and kymographs built from extracted ribbons

mod kymograph;
mod plot_profile;
mod projection;

pub use kymograph::{Kymograph, KymographBuilder};
pub use plot_profile::{PlotProfile, ProfileRow, ProfileTable};
pub use projection::Projection;
