//! Line profile extraction
//!
//! This module turns an arbitrary-angle thick line on a plane into a
//! straightened ribbon of samples.

mod line_extractor;
mod profile_result;
mod region;
mod resample;
#[cfg(test)]
mod tests;

// Public exports
pub use line_extractor::{extract_line, LineProfileExtractor};
pub use profile_result::ProfileResult;
pub use region::{ClippedRegion, Region};
pub use resample::{bilinear, RibbonSampler};
