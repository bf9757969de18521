//! Plane geometry
//!
//! Points, straight segments, polylines and bounding boxes in continuous
//! plane coordinates.

mod bbox;
mod point;
mod polyline;
mod segment;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
pub use self::polyline::Polyline;
pub use self::segment::LineSegment;
