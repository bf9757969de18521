//! Region structure for defining tile requests
//!
//! A Region is a rectangular block of whole pixels. Its origin may lie
//! outside the plane (negative or past the far edge); clipping it against
//! the plane yields the part that can actually be fetched plus the amount
//! cut from each side. Whatever was cut reads as zero when the ribbon is
//! sampled.

/// Region of whole pixels (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left pixel and its
/// dimensions. (0,0) is the top-left pixel of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Column of the top-left pixel
    pub x: i64,

    /// Row of the top-left pixel
    pub y: i64,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - Column of the top-left pixel
    /// * `y` - Row of the top-left pixel
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> i64 {
        self.x + self.width as i64
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> i64 {
        self.y + self.height as i64
    }

    /// Whether the region covers no pixels at all
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the region lies entirely inside a `size_x` x `size_y` plane
    pub fn is_within(&self, size_x: u32, size_y: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.end_x() <= size_x as i64
            && self.end_y() <= size_y as i64
    }

    /// Clip the region to a `size_x` x `size_y` plane
    ///
    /// The clipped region plus the recorded padding always adds back up to
    /// the original width and height, including when the region misses the
    /// plane completely (the clipped part is then empty).
    pub fn clip_to(&self, size_x: u32, size_y: u32) -> ClippedRegion {
        let (x, width, pad_left, pad_right) = clip_axis(self.x, self.end_x(), size_x as i64);
        let (y, height, pad_top, pad_bottom) = clip_axis(self.y, self.end_y(), size_y as i64);

        ClippedRegion {
            region: Region::new(x, y, width, height),
            pad_left,
            pad_top,
            pad_right,
            pad_bottom,
        }
    }
}

/// The part of a region that falls inside a plane, and what was cut off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClippedRegion {
    /// Region to fetch from the plane
    pub region: Region,
    /// Columns cut from the left edge
    pub pad_left: u32,
    /// Rows cut from the top edge
    pub pad_top: u32,
    /// Columns cut from the right edge
    pub pad_right: u32,
    /// Rows cut from the bottom edge
    pub pad_bottom: u32,
}

impl ClippedRegion {
    /// Whether anything was clipped
    pub fn is_clipped(&self) -> bool {
        self.pad_left > 0 || self.pad_top > 0 || self.pad_right > 0 || self.pad_bottom > 0
    }
}

/// Clip `[start, end)` to `[0, size)`, returning the clipped start, the
/// clipped length and the amounts removed before and after
fn clip_axis(start: i64, end: i64, size: i64) -> (i64, u32, u32, u32) {
    let clipped_start = start.max(0).min(end);
    let clipped_end = end.min(size).max(clipped_start);

    (
        clipped_start,
        (clipped_end - clipped_start) as u32,
        (clipped_start - start) as u32,
        (end - clipped_end) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_region_is_untouched() {
        let clipped = Region::new(2, 3, 5, 4).clip_to(30, 30);
        assert!(!clipped.is_clipped());
        assert_eq!(clipped.region, Region::new(2, 3, 5, 4));
    }

    #[test]
    fn test_clip_left_and_bottom() {
        let clipped = Region::new(-4, 25, 10, 10).clip_to(30, 30);
        assert_eq!(clipped.region, Region::new(0, 25, 6, 5));
        assert_eq!(clipped.pad_left, 4);
        assert_eq!(clipped.pad_right, 0);
        assert_eq!(clipped.pad_top, 0);
        assert_eq!(clipped.pad_bottom, 5);
        assert_eq!(clipped.pad_left + clipped.region.width + clipped.pad_right, 10);
        assert_eq!(clipped.pad_top + clipped.region.height + clipped.pad_bottom, 10);
    }

    #[test]
    fn test_region_larger_than_plane() {
        let clipped = Region::new(-3, -2, 20, 20).clip_to(8, 8);
        assert_eq!(clipped.region, Region::new(0, 0, 8, 8));
        assert_eq!((clipped.pad_left, clipped.pad_right), (3, 9));
        assert_eq!((clipped.pad_top, clipped.pad_bottom), (2, 10));
    }

    #[test]
    fn test_region_missing_the_plane() {
        let clipped = Region::new(40, -20, 5, 6).clip_to(30, 30);
        assert!(clipped.region.is_empty());
        assert_eq!(clipped.pad_left + clipped.region.width + clipped.pad_right, 5);
        assert_eq!(clipped.pad_top + clipped.region.height + clipped.pad_bottom, 6);

        let clipped = Region::new(-10, 2, 4, 4).clip_to(30, 30);
        assert!(clipped.region.is_empty());
        assert_eq!(clipped.pad_left, 4);
        assert_eq!(clipped.pad_left + clipped.region.width + clipped.pad_right, 4);
    }
}
