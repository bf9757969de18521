//! Command-line shape specs
//!
//! A line is written `x1,y1,x2,y2`, a polyline as space-separated `x,y`
//! pairs such as `10,10 40,12 60,30`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::coordinate::{LineSegment, Point, Polyline};
use crate::errors::{KymoError, KymoResult};

const NUMBER: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";

lazy_static! {
    static ref LINE_RE: Regex = Regex::new(&format!(
        r"^\s*({n})\s*,\s*({n})\s*,\s*({n})\s*,\s*({n})\s*$", n = NUMBER
    )).expect("line pattern is valid");
    static ref POINT_RE: Regex = Regex::new(&format!(
        r"^({n})\s*,\s*({n})$", n = NUMBER
    )).expect("point pattern is valid");
}

fn number(text: &str) -> KymoResult<f64> {
    text.parse::<f64>()
        .map_err(|e| KymoError::ParseError(format!("invalid coordinate '{}': {}", text, e)))
}

/// Parses `x1,y1,x2,y2`
pub fn parse_line(spec: &str) -> KymoResult<LineSegment> {
    let caps = LINE_RE.captures(spec).ok_or_else(|| {
        KymoError::ParseError(format!("expected 'x1,y1,x2,y2', got '{}'", spec))
    })?;

    let segment = LineSegment::new(number(&caps[1])?, number(&caps[2])?,
                                   number(&caps[3])?, number(&caps[4])?);
    segment.validate()?;
    Ok(segment)
}

/// Parses a single `x,y` pair
pub fn parse_point(spec: &str) -> KymoResult<Point> {
    let caps = POINT_RE.captures(spec.trim()).ok_or_else(|| {
        KymoError::ParseError(format!("expected 'x,y', got '{}'", spec))
    })?;
    Ok(Point::new(number(&caps[1])?, number(&caps[2])?))
}

/// Parses whitespace-separated `x,y` pairs into a polyline
pub fn parse_polyline(spec: &str) -> KymoResult<Polyline> {
    let points = spec.split_whitespace()
        .map(parse_point)
        .collect::<KymoResult<Vec<_>>>()?;
    Polyline::new(points)
}
