//! Tests for oriented line extraction

use ndarray::{s, Array1};

use crate::coordinate::{Point, Polyline};
use crate::errors::KymoError;
use crate::extractor::{extract_line, LineProfileExtractor};
use crate::plane::{PlaneIndex, PlaneSource};
use crate::profile::Projection;

use super::test_utils::{column_ramp_plane, constant_plane, ramp_plane, CountingSource, FailingSource};

const PLANE: PlaneIndex = PlaneIndex { z: 0, c: 0, t: 0 };

#[test]
fn test_shape_is_width_by_rounded_length() {
    let plane = ramp_plane(30);
    let result = extract_line(&plane, 3.0, 4.0, 15.0, 9.0, 3, PLANE).unwrap();
    assert_eq!(result.line_width(), 3);
    assert_eq!(result.length(), 13);

    let result = extract_line(&plane, 1.0, 1.0, 20.2, 1.0, 4, PLANE).unwrap();
    assert_eq!((result.line_width(), result.length()), (4, 19));
}

#[test]
fn test_horizontal_line_on_zero_plane() {
    let plane = constant_plane(30, 0.0);
    let result = extract_line(&plane, 0.0, 10.0, 20.0, 10.0, 3, PLANE).unwrap();
    assert_eq!(result.data().dim(), (3, 20));
    assert!(result.data().iter().all(|&v| v == 0.0));
}

#[test]
fn test_samples_outside_plane_are_zero() {
    let plane = constant_plane(30, 1.0);
    let result = extract_line(&plane, -5.0, 5.0, 5.0, 5.0, 1, PLANE).unwrap();
    assert_eq!(result.data().dim(), (1, 10));

    let expected = [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0];
    assert_eq!(result.row(0).to_vec(), expected.to_vec());
}

#[test]
fn test_vertical_line_is_a_column_slice() {
    let plane = ramp_plane(30);
    let result = extract_line(&plane, 10.0, 0.0, 10.0, 20.0, 2, PLANE).unwrap();
    assert_eq!(result.data().dim(), (2, 20));

    let source = plane.get_plane(PLANE).unwrap();
    // Rotating a downward line to point right brings the +x side to the top
    assert_eq!(result.row(0), source.slice(s![0..20, 10]));
    assert_eq!(result.row(1), source.slice(s![0..20, 9]));
}

#[test]
fn test_horizontal_line_reads_rows_either_side() {
    let plane = ramp_plane(30);
    let result = extract_line(&plane, 0.0, 5.0, 10.0, 5.0, 2, PLANE).unwrap();

    let expected_top: Vec<f64> = (0..10).map(|c| (400 + c) as f64).collect();
    let expected_bottom: Vec<f64> = (0..10).map(|c| (500 + c) as f64).collect();
    assert_eq!(result.row(0).to_vec(), expected_top);
    assert_eq!(result.row(1).to_vec(), expected_bottom);
}

#[test]
fn test_reversed_segment_gives_rotated_ribbon() {
    let plane = ramp_plane(40);
    let forward = extract_line(&plane, 3.0, 4.0, 20.0, 15.0, 3, PLANE).unwrap();
    let backward = extract_line(&plane, 20.0, 15.0, 3.0, 4.0, 3, PLANE).unwrap();

    assert_eq!(backward, forward.rotated_180());
}

#[test]
fn test_endpoint_one_is_on_the_left() {
    // Intensity equals the column index, so a profile along a line
    // heading right must increase from left to right, and the reverse
    // must decrease.
    let plane = column_ramp_plane(30);
    let forward = extract_line(&plane, 2.0, 2.0, 14.0, 11.0, 3, PLANE).unwrap();
    let backward = extract_line(&plane, 14.0, 11.0, 2.0, 2.0, 3, PLANE).unwrap();

    let mean = forward.project(Projection::Mean);
    assert_eq!(mean.len(), 15);
    for (c, value) in mean.iter().enumerate() {
        let expected = 7.5 + 0.8 * (c as f64 - 7.0);
        assert!((value - expected).abs() < 1e-9, "column {}: {} vs {}", c, value, expected);
    }

    let back_mean = backward.project(Projection::Mean);
    assert!(back_mean[0] > back_mean[14]);

    // Row 0 lies on the side the normal points away from
    for c in 0..15 {
        let spread = forward.data()[[0, c]] - forward.data()[[2, c]];
        assert!((spread - 1.2).abs() < 1e-9);
    }
}

#[test]
fn test_constant_plane_stays_constant_at_any_angle() {
    let plane = constant_plane(50, 7.0);
    for &(x2, y2) in &[(40.0, 10.0), (10.0, 40.0), (35.0, 38.0), (5.0, 30.0)] {
        let result = extract_line(&plane, 20.0, 20.0, x2, y2, 5, PLANE).unwrap();
        assert!(result.data().iter().all(|&v| (v - 7.0).abs() < 1e-9),
                "line to ({}, {})", x2, y2);
    }
}

#[test]
fn test_extraction_is_repeatable() {
    let plane = ramp_plane(30);
    let first = extract_line(&plane, 1.3, 2.7, 22.1, 17.9, 4, PLANE).unwrap();
    let second = extract_line(&plane, 1.3, 2.7, 22.1, 17.9, 4, PLANE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_width_one_gives_single_row() {
    let plane = ramp_plane(30);
    let result = extract_line(&plane, 0.0, 0.0, 8.0, 6.0, 1, PLANE).unwrap();
    assert_eq!(result.line_width(), 1);
    assert_eq!(result.length(), 10);
}

#[test]
fn test_width_wider_than_plane_pads_with_zero_rows() {
    let plane = constant_plane(10, 1.0);
    let result = extract_line(&plane, 2.0, 5.0, 8.0, 5.0, 25, PLANE).unwrap();
    assert_eq!(result.data().dim(), (25, 6));

    assert!(result.row(0).iter().all(|&v| v == 0.0));
    assert!(result.row(24).iter().all(|&v| v == 0.0));
    assert!(result.row(12).iter().all(|&v| v == 1.0));
}

#[test]
fn test_line_entirely_outside_plane() {
    let source = CountingSource::new(constant_plane(10, 3.0));
    let result = extract_line(&source, 50.0, 50.0, 60.0, 50.0, 2, PLANE).unwrap();
    assert_eq!(result.data().dim(), (2, 10));
    assert!(result.data().iter().all(|&v| v == 0.0));
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn test_line_running_far_off_the_plane() {
    let source = CountingSource::new(constant_plane(30, 1.0));
    let result = extract_line(&source, 0.0, 0.0, 2.0e6, 2.0e6, 1, PLANE).unwrap();
    assert_eq!(result.data().dim(), (1, 2_828_427));
    assert_eq!(source.calls.get(), 1);

    let row = result.row(0);
    assert!(row[0] > 0.0);
    assert!((row[10] - 1.0).abs() < 1e-9);
    assert!(row.slice(s![100..]).iter().all(|&v| v == 0.0));
}

#[test]
fn test_unaddressable_coordinates_are_rejected() {
    let source = CountingSource::new(constant_plane(30, 1.0));
    let result = extract_line(&source, -1.0e300, 5.0, 1.0e300, 5.0, 1, PLANE);
    assert!(matches!(result, Err(KymoError::InvalidGeometry(_))));

    let result = extract_line(&source, 0.0, 0.0, 6.0e9, 3.0, 2, PLANE);
    assert!(matches!(result, Err(KymoError::InvalidGeometry(_))));
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn test_one_tile_request_per_extraction() {
    let source = CountingSource::new(ramp_plane(30));
    let extractor = LineProfileExtractor::new(&source);
    extractor.extract_line(-4.0, 3.0, 18.0, 27.0, 6, PLANE).unwrap();
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn test_zero_length_segment_is_degenerate() {
    let plane = ramp_plane(30);
    let result = extract_line(&plane, 5.0, 5.0, 5.0, 5.0, 2, PLANE);
    assert!(matches!(result, Err(KymoError::DegenerateSegment { .. })));
}

#[test]
fn test_zero_width_is_rejected() {
    let plane = ramp_plane(30);
    let result = extract_line(&plane, 0.0, 0.0, 5.0, 5.0, 0, PLANE);
    assert!(matches!(result, Err(KymoError::InvalidGeometry(_))));
}

#[test]
fn test_tile_errors_propagate() {
    let result = extract_line(&FailingSource, 0.0, 0.0, 10.0, 10.0, 2, PLANE);
    match result {
        Err(KymoError::GenericError(msg)) => assert_eq!(msg, "connection reset"),
        other => panic!("expected the source error, got {:?}", other),
    }
}

#[test]
fn test_missing_plane_propagates() {
    let plane = ramp_plane(30);
    let result = extract_line(&plane, 0.0, 0.0, 10.0, 10.0, 2, PlaneIndex::new(0, 1, 0));
    assert!(matches!(result, Err(KymoError::PlaneNotFound(_))));
}

#[test]
fn test_polyline_concatenates_segments() {
    let plane = column_ramp_plane(30);
    let polyline = Polyline::new(vec![
        Point::new(2.0, 2.0),
        Point::new(12.0, 2.0),
        Point::new(12.0, 8.0),
    ]).unwrap();

    let extractor = LineProfileExtractor::new(&plane);
    let result = extractor.extract_polyline(&polyline, 2, PLANE).unwrap();
    assert_eq!(result.data().dim(), (2, 16));

    // First leg runs along x, so the mean profile climbs one per sample
    let mean: Array1<f64> = result.project(Projection::Mean);
    assert_eq!(mean[0], 2.0);
    assert_eq!(mean[9], 11.0);
}
