//! End-to-end tests through the public API

use std::fs;
use std::path::PathBuf;

use image::{ImageBuffer, Luma};
use ndarray::Array2;

use kymokit::compression::{CompressionFactory, GzipHandler, CompressionHandler};
use kymokit::config::{Defaults, SettingsOverride};
use kymokit::roi::{read_roi_file, ShapeGeometry};
use kymokit::{extract_line, KymoKit, LineSegment, PlaneIndex, PlaneSource, PlaneStack, Projection, Shape};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kymokit_it_{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Three 32x24 frames whose value is `1000 * t + column`
fn write_frames(dir: &PathBuf) -> Vec<PathBuf> {
    (0..3u16)
        .map(|t| {
            let frame: ImageBuffer<Luma<u16>, Vec<u16>> =
                ImageBuffer::from_fn(32, 24, |x, _| Luma([1000 * t + x as u16]));
            let path = dir.join(format!("frame_{:03}.png", t));
            frame.save(&path).unwrap();
            path
        })
        .collect()
}

#[test]
fn test_kymograph_from_image_series() {
    init_logging();
    let dir = scratch_dir("kymograph");
    let frames = write_frames(&dir);
    let kit = KymoKit::new(Some(dir.join("run.log").to_str().unwrap())).unwrap();

    let source = kit.open_images(&frames).unwrap();
    assert_eq!((source.size_x(), source.size_y(), source.size_c(), source.size_t()), (32, 24, 1, 3));

    let shapes = vec![Shape::line("track", LineSegment::new(2.0, 10.0, 22.0, 10.0))];
    let mut settings = Defaults::get().kymograph.clone().with(&SettingsOverride {
        line_width: Some(3),
        projection: Some(Projection::Mean),
        format: Some("csv".to_string()),
        output: Some(dir.join("kymo").to_string_lossy().to_string()),
        ..Default::default()
    });

    let kymographs = kit.kymographs(&source, &shapes, &settings, false).unwrap();
    assert_eq!(kymographs.len(), 1);
    let data = kymographs[0].data();
    assert_eq!(data.dim(), (3, 20));
    assert_eq!(data[[0, 0]], 2.0);
    assert_eq!(data[[2, 19]], 2021.0);

    let paths = kit.write_kymographs(&kymographs, &settings).unwrap();
    assert_eq!(paths, vec![dir.join("kymo_track_c0.csv")]);
    let text = fs::read_to_string(&paths[0]).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().nth(1).unwrap().starts_with("1002,1003,"));

    settings.format = "png".to_string();
    let png = kit.write_kymographs(&kymographs, &settings).unwrap();
    let decoded = image::open(&png[0]).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (20, 3));

    let summary = fs::read_to_string(dir.join("run.log")).unwrap();
    assert!(summary.contains("size_t: 3"));
}

#[test]
fn test_profile_table_with_compression() {
    init_logging();
    let dir = scratch_dir("profile");
    let frames = write_frames(&dir);
    let kit = KymoKit::new(Some(dir.join("run.log").to_str().unwrap())).unwrap();
    let source = kit.open_images(&frames[..1]).unwrap();

    let shapes = kit.load_shapes(&["0,5,10,5".to_string()], &[], &[], Vec::new()).unwrap();
    let settings = Defaults::get().profile.clone().with(&SettingsOverride {
        compression: Some("gzip".to_string()),
        output: Some(dir.join("profiles.csv").to_string_lossy().to_string()),
        ..Default::default()
    });

    let table = kit.plot_profile(&source, &shapes, &settings).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].values, (0..10).map(|c| c as f64).collect::<Vec<_>>());

    let path = kit.write_profile(&table, &settings).unwrap();
    assert_eq!(path, dir.join("profiles.csv.gz"));

    let packed = fs::read(&path).unwrap();
    let csv = String::from_utf8(CompressionFactory::handler_for_path(&path).decompress(&packed).unwrap()).unwrap();
    assert_eq!(csv.lines().next().unwrap(), "label,z,c,t,width,0,1,2,3,4,5,6,7,8,9");
    assert_eq!(csv.lines().nth(1).unwrap(), "line0,0,0,0,1,0,1,2,3,4,5,6,7,8,9");
}

#[test]
fn test_compressed_roi_file() {
    let dir = scratch_dir("roi");
    let xml = r#"<OME><ROI ID="ROI:3"><Union>
        <Line ID="Shape:3:0" X1="4" Y1="4" X2="20" Y2="16" TheT="1"/>
    </Union></ROI></OME>"#;
    let path = dir.join("rois.xml.gz");
    fs::write(&path, GzipHandler::new().compress(xml.as_bytes()).unwrap()).unwrap();

    let shapes = read_roi_file(&path).unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].t, Some(1));
    assert_eq!(shapes[0].geometry, ShapeGeometry::Line(LineSegment::new(4.0, 4.0, 20.0, 16.0)));
}

#[test]
fn test_custom_plane_source() {
    let mut stack = PlaneStack::new(16, 16, 2, 1, 1);
    stack.insert(PlaneIndex::new(1, 0, 0), Array2::from_elem((16, 16), 4.0)).unwrap();

    let ribbon = extract_line(&stack, 2.0, 3.0, 13.0, 11.0, 3, PlaneIndex::new(1, 0, 0)).unwrap();
    assert_eq!(ribbon.data().dim(), (3, 14));
    assert!((ribbon.project(Projection::Sum)[7] - 12.0).abs() < 1e-9);

    assert!(extract_line(&stack, 2.0, 3.0, 13.0, 11.0, 3, PlaneIndex::new(0, 0, 0)).is_err());
}
