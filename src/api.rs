use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::compression::CompressionFactory;
use crate::config::{CommandSettings, Defaults};
use crate::errors::{KymoError, KymoResult};
use crate::output::{write_kymographs, write_output, KymographFormat, TableFormat};
use crate::plane::{ImagePlaneSource, PlaneSource};
use crate::profile::{Kymograph, KymographBuilder, PlotProfile, ProfileTable};
use crate::roi::{parse_line, parse_polyline, read_roi_file, Shape};
use crate::utils::logger::Logger;

/// Main interface to the KymoKit library
pub struct KymoKit {
    logger: Logger,
}

impl KymoKit {
    /// Create a new KymoKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to the run log, defaults to the built-in log file name
    pub fn new(log_file: Option<&str>) -> KymoResult<Self> {
        let log_path = log_file.unwrap_or(Defaults::get().log_file.as_str());
        let logger = Logger::new(log_path)?;
        Ok(KymoKit { logger })
    }

    /// Decode a time series of image files, recording a summary in the run log
    pub fn open_images<P: AsRef<Path>>(&self, paths: &[P]) -> KymoResult<ImagePlaneSource> {
        let source = ImagePlaneSource::open(paths)?;
        self.logger.log_summary("Input images:", &[
            ("files".to_string(), source.paths().len().to_string()),
            ("size_x".to_string(), source.size_x().to_string()),
            ("size_y".to_string(), source.size_y().to_string()),
            ("size_c".to_string(), source.size_c().to_string()),
            ("size_t".to_string(), source.size_t().to_string()),
        ])?;
        Ok(source)
    }

    /// Plane dimensions of any source, as text
    pub fn inspect<S: PlaneSource + ?Sized>(&self, source: &S) -> String {
        let mut result = String::from("Plane source:\n");
        result.push_str(&format!("  Size X: {}\n", source.size_x()));
        result.push_str(&format!("  Size Y: {}\n", source.size_y()));
        result.push_str(&format!("  Size Z: {}\n", source.size_z()));
        result.push_str(&format!("  Size C: {}\n", source.size_c()));
        result.push_str(&format!("  Size T: {}\n", source.size_t()));
        result
    }

    /// Gather shapes from command-line specs and ROI files, after any
    /// shapes already collected
    pub fn load_shapes(&self,
                       lines: &[String],
                       polylines: &[String],
                       roi_files: &[PathBuf],
                       mut shapes: Vec<Shape>) -> KymoResult<Vec<Shape>> {
        for (i, spec) in lines.iter().enumerate() {
            shapes.push(Shape::line(&format!("line{}", i), parse_line(spec)?));
        }
        for (i, spec) in polylines.iter().enumerate() {
            shapes.push(Shape::polyline(&format!("polyline{}", i), parse_polyline(spec)?));
        }
        for path in roi_files {
            let loaded = read_roi_file(path)?;
            if loaded.is_empty() {
                warn!("{} contains no line or polyline shapes", path.display());
            }
            shapes.extend(loaded);
        }

        if shapes.is_empty() {
            return Err(KymoError::InvalidGeometry(
                "no line shapes given; use --line, --polyline, --roi or a run file".to_string()));
        }
        Ok(shapes)
    }

    pub fn plot_profile<S: PlaneSource + ?Sized>(&self,
                                                 source: &S,
                                                 shapes: &[Shape],
                                                 settings: &CommandSettings) -> KymoResult<ProfileTable> {
        let mut profile = PlotProfile::new(source)
            .line_width(settings.line_width)
            .projection(settings.projection)
            .z(settings.z);
        if let Some(channels) = &settings.channels {
            profile = profile.channels(channels.clone());
        }
        profile.run(shapes)
    }

    /// Write a profile table to `settings.output`; returns the path written
    pub fn write_profile(&self, table: &ProfileTable, settings: &CommandSettings) -> KymoResult<PathBuf> {
        let format: TableFormat = settings.format.parse()?;
        let handler = CompressionFactory::get_handler_by_name(&settings.compression)?;
        let path = write_output(Path::new(&settings.output), &format.encode(table)?, handler.as_ref())?;
        info!("Wrote {} profiles as {}", table.len(), format.extension());
        Ok(path)
    }

    pub fn kymographs<S: PlaneSource + ?Sized>(&self,
                                               source: &S,
                                               shapes: &[Shape],
                                               settings: &CommandSettings,
                                               show_progress: bool) -> KymoResult<Vec<Kymograph>> {
        let mut builder = KymographBuilder::new(source)
            .line_width(settings.line_width)
            .projection(settings.projection)
            .z(settings.z)
            .show_progress(show_progress);
        if let Some(channels) = &settings.channels {
            builder = builder.channels(channels.clone());
        }
        builder.build(shapes)
    }

    /// Write one file per kymograph using `settings.output` as the name prefix
    pub fn write_kymographs(&self, kymographs: &[Kymograph], settings: &CommandSettings) -> KymoResult<Vec<PathBuf>> {
        let format: KymographFormat = settings.format.parse()?;
        let handler = CompressionFactory::get_handler_by_name(&settings.compression)?;
        write_kymographs(kymographs, &settings.output, format, handler.as_ref())
    }
}
