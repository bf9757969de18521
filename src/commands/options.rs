//! Resolution of inputs, shapes and settings shared by every command
//!
//! Settings come from the built-in defaults, then the `--config` run file,
//! then command-line flags; later layers win.

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};

use crate::api::KymoKit;
use crate::config::{CommandSettings, Defaults, RunConfig, SettingsOverride};
use crate::errors::{KymoError, KymoResult};
use crate::roi::Shape;

/// Which command's defaults and run-file section apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Profile,
    Kymograph,
}

/// Everything a command needs before touching image data
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub inputs: Vec<String>,
    pub shapes: Vec<Shape>,
    pub settings: CommandSettings,
}

fn strings(args: &ArgMatches, id: &str) -> Vec<String> {
    args.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

pub(crate) fn parse_channels(spec: &str) -> KymoResult<Vec<u32>> {
    spec.split(',')
        .map(|c| c.trim().parse::<u32>()
            .map_err(|_| KymoError::ParseError(format!("invalid channel '{}' in '{}'", c.trim(), spec))))
        .collect()
}

/// Settings given as flags on the command line
pub(crate) fn cli_overrides(args: &ArgMatches) -> KymoResult<SettingsOverride> {
    let mut overrides = SettingsOverride::default();

    if let Some(width) = args.get_one::<String>("width") {
        let width = width.parse::<u32>()
            .map_err(|_| KymoError::ParseError(format!("invalid line width '{}'", width)))?;
        if width == 0 {
            return Err(KymoError::InvalidGeometry("line width must be at least 1".to_string()));
        }
        overrides.line_width = Some(width);
    }
    if let Some(projection) = args.get_one::<String>("projection") {
        overrides.projection = Some(projection.parse()?);
    }
    if let Some(z) = args.get_one::<String>("z") {
        overrides.z = Some(z.parse::<u32>()
            .map_err(|_| KymoError::ParseError(format!("invalid z index '{}'", z)))?);
    }
    if let Some(channels) = args.get_one::<String>("channels") {
        overrides.channels = Some(parse_channels(channels)?);
    }
    overrides.output = args.get_one::<String>("output").cloned();
    overrides.format = args.get_one::<String>("format").cloned();
    overrides.compression = args.get_one::<String>("compression").cloned();

    Ok(overrides)
}

/// Reads the run file (if any), merges settings, and gathers inputs and shapes
pub fn resolve(args: &ArgMatches, kit: &KymoKit, section: Section) -> KymoResult<ResolvedOptions> {
    let run = match args.get_one::<String>("config") {
        Some(path) => RunConfig::load(Path::new(path))?,
        None => RunConfig::default(),
    };

    let defaults = Defaults::get();
    let (base, from_file) = match section {
        Section::Profile => (&defaults.profile, &run.profile),
        Section::Kymograph => (&defaults.kymograph, &run.kymograph),
    };
    let settings = base.clone().with(from_file).with(&cli_overrides(args)?);
    debug!("Resolved settings: {:?}", settings);

    let mut inputs = strings(args, "input");
    if inputs.is_empty() {
        inputs = run.inputs.clone();
    }
    if inputs.is_empty() {
        return Err(KymoError::GenericError("no input images; pass --input or list inputs in the run file".to_string()));
    }

    let roi_files: Vec<PathBuf> = strings(args, "roi").into_iter().map(PathBuf::from).collect();
    let shapes = kit.load_shapes(&strings(args, "line"), &strings(args, "polyline"), &roi_files, run.shapes)?;
    info!("{} input image(s), {} shape(s)", inputs.len(), shapes.len());

    Ok(ResolvedOptions { inputs, shapes, settings })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channels() {
        assert_eq!(parse_channels("0, 2,3").unwrap(), vec![0, 2, 3]);
        assert!(parse_channels("0,red").is_err());
    }
}
