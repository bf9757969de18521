//! User run files passed with `--config`
//!
//! ```toml
//! inputs = ["frame_000.png", "frame_001.png"]
//!
//! [kymograph]
//! line_width = 6
//! output = "results/kymo"
//!
//! [[shape]]
//! label = "axon"
//! line = [12, 30, 118, 64]
//! ```

use std::path::Path;

use log::info;
use toml::Value;

use crate::compression::read_text;
use crate::errors::{KymoError, KymoResult};
use crate::roi::{parse_toml_shapes, Shape};

use super::settings::SettingsOverride;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    pub inputs: Vec<String>,
    pub profile: SettingsOverride,
    pub kymograph: SettingsOverride,
    pub shapes: Vec<Shape>,
}

impl RunConfig {
    pub fn load(path: &Path) -> KymoResult<Self> {
        let config = Self::from_str(&read_text(path)?)
            .map_err(|e| KymoError::ConfigError(format!("{}: {}", path.display(), e)))?;
        info!("Loaded run file {} ({} inputs, {} shapes)",
              path.display(), config.inputs.len(), config.shapes.len());
        Ok(config)
    }

    pub fn from_str(content: &str) -> KymoResult<Self> {
        let value: Value = toml::from_str(content)
            .map_err(|e| KymoError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = RunConfig::default();

        if let Some(inputs) = value.get("inputs") {
            let list = inputs.as_array()
                .ok_or_else(|| KymoError::ConfigError("inputs must be a list of paths".to_string()))?;
            for entry in list {
                let path = entry.as_str()
                    .ok_or_else(|| KymoError::ConfigError(format!("input {} is not a string", entry)))?;
                config.inputs.push(path.to_string());
            }
        }

        if let Some(table) = value.get("profile").and_then(|v| v.as_table()) {
            config.profile = SettingsOverride::from_table(table)?;
        }
        if let Some(table) = value.get("kymograph").and_then(|v| v.as_table()) {
            config.kymograph = SettingsOverride::from_table(table)?;
        }

        config.shapes = parse_toml_shapes(&value)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Projection;

    #[test]
    fn test_full_run_file() {
        let config = RunConfig::from_str(r#"
            inputs = ["a.png", "b.png"]

            [profile]
            projection = "max"

            [kymograph]
            line_width = 6

            [[shape]]
            line = [0, 0, 10, 0]
        "#).unwrap();

        assert_eq!(config.inputs, vec!["a.png", "b.png"]);
        assert_eq!(config.profile.projection, Some(Projection::Max));
        assert_eq!(config.kymograph.line_width, Some(6));
        assert_eq!(config.shapes.len(), 1);
    }

    #[test]
    fn test_empty_run_file() {
        assert_eq!(RunConfig::from_str("").unwrap(), RunConfig::default());
    }

    #[test]
    fn test_bad_inputs() {
        assert!(RunConfig::from_str("inputs = \"a.png\"").is_err());
        assert!(RunConfig::from_str("inputs = [1]").is_err());
        assert!(RunConfig::from_str("[[shape]]\nline = 3").is_err());
    }
}
