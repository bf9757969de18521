//! Built-in defaults, embedded at compile time

use lazy_static::lazy_static;
use toml::Value;

use crate::errors::{KymoError, KymoResult};
use crate::profile::Projection;

use super::settings::{CommandSettings, SettingsOverride};

lazy_static! {
    static ref DEFAULTS: Defaults = {
        let content = include_str!("../../kymokit_defaults.toml");
        Defaults::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in defaults: {}", e);
            Defaults::default()
        })
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    pub log_file: String,
    pub global_log_file: String,
    pub profile: CommandSettings,
    pub kymograph: CommandSettings,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            log_file: "kymokit.log".to_string(),
            global_log_file: "kymokit-global.log".to_string(),
            profile: CommandSettings {
                line_width: 1,
                projection: Projection::Mean,
                format: "csv".to_string(),
                compression: "none".to_string(),
                output: "line_profiles.csv".to_string(),
                channels: None,
                z: 0,
            },
            kymograph: CommandSettings {
                line_width: 4,
                projection: Projection::Max,
                format: "png".to_string(),
                compression: "none".to_string(),
                output: "kymograph".to_string(),
                channels: None,
                z: 0,
            },
        }
    }
}

impl Defaults {
    /// The process-wide defaults
    pub fn get() -> &'static Defaults {
        &DEFAULTS
    }

    /// Layers a defaults document over the hard-coded fallbacks
    pub fn from_str(content: &str) -> KymoResult<Self> {
        let value: Value = toml::from_str(content)
            .map_err(|e| KymoError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut defaults = Defaults::default();

        if let Some(logging) = value.get("logging").and_then(|v| v.as_table()) {
            if let Some(file) = logging.get("file").and_then(|v| v.as_str()) {
                defaults.log_file = file.to_string();
            }
            if let Some(file) = logging.get("global_file").and_then(|v| v.as_str()) {
                defaults.global_log_file = file.to_string();
            }
        }

        if let Some(table) = value.get("profile").and_then(|v| v.as_table()) {
            defaults.profile.apply(&SettingsOverride::from_table(table)?);
        }
        if let Some(table) = value.get("kymograph").and_then(|v| v.as_table()) {
            defaults.kymograph.apply(&SettingsOverride::from_table(table)?);
        }

        Ok(defaults)
    }
}
