//! Per-command settings and the overrides layered on top of them

use toml::Value;

use crate::errors::{KymoError, KymoResult};
use crate::profile::Projection;

/// Fully resolved settings for one command
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSettings {
    pub line_width: u32,
    pub projection: Projection,
    pub format: String,
    pub compression: String,
    pub output: String,
    pub channels: Option<Vec<u32>>,
    pub z: u32,
}

impl CommandSettings {
    /// Apply every value `overrides` sets, leaving the rest untouched
    pub fn apply(&mut self, overrides: &SettingsOverride) {
        if let Some(width) = overrides.line_width {
            self.line_width = width;
        }
        if let Some(projection) = overrides.projection {
            self.projection = projection;
        }
        if let Some(format) = &overrides.format {
            self.format = format.clone();
        }
        if let Some(compression) = &overrides.compression {
            self.compression = compression.clone();
        }
        if let Some(output) = &overrides.output {
            self.output = output.clone();
        }
        if let Some(channels) = &overrides.channels {
            self.channels = Some(channels.clone());
        }
        if let Some(z) = overrides.z {
            self.z = z;
        }
    }

    pub fn with(mut self, overrides: &SettingsOverride) -> Self {
        self.apply(overrides);
        self
    }
}

/// Optional values from a run file section or the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverride {
    pub line_width: Option<u32>,
    pub projection: Option<Projection>,
    pub format: Option<String>,
    pub compression: Option<String>,
    pub output: Option<String>,
    pub channels: Option<Vec<u32>>,
    pub z: Option<u32>,
}

fn unsigned(value: &Value, key: &str) -> KymoResult<u32> {
    match value {
        Value::Integer(i) if *i >= 0 && *i <= u32::MAX as i64 => Ok(*i as u32),
        other => Err(KymoError::ConfigError(format!("{} must be a non-negative integer, got {}", key, other))),
    }
}

fn string(value: &Value, key: &str) -> KymoResult<String> {
    value.as_str()
        .map(str::to_string)
        .ok_or_else(|| KymoError::ConfigError(format!("{} must be a string, got {}", key, value)))
}

impl SettingsOverride {
    /// Reads a `[profile]` or `[kymograph]` table
    pub fn from_table(table: &toml::value::Table) -> KymoResult<Self> {
        let mut overrides = SettingsOverride::default();

        for (key, value) in table {
            match key.as_str() {
                "line_width" => {
                    let width = unsigned(value, key)?;
                    if width == 0 {
                        return Err(KymoError::ConfigError("line_width must be at least 1".to_string()));
                    }
                    overrides.line_width = Some(width);
                }
                "projection" => overrides.projection = Some(string(value, key)?.parse()?),
                "format" => overrides.format = Some(string(value, key)?),
                "compression" => overrides.compression = Some(string(value, key)?),
                "output" => overrides.output = Some(string(value, key)?),
                "z" => overrides.z = Some(unsigned(value, key)?),
                "channels" => {
                    let list = value.as_array()
                        .ok_or_else(|| KymoError::ConfigError("channels must be a list".to_string()))?;
                    overrides.channels = Some(list.iter()
                        .map(|c| unsigned(c, "channel"))
                        .collect::<KymoResult<Vec<_>>>()?);
                }
                other => log::warn!("Ignoring unknown setting '{}'", other),
            }
        }

        Ok(overrides)
    }
}
