//! Settings: built-in defaults, run files, and command-line overrides

mod defaults;
mod run_config;
mod settings;

pub use defaults::Defaults;
pub use run_config::RunConfig;
pub use settings::{CommandSettings, SettingsOverride};
