//! CLI command implementations

pub mod command_traits;
pub mod options;
pub mod profile_command;
pub mod kymograph_command;
pub mod inspect_command;

pub use command_traits::{Command, CommandFactory};
pub use inspect_command::InspectCommand;
pub use kymograph_command::KymographCommand;
pub use profile_command::ProfileCommand;

use clap::ArgMatches;
use crate::api::KymoKit;
use crate::errors::{KymoError, KymoResult};

/// Creates the command named by the CLI subcommand
pub struct KymokitCommandFactory;

impl KymokitCommandFactory {
    pub fn new() -> Self {
        KymokitCommandFactory
    }
}

impl Default for KymokitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for KymokitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a KymoKit) -> KymoResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("profile", sub)) => Ok(Box::new(ProfileCommand::new(sub, kit)?)),
            Some(("kymograph", sub)) => Ok(Box::new(KymographCommand::new(sub, kit)?)),
            Some(("inspect", sub)) => Ok(Box::new(InspectCommand::new(sub, kit)?)),
            Some((other, _)) => Err(KymoError::GenericError(format!("Unknown command: {}", other))),
            None => Err(KymoError::GenericError("No command given; try --help".to_string())),
        }
    }
}
