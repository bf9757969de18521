//! Command pattern interfaces

use crate::api::KymoKit;
use crate::errors::KymoResult;

/// An executable CLI operation
pub trait Command {
    fn execute(&self) -> KymoResult<()>;
}

/// Builds the command selected by the parsed CLI arguments
pub trait CommandFactory<'a> {
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade holding the run log
    fn create_command(&self, args: &clap::ArgMatches, kit: &'a KymoKit) -> KymoResult<Box<dyn Command + 'a>>;
}
