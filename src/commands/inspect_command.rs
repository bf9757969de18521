//! `inspect`: report plane dimensions of the inputs

use clap::ArgMatches;

use crate::api::KymoKit;
use crate::commands::command_traits::Command;
use crate::errors::{KymoError, KymoResult};

pub struct InspectCommand<'a> {
    inputs: Vec<String>,
    kit: &'a KymoKit,
}

impl<'a> InspectCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a KymoKit) -> KymoResult<Self> {
        let inputs: Vec<String> = args.get_many::<String>("input")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        if inputs.is_empty() {
            return Err(KymoError::GenericError("inspect needs at least one --input".to_string()));
        }
        Ok(InspectCommand { inputs, kit })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> KymoResult<()> {
        let source = self.kit.open_images(&self.inputs)?;
        print!("{}", source.describe());
        print!("{}", self.kit.inspect(&source));
        Ok(())
    }
}
