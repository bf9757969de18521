//! `profile`: intensity profiles along lines, one row per plane

use clap::ArgMatches;
use log::info;

use crate::api::KymoKit;
use crate::commands::command_traits::Command;
use crate::commands::options::{resolve, ResolvedOptions, Section};
use crate::errors::KymoResult;

pub struct ProfileCommand<'a> {
    options: ResolvedOptions,
    kit: &'a KymoKit,
}

impl<'a> ProfileCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a KymoKit) -> KymoResult<Self> {
        info!("Creating profile command from arguments");
        let options = resolve(args, kit, Section::Profile)?;
        Ok(ProfileCommand { options, kit })
    }
}

impl<'a> Command for ProfileCommand<'a> {
    fn execute(&self) -> KymoResult<()> {
        let source = self.kit.open_images(&self.options.inputs)?;
        let table = self.kit.plot_profile(&source, &self.options.shapes, &self.options.settings)?;
        let path = self.kit.write_profile(&table, &self.options.settings)?;

        println!("Wrote {} profiles to {}", table.len(), path.display());
        Ok(())
    }
}
