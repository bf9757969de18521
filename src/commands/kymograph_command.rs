//! `kymograph`: one time-by-position image per shape and channel

use clap::ArgMatches;
use log::info;

use crate::api::KymoKit;
use crate::commands::command_traits::Command;
use crate::commands::options::{resolve, ResolvedOptions, Section};
use crate::errors::KymoResult;

pub struct KymographCommand<'a> {
    options: ResolvedOptions,
    show_progress: bool,
    kit: &'a KymoKit,
}

impl<'a> KymographCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a KymoKit) -> KymoResult<Self> {
        info!("Creating kymograph command from arguments");
        let options = resolve(args, kit, Section::Kymograph)?;
        Ok(KymographCommand {
            options,
            show_progress: !args.get_flag("quiet"),
            kit,
        })
    }
}

impl<'a> Command for KymographCommand<'a> {
    fn execute(&self) -> KymoResult<()> {
        let source = self.kit.open_images(&self.options.inputs)?;
        if source.paths().len() == 1 {
            log::warn!("Only one time point given; each kymograph will have a single row");
        }

        let kymographs = self.kit.kymographs(&source, &self.options.shapes, &self.options.settings, self.show_progress)?;
        let paths = self.kit.write_kymographs(&kymographs, &self.options.settings)?;

        for path in &paths {
            println!("{}", path.display());
        }
        println!("Wrote {} kymographs", paths.len());
        Ok(())
    }
}
