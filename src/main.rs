use clap::{Arg, ArgAction, Command as ClapCommand};
use log::{error, Level};
use std::process;

use kymokit::commands::{CommandFactory, KymokitCommandFactory};
use kymokit::config::Defaults;
use kymokit::utils::logger::Logger;
use kymokit::KymoKit;

fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .help("Input image; repeat for each time point, in order")
        .value_name("FILE")
        .action(ArgAction::Append)
}

/// Arguments shared by `profile` and `kymograph`
fn extraction_args() -> Vec<Arg> {
    vec![
        input_arg(),
        Arg::new("line")
            .short('l')
            .long("line")
            .help("Straight line as x1,y1,x2,y2 in pixels (repeatable)")
            .value_name("X1,Y1,X2,Y2")
            .allow_hyphen_values(true)
            .action(ArgAction::Append),
        Arg::new("polyline")
            .long("polyline")
            .help("Polyline as space-separated x,y points (repeatable)")
            .value_name("POINTS")
            .allow_hyphen_values(true)
            .action(ArgAction::Append),
        Arg::new("roi")
            .long("roi")
            .help("OME-XML or TOML file with line/polyline shapes (.gz/.zst accepted)")
            .value_name("FILE")
            .action(ArgAction::Append),
        Arg::new("config")
            .long("config")
            .help("TOML run file with inputs, settings and shapes")
            .value_name("FILE"),
        Arg::new("width")
            .short('w')
            .long("width")
            .help("Line width in pixels")
            .value_name("PIXELS"),
        Arg::new("projection")
            .short('p')
            .long("projection")
            .help("How the width is collapsed (mean, max, sum)")
            .value_name("METHOD"),
        Arg::new("channels")
            .short('c')
            .long("channels")
            .help("Comma-separated channel indices; all channels if omitted")
            .value_name("LIST"),
        Arg::new("z")
            .short('z')
            .long("z")
            .help("Focal plane for shapes that do not name one")
            .value_name("INDEX"),
        Arg::new("output")
            .short('o')
            .long("output")
            .help("Output file (profile) or file name prefix (kymograph)")
            .value_name("PATH"),
        Arg::new("format")
            .short('f')
            .long("format")
            .help("Output format: csv, json, npy (profile); png, tiff, npy, csv (kymograph)")
            .value_name("FORMAT"),
        Arg::new("compression")
            .long("compression")
            .help("Compress written files (none, gzip, zstd)")
            .value_name("NAME"),
    ]
}

fn main() {
    let defaults = Defaults::get();

    let matches = ClapCommand::new("kymokit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Oriented line profiles and kymographs from microscopy image planes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Run log file")
                .value_name("FILE")
                .global(true),
        )
        .subcommand(
            ClapCommand::new("profile")
                .about("Write intensity profiles along lines, one per channel and time point")
                .args(extraction_args()),
        )
        .subcommand(
            ClapCommand::new("kymograph")
                .about("Write a time-by-position kymograph per line and channel")
                .args(extraction_args())
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help("Hide the progress bar")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("inspect")
                .about("Print the plane dimensions of the inputs")
                .arg(input_arg().required(true)),
        )
        .get_matches();

    let log_file = matches.get_one::<String>("log-file")
        .cloned()
        .unwrap_or_else(|| defaults.log_file.clone());

    let kit = match KymoKit::new(Some(&log_file)) {
        Ok(kit) => kit,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") { Level::Debug } else { Level::Info };
    if let Err(e) = Logger::init_global_logger(&defaults.global_log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = KymokitCommandFactory::new();

    match factory.create_command(&matches, &kit) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
