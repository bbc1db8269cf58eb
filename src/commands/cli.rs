//! Command-line interface definition

use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};

/// Arguments shared by the patch extraction subcommands
fn dataset_args(command: ClapCommand) -> ClapCommand {
    command
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("images")
                .long("images")
                .help("Folder with the source images")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("masks")
                .long("masks")
                .help("Folder with the color-coded masks")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("out-images")
                .long("out-images")
                .help("Output folder for image patches")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("out-masks")
                .long("out-masks")
                .help("Output folder for mask patches")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("tile-size")
                .long("tile-size")
                .help("Edge length of the square patches")
                .value_name("PIXELS")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .help("Extension of the source images")
                .value_name("EXT"),
        )
        .arg(
            Arg::new("mask-prefix")
                .long("mask-prefix")
                .help("Mask file name prefix, as in '<prefix> (<id>).png'")
                .value_name("PREFIX"),
        )
}

/// Build the clap command tree
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("oilpatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prepare oil-spill segmentation datasets")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file path")
                .value_name("FILE")
                .default_value("oilpatch.log")
                .global(true),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Write a run summary to this file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("console-only")
                .long("console-only")
                .help("Log to the console only (honors RUST_LOG)")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            dataset_args(ClapCommand::new("patches")
                .about("Extract class-balanced patches (oil, water, other, background)"))
                .arg(
                    Arg::new("min-pixels")
                        .long("min-pixels")
                        .help("Minimum class pixels for a patch")
                        .value_name("COUNT")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("max-oil-pixels")
                        .long("max-oil-pixels")
                        .help("Maximum oil pixels allowed in non-oil patches")
                        .value_name("COUNT")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            dataset_args(ClapCommand::new("roi")
                .about("Extract patches containing a single class (oil by default)"))
                .arg(
                    Arg::new("min-pixels")
                        .long("min-pixels")
                        .help("Minimum class pixels for a patch")
                        .value_name("COUNT")
                        .default_value("30")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("class")
                        .long("class")
                        .help("Class to extract: palette label or 'r,g,b'")
                        .value_name("CLASS")
                        .default_value("oil"),
                ),
        )
        .subcommand(
            ClapCommand::new("tile")
                .about("Center-crop frames, resize and split them into a tile grid")
                .arg(
                    Arg::new("input")
                        .help("Folder with the frames")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output folder for the tiles")
                        .value_name("DIR")
                        .required(true),
                )
                .arg(
                    Arg::new("frame-size")
                        .long("frame-size")
                        .help("Required frame size as WIDTHxHEIGHT")
                        .value_name("WxH")
                        .default_value("1920x1080"),
                )
                .arg(
                    Arg::new("final-size")
                        .long("final-size")
                        .help("Edge length of the resized square")
                        .value_name("PIXELS")
                        .default_value("1024")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("tile-size")
                        .long("tile-size")
                        .help("Edge length of each tile")
                        .value_name("PIXELS")
                        .default_value("128")
                        .value_parser(value_parser!(u32)),
                ),
        )
}

/// Parse a frame size in the format "WIDTHxHEIGHT"
pub fn parse_frame_size(text: &str) -> Result<(u32, u32), String> {
    let Some((width, height)) = text.split_once(['x', 'X']) else {
        return Err(format!("Invalid frame size '{}'. Expected 'WIDTHxHEIGHT'", text));
    };

    let width = width.trim().parse::<u32>()
        .map_err(|_| format!("Invalid frame width '{}'", width))?;
    let height = height.trim().parse::<u32>()
        .map_err(|_| format!("Invalid frame height '{}'", height))?;

    Ok((width, height))
}
