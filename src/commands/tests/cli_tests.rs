//! Tests for CLI parsing and command creation

extern crate std;

use std::path::PathBuf;

use crate::commands::build_cli;
use crate::commands::cli::parse_frame_size;
use crate::commands::dataset_args::{require_paths, resolve_config};
use crate::commands::{CommandFactory, OilpatchCommandFactory};
use crate::errors::DatasetError;
use crate::utils::logger::Logger;

#[test]
fn test_cli_definition_is_consistent() {
    build_cli().debug_assert();
}

#[test]
fn test_flags_fill_paths() {
    let matches = build_cli().try_get_matches_from([
        "oilpatch", "patches",
        "--images", "in/images", "--masks", "in/masks",
        "--out-images", "out/images", "--out-masks", "out/masks",
        "--tile-size", "64", "--extension", ".png",
    ]).unwrap();
    let (_, sub) = matches.subcommand().unwrap();

    let config = resolve_config(sub).unwrap();
    std::assert_eq!(config.tile_size, 64);
    std::assert_eq!(config.image_extension, "png");

    let paths = require_paths(&config).unwrap();
    std::assert_eq!(paths.images, PathBuf::from("in/images"));
    std::assert_eq!(paths.output_masks, PathBuf::from("out/masks"));
}

#[test]
fn test_missing_folder_is_reported() {
    let matches = build_cli().try_get_matches_from(["oilpatch", "roi", "--images", "in"]).unwrap();
    let (_, sub) = matches.subcommand().unwrap();

    let config = resolve_config(sub).unwrap();
    std::assert!(require_paths(&config).is_err());
}

#[test]
fn test_factory_creates_tile_command() {
    let matches = build_cli().try_get_matches_from(["oilpatch", "tile", "frames", "-o", "tiles"]).unwrap();
    let logger = Logger::console(log::LevelFilter::Off);

    let command = OilpatchCommandFactory::new().create_command(&matches, &logger);
    std::assert!(command.is_ok());
}

#[test]
fn test_factory_rejects_unknown_roi_class() {
    let matches = build_cli().try_get_matches_from([
        "oilpatch", "roi", "--class", "lava",
        "--images", "a", "--masks", "b", "--out-images", "c", "--out-masks", "d",
    ]).unwrap();
    let logger = Logger::console(log::LevelFilter::Off);

    std::assert!(OilpatchCommandFactory::new().create_command(&matches, &logger).is_err());
}

#[test]
fn test_parse_frame_size() {
    std::assert_eq!(parse_frame_size("1920x1080"), Ok((1920, 1080)));
    std::assert_eq!(parse_frame_size("640X480"), Ok((640, 480)));
    std::assert!(parse_frame_size("1920").is_err());
    std::assert!(parse_frame_size("axb").is_err());
}

#[test]
fn test_threshold_flags_conflict_with_config_rules() {
    let config_path = std::env::temp_dir()
        .join(format!("oilpatch-rules-{}.toml", std::process::id()));
    std::fs::write(&config_path, "[[rules]]\nlabel = \"oil\"\nmin_pixels = 5\n").unwrap();
    let config_arg = config_path.to_string_lossy().to_string();
    let logger = Logger::console(log::LevelFilter::Off);
    let base = [
        "oilpatch", "patches", "--config", config_arg.as_str(),
        "--images", "a", "--masks", "b", "--out-images", "c", "--out-masks", "d",
    ];

    let matches = build_cli().try_get_matches_from(base).unwrap();
    std::assert!(OilpatchCommandFactory::new().create_command(&matches, &logger).is_ok());

    let with_flag: Vec<&str> = base.iter().copied().chain(["--min-pixels", "10"]).collect();
    let matches = build_cli().try_get_matches_from(with_flag).unwrap();
    let result = OilpatchCommandFactory::new().create_command(&matches, &logger);
    std::assert!(matches!(result, Err(DatasetError::InvalidConfiguration(_))));

    let _ = std::fs::remove_file(&config_path);
}
