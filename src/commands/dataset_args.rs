//! Resolution of dataset settings from CLI arguments
//!
//! Settings come from the optional `--config` file first; explicit flags
//! override them.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::config::DatasetConfig;
use crate::errors::{DatasetError, DatasetResult};

/// Folders of a patch extraction run, all required
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub images: PathBuf,
    pub masks: PathBuf,
    pub output_images: PathBuf,
    pub output_masks: PathBuf,
}

/// Load the configuration file (if any) and apply flag overrides
pub fn resolve_config(args: &ArgMatches) -> DatasetResult<DatasetConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => DatasetConfig::from_file(path)?,
        None => DatasetConfig::default(),
    };

    if let Some(size) = args.get_one::<u32>("tile-size") {
        config.tile_size = *size;
    }
    if let Some(ext) = args.get_one::<String>("extension") {
        config.image_extension = ext.trim_start_matches('.').to_string();
    }
    if let Some(prefix) = args.get_one::<String>("mask-prefix") {
        config.mask_prefix = prefix.clone();
    }

    let overrides = [
        ("images", &mut config.paths.images),
        ("masks", &mut config.paths.masks),
        ("out-images", &mut config.paths.output_images),
        ("out-masks", &mut config.paths.output_masks),
    ];
    for (name, slot) in overrides {
        if let Some(value) = args.get_one::<String>(name) {
            *slot = Some(PathBuf::from(value));
        }
    }

    info!("Tile size: {}, image extension: {}, mask prefix: {}",
          config.tile_size, config.image_extension, config.mask_prefix);
    Ok(config)
}

/// Require every folder to be set
pub fn require_paths(config: &DatasetConfig) -> DatasetResult<ResolvedPaths> {
    fn required(value: &Option<PathBuf>, flag: &str) -> DatasetResult<PathBuf> {
        value.clone().ok_or_else(|| {
            DatasetError::GenericError(format!("Missing folder: pass --{} or set it in the config file", flag))
        })
    }

    Ok(ResolvedPaths {
        images: required(&config.paths.images, "images")?,
        masks: required(&config.paths.masks, "masks")?,
        output_images: required(&config.paths.output_images, "out-images")?,
        output_masks: required(&config.paths.output_masks, "out-masks")?,
    })
}
