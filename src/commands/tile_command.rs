//! Frame tiling command

use clap::ArgMatches;
use log::info;
use std::path::PathBuf;

use crate::commands::cli::parse_frame_size;
use crate::commands::command_traits::Command;
use crate::errors::{DatasetError, DatasetResult};
use crate::tiler::{GridTiler, GridTilerConfig};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for splitting frames into a square tile grid
pub struct TileCommand<'a> {
    /// Folder with the frames
    input_dir: PathBuf,
    /// Output folder for the tiles
    output_dir: PathBuf,
    /// Tiler settings
    config: GridTilerConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> TileCommand<'a> {
    /// Create a new tile command
    ///
    /// # Arguments
    /// * `args` - Matches of the `tile` subcommand
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> DatasetResult<Self> {
        let input_dir = args.get_one::<String>("input")
            .map(PathBuf::from)
            .ok_or_else(|| DatasetError::GenericError("Missing input folder".to_string()))?;

        let output_dir = args.get_one::<String>("output")
            .map(PathBuf::from)
            .ok_or_else(|| DatasetError::GenericError("Missing output folder".to_string()))?;

        let defaults = GridTilerConfig::default();
        let (frame_width, frame_height) = match args.get_one::<String>("frame-size") {
            Some(text) => parse_frame_size(text).map_err(DatasetError::InvalidConfiguration)?,
            None => (defaults.frame_width, defaults.frame_height),
        };

        let config = GridTilerConfig {
            frame_width,
            frame_height,
            final_size: args.get_one::<u32>("final-size").copied().unwrap_or(defaults.final_size),
            tile_size: args.get_one::<u32>("tile-size").copied().unwrap_or(defaults.tile_size),
        };
        info!("Tiler settings: {:?}", config);

        Ok(TileCommand { input_dir, output_dir, config, logger })
    }
}

impl<'a> Command for TileCommand<'a> {
    fn execute(&self) -> DatasetResult<()> {
        info!("Tiling frames from {} into {}", self.input_dir.display(), self.output_dir.display());

        let tiler = GridTiler::new(self.config)?;
        let progress = ProgressTracker::new(0, "Tiling frames");
        let summary = tiler.process_dir(&self.input_dir, &self.output_dir, &progress)?;

        let report = format!("Tiling finished: processed={}, skipped={}, tiles={}",
                             summary.processed, summary.skipped, summary.tiles_written);
        info!("{}", report);
        self.logger.log(&report)?;
        Ok(())
    }
}
