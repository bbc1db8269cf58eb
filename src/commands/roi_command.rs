//! Single-class region-of-interest extraction command
//!
//! Keeps only the tiles that contain enough pixels of one class (oil by
//! default). Patches are named by position only, without a label.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::dataset_args::{require_paths, resolve_config, ResolvedPaths};
use crate::config::{Color, DatasetConfig};
use crate::dataset::{DatasetProcessor, PatchNaming, PatchWriter};
use crate::errors::DatasetResult;
use crate::extractor::{ClassRule, PatchExtractor, DEFAULT_MIN_OIL_ROI_PIXELS};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for extracting single-class patches
pub struct RoiCommand<'a> {
    /// Resolved job configuration
    config: DatasetConfig,
    /// Input and output folders
    paths: ResolvedPaths,
    /// Label of the extracted class
    label: String,
    /// Mask color of the extracted class
    color: Color,
    /// Minimum class pixels per patch
    min_pixels: u32,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> RoiCommand<'a> {
    /// Create a new ROI command
    ///
    /// # Arguments
    /// * `args` - Matches of the `roi` subcommand
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> DatasetResult<Self> {
        let config = resolve_config(args)?;
        let paths = require_paths(&config)?;

        let label = args.get_one::<String>("class")
            .cloned()
            .unwrap_or_else(|| crate::config::OIL_LABEL.to_string());
        let color = config.palette.resolve_str(&label)?;
        let min_pixels = args.get_one::<u32>("min-pixels")
            .copied()
            .unwrap_or(DEFAULT_MIN_OIL_ROI_PIXELS);

        info!("ROI class '{}' with color {:?}, min_pixels={}", label, color, min_pixels);

        Ok(RoiCommand { config, paths, label, color, min_pixels, logger })
    }
}

impl<'a> Command for RoiCommand<'a> {
    fn execute(&self) -> DatasetResult<()> {
        info!("Extracting '{}' patches from {} (masks: {})",
              self.label, self.paths.images.display(), self.paths.masks.display());

        let extractor = PatchExtractor::new(self.config.tile_size)?;
        let rules = vec![ClassRule::new(&self.label, self.color, self.min_pixels)];
        let writer = PatchWriter::new(&self.paths.output_images, &self.paths.output_masks, PatchNaming::Unlabeled)?;
        let processor = DatasetProcessor::new(extractor, rules, writer,
                                              &self.config.image_extension, &self.config.mask_prefix)?;

        let progress = ProgressTracker::new(0, "Extracting ROI patches");
        let summary = processor.process(&self.paths.images, &self.paths.masks, &progress)?;

        let report = format!("ROI extraction finished: {}", summary);
        info!("{}", report);
        self.logger.log(&report)?;
        Ok(())
    }
}
