//! Class-balanced patch extraction command
//!
//! Cuts every image/mask pair into tiles and keeps tiles per class: oil
//! tiles, plus water, other and background tiles that are nearly free of
//! oil. Custom rule sets can be supplied through the config file.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::dataset_args::{require_paths, resolve_config, ResolvedPaths};
use crate::config::DatasetConfig;
use crate::dataset::{DatasetProcessor, PatchNaming, PatchWriter};
use crate::errors::{DatasetError, DatasetResult};
use crate::extractor::{ClassRule, PatchExtractor, DEFAULT_MAX_OIL_PIXELS, DEFAULT_MIN_PIXELS};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for extracting class-balanced patches
pub struct PatchesCommand<'a> {
    /// Resolved job configuration
    config: DatasetConfig,
    /// Input and output folders
    paths: ResolvedPaths,
    /// Rules applied to every tile
    rules: Vec<ClassRule>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> PatchesCommand<'a> {
    /// Create a new patches command
    ///
    /// # Arguments
    /// * `args` - Matches of the `patches` subcommand
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> DatasetResult<Self> {
        let config = resolve_config(args)?;
        let paths = require_paths(&config)?;

        let min_pixels = args.get_one::<u32>("min-pixels").copied();
        let max_oil_pixels = args.get_one::<u32>("max-oil-pixels").copied();

        // Threshold flags only shape the built-in rule set
        let rules = match (&config.rules, min_pixels, max_oil_pixels) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(DatasetError::InvalidConfiguration(
                    "--min-pixels/--max-oil-pixels cannot be combined with [[rules]] from the config file".to_string()));
            }
            (Some(rules), None, None) => {
                info!("Using {} rules from the config file", rules.len());
                rules.clone()
            }
            (None, None, None) => config.effective_rules()?,
            (None, min, max) => ClassRule::balanced_rule_set(
                &config.palette,
                min.unwrap_or(DEFAULT_MIN_PIXELS),
                max.unwrap_or(DEFAULT_MAX_OIL_PIXELS),
            )?,
        };

        for rule in &rules {
            info!("Rule '{}': color={:?}, min_pixels={}, exclusion={:?}",
                  rule.label, rule.match_color, rule.min_pixels, rule.exclusion);
        }

        Ok(PatchesCommand { config, paths, rules, logger })
    }
}

impl<'a> Command for PatchesCommand<'a> {
    fn execute(&self) -> DatasetResult<()> {
        info!("Extracting balanced patches from {} (masks: {})",
              self.paths.images.display(), self.paths.masks.display());

        let extractor = PatchExtractor::new(self.config.tile_size)?;
        let writer = PatchWriter::new(&self.paths.output_images, &self.paths.output_masks, PatchNaming::Labeled)?;
        let processor = DatasetProcessor::new(extractor, self.rules.clone(), writer,
                                              &self.config.image_extension, &self.config.mask_prefix)?;

        let progress = ProgressTracker::new(0, "Extracting patches");
        let summary = processor.process(&self.paths.images, &self.paths.masks, &progress)?;

        let report = format!("Patch extraction finished: {}", summary);
        info!("{}", report);
        self.logger.log(&report)?;
        Ok(())
    }
}
