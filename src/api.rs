use std::path::Path;
use log::info;

use crate::config::DatasetConfig;
use crate::dataset::{BatchSummary, DatasetProcessor, PatchNaming, PatchWriter};
use crate::errors::DatasetResult;
use crate::extractor::{ClassRule, PatchExtractor, DEFAULT_MIN_OIL_ROI_PIXELS};
use crate::tiler::{GridTiler, GridTilerConfig, TilingSummary};
use crate::utils::progress::ProgressTracker;

/// Main interface to the oilpatch library
pub struct OilPatch {
    config: DatasetConfig,
}

impl OilPatch {
    /// Create an instance with the built-in oil-spill defaults
    pub fn new() -> Self {
        OilPatch { config: DatasetConfig::default() }
    }

    /// Create an instance from an explicit configuration
    pub fn with_config(config: DatasetConfig) -> Self {
        OilPatch { config }
    }

    /// Create an instance from a TOML configuration file
    pub fn from_config_file(path: &str) -> DatasetResult<Self> {
        Ok(OilPatch { config: DatasetConfig::from_file(path)? })
    }

    /// Extract class-balanced patches from a dataset folder
    ///
    /// Uses the configured rules, or the default oil/water/other/background
    /// set. Patches are named `<prefix>_<id>_<label>_<x>_<y>.png`.
    ///
    /// # Arguments
    /// * `images_dir` - Folder with the source images
    /// * `masks_dir` - Folder with the masks
    /// * `out_images` - Output folder for image patches
    /// * `out_masks` - Output folder for mask patches
    pub fn extract_balanced(&self, images_dir: &Path, masks_dir: &Path,
                            out_images: &Path, out_masks: &Path) -> DatasetResult<BatchSummary> {
        let rules = self.config.effective_rules()?;
        info!("Balanced extraction with {} rules", rules.len());
        self.run(rules, PatchNaming::Labeled, images_dir, masks_dir, out_images, out_masks)
    }

    /// Extract patches that contain at least `min_pixels` oil pixels
    ///
    /// Patches are named `<prefix>_<id>_<x>_<y>.png`. `None` selects the
    /// default threshold.
    pub fn extract_oil_roi(&self, images_dir: &Path, masks_dir: &Path,
                           out_images: &Path, out_masks: &Path,
                           min_pixels: Option<u32>) -> DatasetResult<BatchSummary> {
        let oil = self.config.palette.oil_color()?;
        let min_pixels = min_pixels.unwrap_or(DEFAULT_MIN_OIL_ROI_PIXELS);
        info!("Oil ROI extraction with min_pixels={}", min_pixels);

        let rules = vec![ClassRule::new(crate::config::OIL_LABEL, oil, min_pixels)];
        self.run(rules, PatchNaming::Unlabeled, images_dir, masks_dir, out_images, out_masks)
    }

    /// Split every frame of `input_dir` into a square tile grid
    pub fn tile_frames(&self, input_dir: &Path, output_dir: &Path,
                       config: GridTilerConfig) -> DatasetResult<TilingSummary> {
        let tiler = GridTiler::new(config)?;
        tiler.process_dir(input_dir, output_dir, &ProgressTracker::hidden())
    }

    fn run(&self, rules: Vec<ClassRule>, naming: PatchNaming, images_dir: &Path, masks_dir: &Path,
           out_images: &Path, out_masks: &Path) -> DatasetResult<BatchSummary> {
        let extractor = PatchExtractor::new(self.config.tile_size)?;
        let writer = PatchWriter::new(out_images, out_masks, naming)?;
        let processor = DatasetProcessor::new(extractor, rules, writer,
                                              &self.config.image_extension, &self.config.mask_prefix)?;
        processor.process(images_dir, masks_dir, &ProgressTracker::hidden())
    }
}

impl Default for OilPatch {
    fn default() -> Self {
        Self::new()
    }
}
