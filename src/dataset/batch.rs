//! Batch processing of a dataset folder
//!
//! Every image/mask pair is handled on its own: a missing file, a size
//! mismatch or a write failure is logged and counted, and the batch moves
//! on to the next pair.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use log::{error, info, warn};

use crate::errors::DatasetResult;
use crate::extractor::{ClassRule, PatchExtractor, PatchRecord};
use crate::utils::image_utils::load_image;
use crate::utils::progress::ProgressTracker;

use super::pairing::{pair_samples, SamplePair};
use super::writer::PatchWriter;

/// Outcome counters of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Pairs whose patches were extracted and written
    pub processed: usize,
    /// Images skipped because they or their masks were absent
    pub skipped: usize,
    /// Pairs that failed during extraction or writing
    pub failed: usize,
    /// Patches written across all pairs
    pub patches_written: usize,
    /// Patches written per class label
    pub per_label: BTreeMap<String, usize>,
}

impl BatchSummary {
    fn record(&mut self, records: &[PatchRecord]) {
        self.processed += 1;
        self.patches_written += records.len();
        for record in records {
            *self.per_label.entry(record.label.clone()).or_insert(0) += 1;
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "processed={}, skipped={}, failed={}, patches={}",
               self.processed, self.skipped, self.failed, self.patches_written)?;
        for (label, count) in &self.per_label {
            write!(f, ", {}={}", label, count)?;
        }
        Ok(())
    }
}

/// Extracts and writes patches for every pair in a dataset folder
pub struct DatasetProcessor {
    extractor: PatchExtractor,
    rules: Vec<ClassRule>,
    writer: PatchWriter,
    image_extension: String,
    mask_prefix: String,
}

impl DatasetProcessor {
    /// Create a processor
    ///
    /// # Arguments
    /// * `extractor` - Extractor configured with the tile size
    /// * `rules` - Class rules applied to every pair
    /// * `writer` - Destination of the accepted patches
    /// * `image_extension` - Extension of the source images
    /// * `mask_prefix` - File name prefix of masks and written patches
    pub fn new(extractor: PatchExtractor, rules: Vec<ClassRule>, writer: PatchWriter,
               image_extension: &str, mask_prefix: &str) -> DatasetResult<Self> {
        crate::extractor::validate_rules(&rules)?;
        Ok(DatasetProcessor {
            extractor,
            rules,
            writer,
            image_extension: image_extension.to_string(),
            mask_prefix: mask_prefix.to_string(),
        })
    }

    /// Process every image of `images_dir` against its mask in `masks_dir`
    ///
    /// Only a failure to list `images_dir` aborts the run; per-pair problems
    /// are reflected in the returned summary.
    pub fn process(&self, images_dir: &Path, masks_dir: &Path,
                   progress: &ProgressTracker) -> DatasetResult<BatchSummary> {
        info!("Scanning {} for *.{} images", images_dir.display(), self.image_extension);
        let listing = pair_samples(images_dir, masks_dir, &self.image_extension, &self.mask_prefix)?;
        info!("Found {} image/mask pairs, {} images without identifier ({}x{} tiles)",
              listing.pairs.len(), listing.unmatched.len(),
              self.extractor.tile_size(), self.extractor.tile_size());

        let mut summary = BatchSummary {
            skipped: listing.unmatched.len(),
            ..BatchSummary::default()
        };

        progress.set_length(listing.pairs.len() as u64);
        for pair in &listing.pairs {
            progress.set_message(&format!("{} ({})", self.mask_prefix, pair.identifier));

            match self.process_pair(pair) {
                Ok(Some(records)) => {
                    info!("Processed {} ({}): {} patches", self.mask_prefix, pair.identifier, records.len());
                    summary.record(&records);
                }
                Ok(None) => {
                    warn!("Skipping {}: Missing image or mask.", pair.image_path.display());
                    summary.skipped += 1;
                }
                Err(e) => {
                    error!("Failed {}: {}", pair.image_path.display(), e);
                    summary.failed += 1;
                }
            }

            progress.increment(1);
        }

        progress.finish();
        info!("Batch finished: {}", summary);
        Ok(summary)
    }

    /// Extract and write the patches of one pair
    ///
    /// # Returns
    /// The written records, or `None` if the image or mask is absent
    pub fn process_pair(&self, pair: &SamplePair) -> DatasetResult<Option<Vec<PatchRecord>>> {
        let (Some(image), Some(mask)) = (load_image(&pair.image_path), load_image(&pair.mask_path)) else {
            return Ok(None);
        };

        let records = self.extractor.extract(&image, &mask, &self.rules)?;

        let prefix = format!("{}_{}", self.mask_prefix, pair.identifier);
        self.writer.write(&records, &prefix)?;
        Ok(Some(records))
    }
}
