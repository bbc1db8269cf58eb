//! Patch persistence
//!
//! Image and mask crops of a patch are written under the same file name to
//! separate folders, so a training loader can match them by name.

use std::fs;
use std::path::{Path, PathBuf};
use log::warn;

use crate::errors::DatasetResult;
use crate::extractor::PatchRecord;
use crate::utils::file_utils::ensure_dir;
use crate::utils::image_utils::save_image;

/// File naming scheme for written patches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchNaming {
    /// `<prefix>_<label>_<x>_<y>.png`
    Labeled,
    /// `<prefix>_<x>_<y>.png`
    Unlabeled,
}

impl PatchNaming {
    /// File name of a patch
    pub fn file_name(&self, prefix: &str, record: &PatchRecord) -> String {
        match self {
            PatchNaming::Labeled => format!("{}_{}_{}_{}.png", prefix, record.label, record.x, record.y),
            PatchNaming::Unlabeled => format!("{}_{}_{}.png", prefix, record.x, record.y),
        }
    }
}

/// Writes patch crops to an image folder and a mask folder
#[derive(Debug, Clone)]
pub struct PatchWriter {
    image_dir: PathBuf,
    mask_dir: PathBuf,
    naming: PatchNaming,
}

impl PatchWriter {
    /// Create a writer; both folders are created if missing
    pub fn new(image_dir: &Path, mask_dir: &Path, naming: PatchNaming) -> DatasetResult<Self> {
        ensure_dir(image_dir)?;
        ensure_dir(mask_dir)?;
        Ok(PatchWriter {
            image_dir: image_dir.to_path_buf(),
            mask_dir: mask_dir.to_path_buf(),
            naming,
        })
    }

    /// Write every record, returning the number of patches written
    ///
    /// With unlabeled naming, a tile accepted under several labels maps to a
    /// single file name and the last record wins. If the mask of a patch
    /// cannot be saved, its image file is removed again so no unpaired patch
    /// is left behind.
    pub fn write(&self, records: &[PatchRecord], prefix: &str) -> DatasetResult<usize> {
        for record in records {
            let name = self.naming.file_name(prefix, record);
            let image_path = self.image_dir.join(&name);
            save_image(&image_path, &record.image)?;
            if let Err(e) = save_image(&self.mask_dir.join(&name), &record.mask) {
                warn!("Failed to save mask patch {}, removing its image", name);
                let _ = fs::remove_file(&image_path);
                return Err(e);
            }
        }
        Ok(records.len())
    }
}
