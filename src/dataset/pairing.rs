//! Image/mask pairing
//!
//! Each source image is matched to its mask through the identifier in
//! parentheses: `images/Oil (263).jpg` pairs with `masks/Oil (263).png`.
//! Whether the mask actually exists is checked when the pair is loaded.

use std::path::{Path, PathBuf};
use log::{debug, warn};

use crate::errors::DatasetResult;
use crate::utils::file_utils::{extract_identifier, list_files_with_extension, mask_file_name};

/// A source image and the mask it should be paired with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    /// Identifier shared by image and mask, e.g. "263"
    pub identifier: String,
    /// Path of the source image
    pub image_path: PathBuf,
    /// Expected path of the mask
    pub mask_path: PathBuf,
}

/// Result of scanning an image folder
#[derive(Debug, Clone, Default)]
pub struct PairListing {
    /// Images with an identifier, in file name order
    pub pairs: Vec<SamplePair>,
    /// Images whose names carry no identifier
    pub unmatched: Vec<PathBuf>,
}

/// Pair every image in `images_dir` with its expected mask in `masks_dir`
///
/// # Arguments
/// * `images_dir` - Folder with the source images
/// * `masks_dir` - Folder with the masks
/// * `extension` - Extension of the source images (e.g. "jpg")
/// * `mask_prefix` - Mask file name prefix (e.g. "Oil")
pub fn pair_samples(images_dir: &Path, masks_dir: &Path, extension: &str,
                    mask_prefix: &str) -> DatasetResult<PairListing> {
    let mut listing = PairListing::default();

    for image_path in list_files_with_extension(images_dir, extension)? {
        let file_name = image_path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let Some(identifier) = extract_identifier(&file_name) else {
            warn!("Skipping {}: no identifier in file name", file_name);
            listing.unmatched.push(image_path);
            continue;
        };

        let mask_path = masks_dir.join(mask_file_name(mask_prefix, identifier));
        debug!("Paired {} with {}", image_path.display(), mask_path.display());

        listing.pairs.push(SamplePair {
            identifier: identifier.to_string(),
            image_path,
            mask_path,
        });
    }

    Ok(listing)
}
