//! Image loading and saving helpers
//!
//! Decoding failures are not errors at this level: a file that cannot be
//! read as an image is reported as absent and the caller decides whether to
//! skip it.

use std::path::Path;
use image::RgbImage;
use log::{debug, warn};

use crate::errors::DatasetResult;
use super::file_utils::ensure_parent_dir;

/// Load an image as 8-bit RGB
///
/// # Returns
/// The decoded image, or `None` if the file is missing or not decodable
pub fn load_image(path: &Path) -> Option<RgbImage> {
    if !path.is_file() {
        debug!("No such image file: {}", path.display());
        return None;
    }

    match image::open(path) {
        Ok(image) => Some(image.to_rgb8()),
        Err(e) => {
            warn!("Could not decode {}: {}", path.display(), e);
            None
        }
    }
}

/// Save an RGB image, creating the parent directory if needed
///
/// The format is chosen from the file extension.
pub fn save_image(path: &Path, image: &RgbImage) -> DatasetResult<()> {
    ensure_parent_dir(path)?;
    image.save(path)?;
    debug!("Saved {}", path.display());
    Ok(())
}
