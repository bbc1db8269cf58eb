//! Patch extraction from image/mask pairs
//!
//! This module tiles co-registered images and masks into a fixed grid and
//! selects tiles per class according to pixel-count rules.

mod region;
mod rule;
mod patch_extractor;
#[cfg(test)]
mod tests;

// Public exports
pub use region::{candidate_tiles, Region};
pub use rule::{validate_rules, ClassRule, Exclusion};
pub use rule::{DEFAULT_MAX_OIL_PIXELS, DEFAULT_MIN_OIL_ROI_PIXELS, DEFAULT_MIN_PIXELS};
pub use patch_extractor::{count_color, extract_patches, PatchExtractor, PatchRecord};
