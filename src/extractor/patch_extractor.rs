//! Grid patch extraction with per-class selection
//!
//! The extractor partitions a co-registered image/mask pair into a grid of
//! square tiles and keeps the tiles that satisfy one or more class rules.
//! Each accepted (tile, rule) pair becomes a `PatchRecord` carrying the
//! image and mask crops. Extraction is pure: no I/O, no state between calls.

use image::RgbImage;
use log::debug;

use crate::config::palette::{Color, Palette, OIL_LABEL};
use crate::errors::{DatasetError, DatasetResult};

use super::region::{candidate_tiles, Region};
use super::rule::{validate_rules, ClassRule};

/// One accepted patch
#[derive(Debug, Clone, PartialEq)]
pub struct PatchRecord {
    /// Tile cropped from the image
    pub image: RgbImage,
    /// Tile cropped from the mask
    pub mask: RgbImage,
    /// X offset of the tile in the source
    pub x: u32,
    /// Y offset of the tile in the source
    pub y: u32,
    /// Class the tile was accepted for
    pub label: String,
}

/// Grid patch extractor for a fixed tile size
#[derive(Debug, Clone, Copy)]
pub struct PatchExtractor {
    tile_size: u32,
}

impl PatchExtractor {
    /// Create an extractor for `tile_size` x `tile_size` tiles
    ///
    /// # Returns
    /// The extractor, or `InvalidConfiguration` for a zero tile size
    pub fn new(tile_size: u32) -> DatasetResult<Self> {
        if tile_size == 0 {
            return Err(DatasetError::InvalidConfiguration(
                "tile size must be positive".to_string()));
        }
        Ok(PatchExtractor { tile_size })
    }

    /// Edge length of the tiles
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Extract every tile that satisfies at least one rule
    ///
    /// Records come out in row-major tile order, and within a tile in the
    /// order the rules are given. A tile accepted by several rules yields
    /// one record per rule.
    ///
    /// # Arguments
    /// * `image` - Source image
    /// * `mask` - Color-coded mask with the same dimensions as `image`
    /// * `rules` - Non-empty rule set with unique labels
    ///
    /// # Returns
    /// The accepted patches, or `DimensionMismatch` / `InvalidConfiguration`
    pub fn extract(&self, image: &RgbImage, mask: &RgbImage, rules: &[ClassRule]) -> DatasetResult<Vec<PatchRecord>> {
        validate_rules(rules)?;
        check_dimensions(image, mask)?;

        let mut records = Vec::new();
        for tile in candidate_tiles(image.width(), image.height(), self.tile_size) {
            for rule in rules {
                let class_pixels = count_color(mask, &tile, rule.match_color);
                let excluded_pixels = match rule.exclusion {
                    Some(exclusion) => count_color(mask, &tile, exclusion.color),
                    None => 0,
                };

                debug!("Tile ({}, {}) rule '{}': class={}, excluded={}",
                       tile.x, tile.y, rule.label, class_pixels, excluded_pixels);

                if rule.accepts(class_pixels, excluded_pixels) {
                    records.push(PatchRecord {
                        image: tile.crop(image),
                        mask: tile.crop(mask),
                        x: tile.x,
                        y: tile.y,
                        label: rule.label.clone(),
                    });
                }
            }
        }

        Ok(records)
    }

    /// Extract tiles for a single class without exclusion
    pub fn extract_class(&self, image: &RgbImage, mask: &RgbImage, label: &str,
                         color: Color, min_pixels: u32) -> DatasetResult<Vec<PatchRecord>> {
        self.extract(image, mask, &[ClassRule::new(label, color, min_pixels)])
    }

    /// Extract tiles that contain at least `min_pixels` oil pixels
    pub fn extract_oil(&self, image: &RgbImage, mask: &RgbImage, palette: &Palette,
                       min_pixels: u32) -> DatasetResult<Vec<PatchRecord>> {
        let oil = palette.oil_color()?;
        self.extract_class(image, mask, OIL_LABEL, oil, min_pixels)
    }
}

/// Extract the patches of `image`/`mask` accepted by `rules`
///
/// Convenience wrapper around [`PatchExtractor::extract`].
pub fn extract_patches(image: &RgbImage, mask: &RgbImage, tile_size: u32,
                       rules: &[ClassRule]) -> DatasetResult<Vec<PatchRecord>> {
    PatchExtractor::new(tile_size)?.extract(image, mask, rules)
}

/// Count the mask pixels inside `region` that exactly equal `color`
pub fn count_color(mask: &RgbImage, region: &Region, color: Color) -> u32 {
    let mut count = 0;
    for y in region.y..region.end_y() {
        for x in region.x..region.end_x() {
            if mask.get_pixel(x, y).0 == color {
                count += 1;
            }
        }
    }
    count
}

fn check_dimensions(image: &RgbImage, mask: &RgbImage) -> DatasetResult<()> {
    if image.dimensions() != mask.dimensions() {
        return Err(DatasetError::DimensionMismatch {
            image: image.dimensions(),
            mask: mask.dimensions(),
        });
    }
    Ok(())
}
