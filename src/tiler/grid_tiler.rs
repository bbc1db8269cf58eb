//! Fixed-grid frame tiling
//!
//! Video frames are cut into a square training grid: the frame is
//! center-cropped to a square, resized to `final_size`, and split into
//! `tile_size` tiles. With the defaults a 1920x1080 frame becomes 64 tiles
//! of 128x128.

use std::path::Path;
use image::imageops::{self, FilterType};
use image::RgbImage;
use log::{info, warn};

use crate::errors::{DatasetError, DatasetResult};
use crate::extractor::candidate_tiles;
use crate::utils::file_utils::{ensure_dir, file_stem, list_files};
use crate::utils::image_utils::{load_image, save_image};
use crate::utils::progress::ProgressTracker;

/// Settings of the grid tiler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTilerConfig {
    /// Width frames must have to be tiled
    pub frame_width: u32,
    /// Height frames must have to be tiled
    pub frame_height: u32,
    /// Edge length of the resized square
    pub final_size: u32,
    /// Edge length of each tile
    pub tile_size: u32,
}

impl Default for GridTilerConfig {
    fn default() -> Self {
        GridTilerConfig {
            frame_width: 1920,
            frame_height: 1080,
            final_size: 1024,
            tile_size: 128,
        }
    }
}

/// One tile of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridTile {
    pub row: u32,
    pub col: u32,
    pub image: RgbImage,
}

impl GridTile {
    /// Output file name, as in `clip_01_tile_34.jpg`
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}_tile_{}{}.jpg", stem, self.row, self.col)
    }
}

/// Counters of a tiling run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TilingSummary {
    pub processed: usize,
    pub skipped: usize,
    pub tiles_written: usize,
}

pub struct GridTiler {
    config: GridTilerConfig,
}

impl GridTiler {
    pub fn new(config: GridTilerConfig) -> DatasetResult<Self> {
        if config.tile_size == 0 || config.final_size == 0 {
            return Err(DatasetError::InvalidConfiguration(
                "tile size and final size must be positive".to_string()));
        }
        if config.tile_size > config.final_size {
            return Err(DatasetError::InvalidConfiguration(format!(
                "tile size {} exceeds final size {}", config.tile_size, config.final_size)));
        }
        Ok(GridTiler { config })
    }

    /// Tile one frame
    ///
    /// # Returns
    /// The tiles in row-major order, or `None` if the frame does not have
    /// the configured dimensions
    pub fn tile_frame(&self, frame: &RgbImage) -> Option<Vec<GridTile>> {
        if frame.dimensions() != (self.config.frame_width, self.config.frame_height) {
            return None;
        }

        let square = center_square(frame);
        let resized = imageops::resize(&square, self.config.final_size, self.config.final_size,
                                       FilterType::Triangle);

        let tiles = candidate_tiles(self.config.final_size, self.config.final_size, self.config.tile_size)
            .into_iter()
            .map(|region| {
                let (row, col) = region.grid_position();
                GridTile { row, col, image: region.crop(&resized) }
            })
            .collect();
        Some(tiles)
    }

    /// Tile every frame of `input_dir` into `output_dir`
    ///
    /// Files that are not decodable images or have the wrong size are
    /// skipped.
    pub fn process_dir(&self, input_dir: &Path, output_dir: &Path,
                       progress: &ProgressTracker) -> DatasetResult<TilingSummary> {
        ensure_dir(output_dir)?;
        let mut summary = TilingSummary::default();

        let files = list_files(input_dir)?;
        progress.set_length(files.len() as u64);

        for path in files {
            let name = path.display();
            progress.increment(1);

            let Some(frame) = load_image(&path) else {
                warn!("Skipping {}: Not a valid image file", name);
                summary.skipped += 1;
                continue;
            };

            let Some(tiles) = self.tile_frame(&frame) else {
                warn!("Skipping {}: Not {}x{}", name, self.config.frame_width, self.config.frame_height);
                summary.skipped += 1;
                continue;
            };

            let stem = file_stem(&path);
            for tile in &tiles {
                save_image(&output_dir.join(tile.file_name(&stem)), &tile.image)?;
            }
            info!("Saved {} tiles for {}", tiles.len(), name);

            summary.processed += 1;
            summary.tiles_written += tiles.len();
        }

        progress.finish();
        Ok(summary)
    }
}

/// Crop the centered square of a frame
fn center_square(frame: &RgbImage) -> RgbImage {
    let (width, height) = frame.dimensions();
    let side = width.min(height);
    let x_start = (width - side) / 2;
    let y_start = (height - side) / 2;
    imageops::crop_imm(frame, x_start, y_start, side, side).to_image()
}
