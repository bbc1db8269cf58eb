//! Tile regions on the extraction grid
//!
//! A tile is a square block of the source image addressed by its top-left
//! pixel offset. Coordinates follow the usual image convention where (0,0)
//! is the top-left corner.

use image::RgbImage;
use image::imageops;

/// Square tile region (in pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Edge length of the tile in pixels
    pub size: u32,
}

impl Region {
    /// Create a new tile region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `size` - Edge length of the tile in pixels
    pub fn new(x: u32, y: u32, size: u32) -> Self {
        Region { x, y, size }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.size
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.size
    }

    /// Grid position of this tile as (row, col)
    pub fn grid_position(&self) -> (u32, u32) {
        (self.y / self.size, self.x / self.size)
    }

    /// Check whether the whole tile lies inside a `width` x `height` raster
    ///
    /// Compares remaining extents instead of end coordinates, so offsets
    /// near `u32::MAX` cannot overflow.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x <= width && self.y <= height
            && self.size <= width - self.x
            && self.size <= height - self.y
    }

    /// Copy this region out of a source buffer
    pub fn crop(&self, source: &RgbImage) -> RgbImage {
        imageops::crop_imm(source, self.x, self.y, self.size, self.size).to_image()
    }
}

/// Enumerate the fully contained tiles of a `width` x `height` raster
///
/// Tiles are produced in row-major order (`y` ascending, then `x`
/// ascending). Trailing partial tiles at the right and bottom borders are
/// skipped, so the count is `floor(width / size) * floor(height / size)`.
/// A zero `size` yields no tiles.
pub fn candidate_tiles(width: u32, height: u32, size: u32) -> Vec<Region> {
    if size == 0 {
        return Vec::new();
    }

    let mut tiles = Vec::new();
    for y in (0..height).step_by(size as usize) {
        for x in (0..width).step_by(size as usize) {
            let tile = Region::new(x, y, size);
            if !tile.fits_within(width, height) {
                continue;
            }
            tiles.push(tile);
        }
    }
    tiles
}
