use image::{Rgb, RgbImage};

use crate::config::palette::Color;

pub const OIL: Color = [255, 0, 124];
pub const WATER: Color = [51, 221, 255];
pub const BACKGROUND: Color = [0, 0, 0];

/// Creates a gradient test image so crops can be told apart
pub fn create_test_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

/// Creates a mask filled with a single color
pub fn create_solid_mask(width: u32, height: u32, color: Color) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Paints the first `count` pixels (row-major) of the tile at (x0, y0)
pub fn paint_pixels(mask: &mut RgbImage, x0: u32, y0: u32, size: u32, count: u32, color: Color) {
    for i in 0..count {
        let x = x0 + i % size;
        let y = y0 + i / size;
        mask.put_pixel(x, y, Rgb(color));
    }
}
