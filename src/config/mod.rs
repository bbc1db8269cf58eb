//! Job configuration
//!
//! Mask palettes and TOML-backed dataset job settings.

pub mod palette;
pub mod dataset_config;

pub use palette::{default_palette, parse_color, ClassColor, Color, Palette, OIL_LABEL};
pub use dataset_config::{DatasetConfig, DatasetPaths, DEFAULT_IMAGE_EXTENSION, DEFAULT_MASK_PREFIX, DEFAULT_TILE_SIZE};
