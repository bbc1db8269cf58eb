//! Square grid tiling of full frames

mod grid_tiler;

pub use grid_tiler::{GridTile, GridTiler, GridTilerConfig, TilingSummary};
