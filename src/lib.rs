pub mod errors;
pub mod config;
pub mod extractor;
pub mod dataset;
pub mod tiler;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::OilPatch;

pub use errors::{DatasetError, DatasetResult};
pub use config::{ClassColor, DatasetConfig, Palette};
pub use extractor::{extract_patches, ClassRule, PatchExtractor, PatchRecord, Region};
pub use tiler::{GridTiler, GridTilerConfig};
