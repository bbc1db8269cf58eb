//! Dataset job configuration
//!
//! Jobs are configured from a TOML file instead of hardcoded paths. Every
//! key is optional; missing keys fall back to the oil-spill defaults.
//!
//! ```toml
//! tile_size = 128
//! image_extension = "jpg"
//! mask_prefix = "Oil"
//!
//! [paths]
//! images = "dataset/images"
//! masks = "dataset/masks"
//! output_images = "dataset/patches/images"
//! output_masks = "dataset/patches/masks"
//!
//! [palette]
//! oil = [255, 0, 124]
//!
//! [[rules]]
//! label = "water"
//! color = "water"
//! min_pixels = 50
//! exclude = "oil"
//! max_excluded = 10
//! ```

use std::fs;
use std::path::PathBuf;
use log::info;

use crate::errors::{DatasetError, DatasetResult};
use crate::extractor::{validate_rules, ClassRule, DEFAULT_MIN_PIXELS};
use super::palette::{default_palette, Palette};

/// Default edge length of extracted tiles
pub const DEFAULT_TILE_SIZE: u32 = 128;

/// Default extension of source images
pub const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

/// Default file name prefix of masks, as in `Oil (263).png`
pub const DEFAULT_MASK_PREFIX: &str = "Oil";

/// Input and output folders of a dataset job
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetPaths {
    /// Folder with the source images
    pub images: Option<PathBuf>,
    /// Folder with the color-coded masks
    pub masks: Option<PathBuf>,
    /// Folder receiving image patches
    pub output_images: Option<PathBuf>,
    /// Folder receiving mask patches
    pub output_masks: Option<PathBuf>,
}

/// Configuration of a patch extraction job
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Edge length of extracted tiles
    pub tile_size: u32,
    /// Extension (without dot) of source images
    pub image_extension: String,
    /// File name prefix shared by masks and output patches
    pub mask_prefix: String,
    /// Input and output folders
    pub paths: DatasetPaths,
    /// Mask palette
    pub palette: Palette,
    /// Explicit rule set; `None` selects the default balanced rules
    pub rules: Option<Vec<ClassRule>>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            tile_size: DEFAULT_TILE_SIZE,
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
            mask_prefix: DEFAULT_MASK_PREFIX.to_string(),
            paths: DatasetPaths::default(),
            palette: default_palette().clone(),
            rules: None,
        }
    }
}

impl DatasetConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> DatasetResult<Self> {
        info!("Loading configuration from {}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> DatasetResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(DatasetError::ConfigParse(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = DatasetConfig::default();

        if let Some(value) = toml_value.get("tile_size") {
            let size = value.as_integer()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| DatasetError::ConfigParse(format!("Invalid tile_size: {}", value)))?;
            config.tile_size = size;
        }
        if let Some(ext) = get_string(&toml_value, "image_extension")? {
            config.image_extension = ext.trim_start_matches('.').to_string();
        }
        if let Some(prefix) = get_string(&toml_value, "mask_prefix")? {
            config.mask_prefix = prefix;
        }

        if let Some(paths) = toml_value.get("paths") {
            config.paths = DatasetPaths {
                images: get_string(paths, "images")?.map(PathBuf::from),
                masks: get_string(paths, "masks")?.map(PathBuf::from),
                output_images: get_string(paths, "output_images")?.map(PathBuf::from),
                output_masks: get_string(paths, "output_masks")?.map(PathBuf::from),
            };
        }

        // Palette first, so rules can refer to overridden colors by name
        config.palette.merge_table(&toml_value)?;

        if let Some(rules) = toml_value.get("rules") {
            let rules = rules.as_array()
                .ok_or_else(|| DatasetError::ConfigParse("'rules' must be an array of tables".to_string()))?;
            let parsed = rules.iter()
                .map(|rule| parse_rule(rule, &config.palette))
                .collect::<DatasetResult<Vec<_>>>()?;
            validate_rules(&parsed)?;
            config.rules = Some(parsed);
        }

        Ok(config)
    }

    /// Rule set for the job: the configured rules or the default balanced set
    pub fn effective_rules(&self) -> DatasetResult<Vec<ClassRule>> {
        match &self.rules {
            Some(rules) => Ok(rules.clone()),
            None => ClassRule::default_rule_set(&self.palette),
        }
    }
}

fn get_string(table: &toml::Value, key: &str) -> DatasetResult<Option<String>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value.as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| DatasetError::ConfigParse(format!("'{}' must be a string", key))),
    }
}

fn get_count(table: &toml::Value, key: &str) -> DatasetResult<Option<u32>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value.as_integer()
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| DatasetError::ConfigParse(format!("'{}' must be a non-negative integer", key))),
    }
}

/// Parse one `[[rules]]` entry
fn parse_rule(value: &toml::Value, palette: &Palette) -> DatasetResult<ClassRule> {
    let label = get_string(value, "label")?
        .ok_or_else(|| DatasetError::ConfigParse("rule is missing 'label'".to_string()))?;

    // The color defaults to the palette entry named like the label
    let color = match value.get("color") {
        Some(color) => palette.resolve(color)?,
        None => palette.get(&label).ok_or_else(|| {
            DatasetError::ConfigParse(format!("rule '{}' has no color and no palette entry", label))
        })?,
    };

    let min_pixels = get_count(value, "min_pixels")?.unwrap_or(DEFAULT_MIN_PIXELS);
    let mut rule = ClassRule::new(&label, color, min_pixels);

    if let Some(exclude) = value.get("exclude") {
        let exclusion_color = palette.resolve(exclude)?;
        let max_excluded = get_count(value, "max_excluded")?.unwrap_or(0);
        rule = rule.with_exclusion(exclusion_color, max_excluded);
    }

    Ok(rule)
}
