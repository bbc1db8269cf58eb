//! Mask palette definitions
//!
//! Segmentation masks encode each semantic class with a distinct RGB color.
//! This module maps class labels to those colors. The default oil-spill
//! palette is embedded from `palette.toml` and parsed once at first use.

use lazy_static::lazy_static;
use crate::errors::{DatasetError, DatasetResult};

/// Label of the primary target class
pub const OIL_LABEL: &str = "oil";

/// An exact RGB color value
pub type Color = [u8; 3];

lazy_static! {
    static ref DEFAULT_PALETTE: Palette = {
        let content = include_str!("../../palette.toml");
        Palette::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse default palette: {}", e);
            Palette::fallback()
        })
    };
}

/// Get the built-in oil-spill palette
pub fn default_palette() -> &'static Palette {
    &DEFAULT_PALETTE
}

/// A class label and the mask color that identifies it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassColor {
    /// Class label (e.g. "oil", "water")
    pub label: String,
    /// Exact mask color for the class
    pub color: Color,
}

impl ClassColor {
    pub fn new(label: &str, color: Color) -> Self {
        ClassColor { label: label.to_string(), color }
    }
}

/// Ordered set of class colors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<ClassColor>,
}

impl Palette {
    /// Create an empty palette
    pub fn new() -> Self {
        Palette { entries: Vec::new() }
    }

    /// Hardcoded copy of the embedded palette, used only if it fails to parse
    fn fallback() -> Self {
        let mut palette = Palette::new();
        palette.insert(OIL_LABEL, [255, 0, 124]);
        palette.insert("water", [51, 221, 255]);
        palette.insert("other", [255, 204, 51]);
        palette.insert("background", [0, 0, 0]);
        palette
    }

    /// Parse a palette from a TOML document containing a `[palette]` table
    pub fn from_str(content: &str) -> DatasetResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(DatasetError::ConfigParse(format!("Failed to parse TOML: {}", e))),
        };

        let mut palette = Palette::new();
        palette.merge_table(&toml_value)?;
        Ok(palette)
    }

    /// Add or override entries from the `[palette]` table of a TOML value
    ///
    /// Documents without a `[palette]` table leave the palette unchanged.
    pub fn merge_table(&mut self, toml_value: &toml::Value) -> DatasetResult<()> {
        let Some(table) = toml_value.get("palette") else {
            return Ok(());
        };
        let table = table.as_table()
            .ok_or_else(|| DatasetError::ConfigParse("'palette' must be a table".to_string()))?;

        for (label, value) in table {
            let color = color_from_array(value)
                .map_err(|e| DatasetError::ConfigParse(format!("palette entry '{}': {}", label, e)))?;
            self.insert(label, color);
        }
        Ok(())
    }

    /// Insert a class color, replacing the color of an existing label
    pub fn insert(&mut self, label: &str, color: Color) {
        match self.entries.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.color = color,
            None => self.entries.push(ClassColor::new(label, color)),
        }
    }

    /// Look up the color of a class label
    pub fn get(&self, label: &str) -> Option<Color> {
        self.entries.iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.color)
    }

    /// Color of the primary target class
    pub fn oil_color(&self) -> DatasetResult<Color> {
        self.get(OIL_LABEL).ok_or_else(|| {
            DatasetError::InvalidConfiguration(format!("palette has no '{}' entry", OIL_LABEL))
        })
    }

    /// Resolve a TOML color value: a palette label or an `[r, g, b]` array
    pub fn resolve(&self, value: &toml::Value) -> DatasetResult<Color> {
        if let Some(name) = value.as_str() {
            return self.get(name).ok_or_else(|| {
                DatasetError::ConfigParse(format!("Unknown palette color '{}'", name))
            });
        }
        color_from_array(value).map_err(DatasetError::ConfigParse)
    }

    /// Resolve a command-line color: a palette label or "r,g,b"
    pub fn resolve_str(&self, text: &str) -> DatasetResult<Color> {
        if let Some(color) = self.get(text.trim()) {
            return Ok(color);
        }
        parse_color(text).map_err(DatasetError::InvalidConfiguration)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Convert a TOML `[r, g, b]` array into a color
fn color_from_array(value: &toml::Value) -> Result<Color, String> {
    let array = value.as_array()
        .ok_or_else(|| format!("Expected [r, g, b] array, found {}", value.type_str()))?;

    if array.len() != 3 {
        return Err(format!("Expected 3 color channels, found {}", array.len()));
    }

    let mut color = [0u8; 3];
    for (channel, item) in color.iter_mut().zip(array) {
        *channel = item.as_integer()
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| format!("Invalid channel value {}. Expected a number between 0-255", item))?;
    }
    Ok(color)
}

/// Parse a color string in the format "r,g,b"
///
/// # Arguments
/// * `text` - String in the format "r,g,b" (e.g., "255,0,124")
///
/// # Returns
/// The parsed color or an error message if parsing fails
pub fn parse_color(text: &str) -> Result<Color, String> {
    let parts: Vec<&str> = text.split(',').collect();

    if parts.len() != 3 {
        return Err(format!("Invalid color format '{}'. Expected 'r,g,b'", text));
    }

    let mut color = [0u8; 3];
    for (channel, part) in color.iter_mut().zip(&parts) {
        *channel = match part.trim().parse::<u8>() {
            Ok(value) => value,
            Err(_) => return Err(format!("Invalid channel value '{}'. Expected a number between 0-255", part)),
        };
    }

    Ok(color)
}
