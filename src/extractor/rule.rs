//! Class-acceptance rules
//!
//! A rule decides whether a tile is a usable sample for one class: the tile
//! must contain at least `min_pixels` mask pixels of the class color, and,
//! when an exclusion is attached, no more than `max_pixels` of the excluded
//! color. Exclusions keep stray target pixels out of the competing classes.

use std::collections::HashSet;

use crate::config::palette::{Color, Palette, OIL_LABEL};
use crate::errors::{DatasetError, DatasetResult};

/// Minimum class pixels for a tile in the balanced multi-class set
pub const DEFAULT_MIN_PIXELS: u32 = 50;

/// Maximum oil pixels tolerated in a tile labeled as another class
pub const DEFAULT_MAX_OIL_PIXELS: u32 = 10;

/// Minimum oil pixels for a tile in the single-class ROI set
pub const DEFAULT_MIN_OIL_ROI_PIXELS: u32 = 30;

/// Disqualifying color for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclusion {
    /// Color whose presence disqualifies the tile
    pub color: Color,
    /// Largest tolerated number of pixels of `color`
    pub max_pixels: u32,
}

/// Acceptance rule for one class label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRule {
    /// Label attached to accepted tiles
    pub label: String,
    /// Mask color that counts towards the class
    pub match_color: Color,
    /// Minimum number of matching pixels (inclusive)
    pub min_pixels: u32,
    /// Optional exclusion applied after the base condition
    pub exclusion: Option<Exclusion>,
}

impl ClassRule {
    /// Create a rule without exclusion
    pub fn new(label: &str, match_color: Color, min_pixels: u32) -> Self {
        ClassRule {
            label: label.to_string(),
            match_color,
            min_pixels,
            exclusion: None,
        }
    }

    /// Attach an exclusion color to the rule
    pub fn with_exclusion(mut self, color: Color, max_pixels: u32) -> Self {
        self.exclusion = Some(Exclusion { color, max_pixels });
        self
    }

    /// Decide acceptance from the pixel counts of one tile
    ///
    /// `excluded_pixels` is ignored when the rule has no exclusion.
    pub fn accepts(&self, class_pixels: u32, excluded_pixels: u32) -> bool {
        if class_pixels < self.min_pixels {
            return false;
        }
        match self.exclusion {
            Some(exclusion) => excluded_pixels <= exclusion.max_pixels,
            None => true,
        }
    }

    /// Balanced oil-spill rule set with the default thresholds
    pub fn default_rule_set(palette: &Palette) -> DatasetResult<Vec<ClassRule>> {
        Self::balanced_rule_set(palette, DEFAULT_MIN_PIXELS, DEFAULT_MAX_OIL_PIXELS)
    }

    /// Balanced oil-spill rule set: oil, water, other, background
    ///
    /// Oil tiles only need enough oil pixels. The other classes need enough
    /// pixels of their own color and at most `max_oil_pixels` oil pixels.
    pub fn balanced_rule_set(palette: &Palette, min_pixels: u32,
                             max_oil_pixels: u32) -> DatasetResult<Vec<ClassRule>> {
        let oil = palette.oil_color()?;
        let mut rules = vec![ClassRule::new(OIL_LABEL, oil, min_pixels)];

        for label in ["water", "other", "background"] {
            let color = palette.get(label).ok_or_else(|| {
                DatasetError::InvalidConfiguration(format!("palette has no '{}' entry", label))
            })?;
            rules.push(ClassRule::new(label, color, min_pixels).with_exclusion(oil, max_oil_pixels));
        }

        Ok(rules)
    }
}

/// Check that a rule set can be used for extraction
///
/// The set must be non-empty and labels must be unique, so that no tile can
/// be emitted twice under the same label.
pub fn validate_rules(rules: &[ClassRule]) -> DatasetResult<()> {
    if rules.is_empty() {
        return Err(DatasetError::InvalidConfiguration("rule set is empty".to_string()));
    }

    let mut seen = HashSet::new();
    for rule in rules {
        if rule.label.is_empty() {
            return Err(DatasetError::InvalidConfiguration("rule label is empty".to_string()));
        }
        if !seen.insert(rule.label.as_str()) {
            return Err(DatasetError::InvalidConfiguration(
                format!("duplicate rule label '{}'", rule.label)));
        }
    }
    Ok(())
}
