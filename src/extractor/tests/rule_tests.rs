//! Tests for class rules

extern crate std;

use crate::config::palette::default_palette;
use crate::errors::DatasetError;
use crate::extractor::{validate_rules, ClassRule};
use super::test_utils::{OIL, WATER};

#[test]
fn test_accepts_threshold_is_inclusive() {
    let rule = ClassRule::new("oil", OIL, 50);
    std::assert!(rule.accepts(50, 0));
    std::assert!(!rule.accepts(49, 0));
}

#[test]
fn test_exclusion_limit() {
    let rule = ClassRule::new("water", WATER, 50).with_exclusion(OIL, 10);
    std::assert!(rule.accepts(100, 10));
    std::assert!(!rule.accepts(100, 11));
    // Without an exclusion the second count is irrelevant
    std::assert!(ClassRule::new("water", WATER, 50).accepts(100, 10_000));
}

#[test]
fn test_default_rule_set_order() {
    let rules = ClassRule::default_rule_set(default_palette()).unwrap();
    let labels: Vec<&str> = rules.iter().map(|r| r.label.as_str()).collect();
    std::assert_eq!(labels, vec!["oil", "water", "other", "background"]);

    std::assert!(rules[0].exclusion.is_none());
    for rule in &rules[1..] {
        let exclusion = rule.exclusion.unwrap();
        std::assert_eq!(exclusion.color, OIL);
        std::assert_eq!(exclusion.max_pixels, 10);
        std::assert_eq!(rule.min_pixels, 50);
    }
}

#[test]
fn test_validate_rejects_empty_and_duplicates() {
    std::assert!(matches!(validate_rules(&[]), Err(DatasetError::InvalidConfiguration(_))));

    let rules = vec![ClassRule::new("oil", OIL, 1), ClassRule::new("oil", WATER, 1)];
    std::assert!(matches!(validate_rules(&rules), Err(DatasetError::InvalidConfiguration(_))));

    let rules = vec![ClassRule::new("oil", OIL, 1), ClassRule::new("water", WATER, 1)];
    std::assert!(validate_rules(&rules).is_ok());
}
