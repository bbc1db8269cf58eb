//! Tests for the patch extractor

extern crate std;

use crate::config::palette::default_palette;
use crate::errors::DatasetError;
use crate::extractor::{count_color, extract_patches, ClassRule, PatchExtractor, Region};
use super::test_utils::{create_solid_mask, create_test_image, paint_pixels, BACKGROUND, OIL, WATER};

#[test]
fn test_single_block_with_exact_threshold() {
    let image = create_test_image(256, 256);
    let mut mask = create_solid_mask(256, 256, BACKGROUND);
    paint_pixels(&mut mask, 128, 0, 128, 50, OIL);

    let rules = vec![ClassRule::new("oil", OIL, 50)];
    let records = extract_patches(&image, &mask, 128, &rules).unwrap();

    std::assert_eq!(records.len(), 1);
    std::assert_eq!((records[0].x, records[0].y), (128, 0));
    std::assert_eq!(records[0].label, "oil");
    std::assert_eq!(records[0].image, Region::new(128, 0, 128).crop(&image));
    std::assert_eq!(records[0].mask.dimensions(), (128, 128));
}

#[test]
fn test_zero_threshold_accepts_every_candidate() {
    let image = create_test_image(300, 260);
    let mask = create_solid_mask(300, 260, BACKGROUND);

    let rules = vec![ClassRule::new("anything", WATER, 0)];
    let records = extract_patches(&image, &mask, 128, &rules).unwrap();

    std::assert_eq!(records.len(), 4);
}

#[test]
fn test_threshold_above_tile_area_accepts_nothing() {
    let image = create_test_image(256, 256);
    let mask = create_solid_mask(256, 256, OIL);

    let rules = vec![ClassRule::new("oil", OIL, 128 * 128 + 1)];
    let records = extract_patches(&image, &mask, 128, &rules).unwrap();

    std::assert!(records.is_empty());
}

#[test]
fn test_partial_border_tile_never_emitted() {
    let image = create_test_image(130, 130);
    let mask = create_solid_mask(130, 130, OIL);

    let rules = vec![ClassRule::new("oil", OIL, 0)];
    let records = extract_patches(&image, &mask, 128, &rules).unwrap();

    std::assert_eq!(records.len(), 1);
    std::assert_eq!((records[0].x, records[0].y), (0, 0));
}

#[test]
fn test_exclusion_suppresses_tile() {
    let image = create_test_image(256, 128);
    let mut mask = create_solid_mask(256, 128, WATER);
    // Left tile: 11 oil pixels (over the limit), right tile: 10 (at the limit)
    paint_pixels(&mut mask, 0, 0, 128, 11, OIL);
    paint_pixels(&mut mask, 128, 0, 128, 10, OIL);

    let rules = vec![ClassRule::new("water", WATER, 50).with_exclusion(OIL, 10)];
    let records = extract_patches(&image, &mask, 128, &rules).unwrap();

    std::assert_eq!(records.len(), 1);
    std::assert_eq!(records[0].x, 128);
}

#[test]
fn test_tile_can_match_several_rules_in_order() {
    let image = create_test_image(128, 128);
    let mut mask = create_solid_mask(128, 128, WATER);
    paint_pixels(&mut mask, 0, 0, 128, 60, OIL);

    let rules = vec![
        ClassRule::new("water", WATER, 50),
        ClassRule::new("oil", OIL, 50),
    ];
    let records = extract_patches(&image, &mask, 128, &rules).unwrap();

    let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
    std::assert_eq!(labels, vec!["water", "oil"]);
    std::assert_eq!(records[0].image, records[1].image);
}

#[test]
fn test_records_in_row_major_order() {
    let image = create_test_image(256, 256);
    let mask = create_solid_mask(256, 256, OIL);

    let records = extract_patches(&image, &mask, 128, &[ClassRule::new("oil", OIL, 1)]).unwrap();
    let offsets: Vec<(u32, u32)> = records.iter().map(|r| (r.x, r.y)).collect();

    std::assert_eq!(offsets, vec![(0, 0), (128, 0), (0, 128), (128, 128)]);
}

#[test]
fn test_extraction_is_deterministic() {
    let image = create_test_image(384, 256);
    let mut mask = create_solid_mask(384, 256, BACKGROUND);
    paint_pixels(&mut mask, 256, 128, 128, 500, OIL);

    let rules = ClassRule::default_rule_set(default_palette()).unwrap();
    let first = extract_patches(&image, &mask, 128, &rules).unwrap();
    let second = extract_patches(&image, &mask, 128, &rules).unwrap();

    std::assert_eq!(first, second);
}

#[test]
fn test_dimension_mismatch() {
    let image = create_test_image(100, 100);
    let mask = create_solid_mask(100, 99, BACKGROUND);

    let result = extract_patches(&image, &mask, 32, &[ClassRule::new("oil", OIL, 0)]);
    match result {
        Err(DatasetError::DimensionMismatch { image, mask }) => {
            std::assert_eq!(image, (100, 100));
            std::assert_eq!(mask, (100, 99));
        }
        other => panic!("expected DimensionMismatch, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_invalid_configuration() {
    std::assert!(matches!(PatchExtractor::new(0), Err(DatasetError::InvalidConfiguration(_))));
    std::assert_eq!(PatchExtractor::new(64).unwrap().tile_size(), 64);

    let image = create_test_image(128, 128);
    let mask = create_solid_mask(128, 128, OIL);
    let result = extract_patches(&image, &mask, 128, &[]);
    std::assert!(matches!(result, Err(DatasetError::InvalidConfiguration(_))));
}

#[test]
fn test_oil_specialization_uses_palette() {
    let image = create_test_image(256, 128);
    let mut mask = create_solid_mask(256, 128, BACKGROUND);
    paint_pixels(&mut mask, 0, 0, 128, 30, OIL);
    paint_pixels(&mut mask, 128, 0, 128, 29, OIL);

    let extractor = PatchExtractor::new(128).unwrap();
    let records = extractor.extract_oil(&image, &mask, default_palette(), 30).unwrap();

    std::assert_eq!(records.len(), 1);
    std::assert_eq!(records[0].label, "oil");
    std::assert_eq!(records[0].x, 0);
}

#[test]
fn test_count_color() {
    let mut mask = create_solid_mask(64, 64, BACKGROUND);
    paint_pixels(&mut mask, 32, 32, 32, 40, WATER);

    std::assert_eq!(count_color(&mask, &Region::new(32, 32, 32), WATER), 40);
    std::assert_eq!(count_color(&mask, &Region::new(0, 0, 32), WATER), 0);
    std::assert_eq!(count_color(&mask, &Region::new(0, 0, 32), BACKGROUND), 32 * 32);
}
