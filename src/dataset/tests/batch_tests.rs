//! Tests for batch processing

extern crate std;

use crate::config::palette::default_palette;
use crate::dataset::{DatasetProcessor, PatchNaming, PatchWriter};
use crate::extractor::{ClassRule, PatchExtractor};
use crate::utils::progress::ProgressTracker;
use super::test_utils::{file_count, write_solid, TestDir};

const OIL: [u8; 3] = [255, 0, 124];
const WATER: [u8; 3] = [51, 221, 255];

#[test]
fn test_batch_isolates_failing_pairs() {
    let dir = TestDir::new("batch");
    let images = dir.subdir("images");
    let masks = dir.subdir("masks");
    let out_images = dir.path().join("patches/images");
    let out_masks = dir.path().join("patches/masks");

    // Good pair: 256x128 all-oil mask gives two oil tiles
    write_solid(&images.join("Oil (1).jpg"), 256, 128, [10, 20, 30]);
    write_solid(&masks.join("Oil (1).png"), 256, 128, OIL);
    // Mask missing
    write_solid(&images.join("Oil (2).jpg"), 128, 128, [10, 20, 30]);
    // Size mismatch
    write_solid(&images.join("Oil (3).jpg"), 128, 128, [10, 20, 30]);
    write_solid(&masks.join("Oil (3).png"), 128, 64, OIL);

    let rules = ClassRule::default_rule_set(default_palette()).unwrap();
    let writer = PatchWriter::new(&out_images, &out_masks, PatchNaming::Labeled).unwrap();
    let processor = DatasetProcessor::new(PatchExtractor::new(128).unwrap(), rules, writer, "jpg", "Oil").unwrap();

    let summary = processor.process(&images, &masks, &ProgressTracker::hidden()).unwrap();

    std::assert_eq!(summary.processed, 1);
    std::assert_eq!(summary.skipped, 1);
    std::assert_eq!(summary.failed, 1);
    std::assert_eq!(summary.patches_written, 2);
    std::assert_eq!(summary.per_label.get("oil"), Some(&2));

    std::assert!(out_images.join("Oil_1_oil_0_0.png").is_file());
    std::assert!(out_masks.join("Oil_1_oil_128_0.png").is_file());
    std::assert_eq!(file_count(&out_images), 2);
}

#[test]
fn test_balanced_rules_exclude_oily_water_tiles() {
    let dir = TestDir::new("batch-balanced");
    let images = dir.subdir("images");
    let masks = dir.subdir("masks");
    let out_images = dir.path().join("patches/images");
    let out_masks = dir.path().join("patches/masks");

    write_solid(&images.join("Oil (5).jpg"), 256, 128, [0, 0, 0]);
    let mut mask = image::RgbImage::from_pixel(256, 128, image::Rgb(WATER));
    // Left tile gets 60 oil pixels: accepted as oil, rejected as water
    for x in 0..60 {
        mask.put_pixel(x, 0, image::Rgb(OIL));
    }
    mask.save(masks.join("Oil (5).png")).unwrap();

    let rules = ClassRule::default_rule_set(default_palette()).unwrap();
    let writer = PatchWriter::new(&out_images, &out_masks, PatchNaming::Labeled).unwrap();
    let processor = DatasetProcessor::new(PatchExtractor::new(128).unwrap(), rules, writer, "jpg", "Oil").unwrap();

    let summary = processor.process(&images, &masks, &ProgressTracker::hidden()).unwrap();

    std::assert_eq!(summary.per_label.get("oil"), Some(&1));
    std::assert_eq!(summary.per_label.get("water"), Some(&1));
    std::assert!(out_images.join("Oil_5_oil_0_0.png").is_file());
    std::assert!(out_images.join("Oil_5_water_128_0.png").is_file());
    std::assert!(!out_images.join("Oil_5_water_0_0.png").exists());
}
