//! Tests for file helpers

extern crate std;

use std::path::Path;

use crate::utils::file_utils::{extract_identifier, file_stem, has_extension, mask_file_name};

#[test]
fn test_extract_identifier() {
    std::assert_eq!(extract_identifier("Oil (263).jpg"), Some("263"));
    std::assert_eq!(extract_identifier("Oil ( 7 ) copy (2).jpg"), Some("7"));
    std::assert_eq!(extract_identifier("Oil 263.jpg"), None);
    std::assert_eq!(extract_identifier("Oil ().jpg"), None);
}

#[test]
fn test_mask_file_name() {
    std::assert_eq!(mask_file_name("Oil", "263"), "Oil (263).png");
}

#[test]
fn test_has_extension() {
    std::assert!(has_extension(Path::new("a/Oil (1).JPG"), "jpg"));
    std::assert!(has_extension(Path::new("a/Oil (1).jpg"), ".jpg"));
    std::assert!(!has_extension(Path::new("a/Oil (1).png"), "jpg"));
    std::assert!(!has_extension(Path::new("a/noext"), "jpg"));
}

#[test]
fn test_file_stem() {
    std::assert_eq!(file_stem(Path::new("frames/clip_01.jpg")), "clip_01");
}
