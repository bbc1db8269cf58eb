mod test_utils;
mod rule_tests;
mod patch_extractor_tests;
