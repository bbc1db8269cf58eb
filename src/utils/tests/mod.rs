mod file_utils_tests;
