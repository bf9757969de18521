mod line_extractor_tests;
mod test_utils;
