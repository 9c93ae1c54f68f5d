mod end_to_end_tests;
mod feed_tests;
mod serialize_tests;
