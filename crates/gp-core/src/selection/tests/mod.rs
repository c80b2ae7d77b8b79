mod fixtures;
mod property_tests;
