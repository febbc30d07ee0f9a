mod book_coverage_tests;
mod marketdata_coverage_tests;
