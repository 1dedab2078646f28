//! Summarise timing and megaflops metrics across a finished sweep

/// Scan job output logs for metric lines
pub mod parse;

/// Mean and standard deviation per thread count, printed as a table
pub mod summary;
