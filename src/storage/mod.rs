//! Scan result persistence.
//!
//! Writes each completed scan to its own timestamped text file.

mod result_file;

pub use result_file::{format_line, ResultFileWriter};
