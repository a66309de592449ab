//! Output formatting module.
//!
//! Console reporting for scan results. Result files are handled by
//! [`crate::storage`].

mod plain;

pub use plain::{
    print_error, print_info, print_results, print_saved, print_scan_header, print_success,
    print_warning, scan_progress, write_listing, write_summary,
};
