//! # Palletizer CLI
//!
//! Support code for the `palletizer` binary: reading requests from JSON files
//! and the command line, printing result tables and writing the JSON export.

mod export;
mod input;
mod report;

pub use export::{ExportPayload, DEFAULT_EXPORT_FILE};
pub use input::{load_multi_input, load_single_input, parse_dimensions};
pub use report::{
    format_int, print_multi_report, print_single_report, write_multi_report, write_single_report,
};
