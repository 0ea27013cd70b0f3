//! Byte counts: recursive aggregation and human-readable formatting
//!
//! - `aggregate` walks a subtree and sums the sizes of everything in it
//! - `format` turns a byte count into a short string with a binary unit

mod aggregate;
mod format;

pub use aggregate::{SizeEntry, SizeReport, SizeReportOptions, SortMode, compute_size};
pub use format::{SizeFormatter, Unit, format_size};
