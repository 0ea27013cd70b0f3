//! fsinspect - small `du`, `tree`, `ls` and `cat` style file system tools

pub mod cli;
pub mod concat;
pub mod entry;
pub mod error;
pub mod listing;
pub mod logging;
pub mod output;
pub mod size;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use concat::concatenate;
pub use entry::{DirectoryEntry, read_entries};
pub use error::{Error, Result};
pub use listing::{ListEntry, ListOptions, list_directory};
pub use output::{
    ListingFormatter, OutputConfig, ReportFormatter, StreamingFormatter, print_json, write_json,
};
pub use size::{SizeFormatter, SizeReport, SizeReportOptions, SortMode, compute_size, format_size};
pub use tree::{
    Glyphs, LineCollector, TraversalState, TreeBuilder, TreeNode, TreeOptions, TreeSink,
    TreeWalker, WalkSummary,
};
