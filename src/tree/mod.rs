//! Directory tree walking logic
//!
//! `TreeWalker` descends a fixed number of levels and streams one
//! `RenderedLine` per visible entry to a `TreeSink`. Sinks decide what to do
//! with the lines: print them (see `output`), collect them, or rebuild a
//! nested `TreeNode` for JSON.

mod config;
mod json_types;
mod state;
mod walker;

pub use config::{DEFAULT_MAX_DEPTH, TreeOptions};
pub use json_types::{TreeBuilder, TreeNode};
pub use state::{Glyphs, TraversalState};
pub use walker::{LineCollector, RenderedLine, TreeSink, TreeWalker, WalkSummary};
