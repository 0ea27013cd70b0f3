//! Configuration types for tree walking

/// Default number of levels to descend.
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// Options controlling which entries a tree walk visits.
#[derive(Debug, Clone)]
pub struct TreeOptions {
    pub show_hidden: bool,
    pub dirs_only: bool,
    /// Number of levels to descend; 0 produces no entries at all.
    pub max_depth: usize,
    /// Glob patterns matched against entry names.
    pub ignore_patterns: Vec<String>,
    /// Attach file sizes to rendered lines.
    pub show_size: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            show_hidden: false,
            dirs_only: false,
            max_depth: DEFAULT_MAX_DEPTH,
            ignore_patterns: Vec::new(),
            show_size: false,
        }
    }
}
