//! Per-level "last sibling" bookkeeping used to draw branch connectors

/// Characters used to draw the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub tee: &'static str,
    pub corner: &'static str,
    pub vertical: &'static str,
    pub blank: &'static str,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        tee: "├── ",
        corner: "└── ",
        vertical: "│   ",
        blank: "    ",
    };

    pub const ASCII: Glyphs = Glyphs {
        tee: "|-- ",
        corner: "`-- ",
        vertical: "|   ",
        blank: "    ",
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::UNICODE
    }
}

/// One flag per depth level: `true` when the entry currently being rendered
/// at that level is the last of its siblings.
///
/// The length is fixed at construction. A level only ever reads the flags of
/// its ancestors, so deeper levels can be overwritten freely as the walk moves
/// on to the next sibling.
#[derive(Debug, Clone)]
pub struct TraversalState {
    last: Vec<bool>,
}

impl TraversalState {
    pub fn new(max_depth: usize) -> Self {
        Self {
            last: vec![false; max_depth],
        }
    }

    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }

    pub fn set(&mut self, level: usize, is_last: bool) {
        self.last[level] = is_last;
    }

    pub fn is_last(&self, level: usize) -> bool {
        self.last[level]
    }

    /// Prefix for an entry at `level`: a blank or vertical cell for every
    /// ancestor level, then the entry's own connector.
    pub fn render_prefix(&self, level: usize, glyphs: &Glyphs) -> String {
        let mut prefix = String::new();
        for &ancestor_last in &self.last[..level] {
            prefix.push_str(if ancestor_last {
                glyphs.blank
            } else {
                glyphs.vertical
            });
        }
        prefix.push_str(if self.is_last(level) {
            glyphs.corner
        } else {
            glyphs.tee
        });
        prefix
    }
}
