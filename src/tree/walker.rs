//! TreeWalker - depth-bounded recursive listing that streams rendered lines

use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::*;

use crate::entry::{DirectoryEntry, read_entries, sort_entries};
use crate::error::{Error, Result};

use super::config::TreeOptions;
use super::state::{Glyphs, TraversalState};

/// A single line of tree output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Ancestor cells followed by this entry's connector.
    pub prefix: String,
    /// Entry name, with ` -> target` appended for symlinks.
    pub label: String,
    /// Full path of the entry.
    pub path: PathBuf,
    /// Set for directories, which are descended into next.
    pub child_path: Option<PathBuf>,
    /// Nesting level, 0 for direct children of the root.
    pub depth: usize,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub is_last: bool,
    pub size: Option<u64>,
}

/// Consumer of rendered lines, fed in traversal order.
pub trait TreeSink {
    fn line(&mut self, line: &RenderedLine) -> io::Result<()>;
}

/// Number of directories and files emitted by a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
}

impl WalkSummary {
    pub fn report(&self) -> String {
        format!("{} directories, {} files", self.directories, self.files)
    }
}

/// Walks a directory tree down to a fixed depth.
pub struct TreeWalker {
    options: TreeOptions,
    ignore: Vec<Pattern>,
    glyphs: Glyphs,
}

impl TreeWalker {
    /// Fails with [`Error::MalformedOptions`] if an ignore pattern is not a
    /// valid glob.
    pub fn new(options: TreeOptions) -> Result<Self> {
        let ignore = options
            .ignore_patterns
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .map_err(|e| Error::MalformedOptions(format!("invalid pattern '{}': {}", p, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            options,
            ignore,
            glyphs: Glyphs::default(),
        })
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Walk `root`, handing each line to `sink` as soon as it is rendered.
    ///
    /// An unreadable directory anywhere below the root aborts the walk; lines
    /// already handed to the sink are not withdrawn.
    pub fn walk<S: TreeSink + ?Sized>(&self, root: &Path, sink: &mut S) -> Result<WalkSummary> {
        let max_depth = self.options.max_depth;
        let mut state = TraversalState::new(max_depth);
        let mut summary = WalkSummary::default();
        self.walk_level(root, max_depth, &mut state, sink, &mut summary)?;
        info!("{}: {}", root.display(), summary.report());
        Ok(summary)
    }

    fn walk_level<S: TreeSink + ?Sized>(
        &self,
        path: &Path,
        remaining_depth: usize,
        state: &mut TraversalState,
        sink: &mut S,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        if remaining_depth == 0 {
            return Ok(());
        }
        let level = self.options.max_depth - remaining_depth;

        let mut entries: Vec<DirectoryEntry> = read_entries(path)?
            .into_iter()
            .filter(|entry| self.is_visible(entry))
            .collect();
        sort_entries(&mut entries);

        let total = entries.len();
        for (i, mut entry) in entries.into_iter().enumerate() {
            let is_last = i == total - 1;
            state.set(level, is_last);

            let size = if self.options.show_size && !entry.is_dir() {
                Some(entry.size()?)
            } else {
                None
            };
            let line = RenderedLine {
                prefix: state.render_prefix(level, &self.glyphs),
                label: label_for(&entry),
                path: entry.path().to_path_buf(),
                child_path: entry.is_dir().then(|| entry.path().to_path_buf()),
                depth: level,
                is_dir: entry.is_dir(),
                is_symlink: entry.is_symlink(),
                is_last,
                size,
            };
            sink.line(&line)?;

            if let Some(child) = &line.child_path {
                summary.directories += 1;
                self.walk_level(child, remaining_depth - 1, state, sink, summary)?;
            } else {
                summary.files += 1;
            }
        }
        Ok(())
    }

    fn is_visible(&self, entry: &DirectoryEntry) -> bool {
        if !self.options.show_hidden && entry.is_hidden() {
            return false;
        }
        if self.options.dirs_only && !entry.is_dir() {
            return false;
        }
        !self.ignore.iter().any(|p| p.matches(entry.name()))
    }
}

fn label_for(entry: &DirectoryEntry) -> String {
    match entry.link_target() {
        Some(target) => format!("{} -> {}", entry.name(), target.display()),
        None => entry.name().to_string(),
    }
}

/// Sink that keeps `prefix + label` strings, for tests and buffered output.
#[derive(Debug, Default)]
pub struct LineCollector {
    pub lines: Vec<String>,
}

impl LineCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeSink for LineCollector {
    fn line(&mut self, line: &RenderedLine) -> io::Result<()> {
        self.lines.push(format!("{}{}", line.prefix, line.label));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn walk_lines(root: &Path, options: TreeOptions) -> Vec<String> {
        let walker = TreeWalker::new(options).unwrap().with_glyphs(Glyphs::ASCII);
        let mut sink = LineCollector::new();
        walker.walk(root, &mut sink).unwrap();
        sink.lines
    }

    fn depth(max_depth: usize) -> TreeOptions {
        TreeOptions {
            max_depth,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_depth_produces_nothing() {
        let tree = TestTree::new();
        tree.add_file("a.txt", 1);
        tree.add_file("d/b.txt", 1);
        assert!(walk_lines(tree.path(), depth(0)).is_empty());
    }

    #[test]
    fn test_two_directories_two_levels() {
        let tree = TestTree::new();
        tree.add_file("Y/y.txt", 1);
        tree.add_file("X/x.txt", 1);

        let lines = walk_lines(tree.path(), depth(2));
        assert_eq!(
            lines,
            ["|-- X", "|   `-- x.txt", "`-- Y", "    `-- y.txt"]
        );
    }

    #[test]
    fn test_default_depth_is_one_level() {
        let tree = TestTree::new();
        tree.add_file("dir/nested.txt", 1);
        tree.add_file("top.txt", 1);

        let lines = walk_lines(tree.path(), TreeOptions::default());
        assert_eq!(lines, ["|-- dir", "`-- top.txt"]);
    }

    #[test]
    fn test_depth_bound() {
        let tree = TestTree::new();
        tree.add_file("a/b/c/d/deep.txt", 1);

        let walker = TreeWalker::new(depth(3)).unwrap();
        let mut lines = Vec::new();
        struct Depths<'a>(&'a mut Vec<usize>);
        impl TreeSink for Depths<'_> {
            fn line(&mut self, line: &RenderedLine) -> io::Result<()> {
                self.0.push(line.depth);
                Ok(())
            }
        }
        walker.walk(tree.path(), &mut Depths(&mut lines)).unwrap();
        assert_eq!(lines, [0, 1, 2]);
    }

    #[test]
    fn test_hidden_entries() {
        let tree = TestTree::new();
        tree.add_file(".secret", 1);
        tree.add_file("visible", 1);

        assert_eq!(walk_lines(tree.path(), depth(1)), ["`-- visible"]);

        let all = TreeOptions {
            show_hidden: true,
            ..depth(1)
        };
        assert_eq!(walk_lines(tree.path(), all), ["|-- .secret", "`-- visible"]);
    }

    #[test]
    fn test_dirs_only() {
        let tree = TestTree::new();
        tree.add_file("file.txt", 1);
        tree.add_file("sub/inner.txt", 1);
        tree.add_dir("sub/leaf");

        let options = TreeOptions {
            dirs_only: true,
            ..depth(2)
        };
        assert_eq!(walk_lines(tree.path(), options), ["`-- sub", "    `-- leaf"]);
    }

    #[test]
    fn test_ignore_patterns() {
        let tree = TestTree::new();
        tree.add_file("keep.rs", 1);
        tree.add_file("drop.log", 1);
        tree.add_file("target/out", 1);

        let options = TreeOptions {
            ignore_patterns: vec!["*.log".to_string(), "target".to_string()],
            ..depth(2)
        };
        assert_eq!(walk_lines(tree.path(), options), ["`-- keep.rs"]);
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let options = TreeOptions {
            ignore_patterns: vec!["[".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            TreeWalker::new(options),
            Err(Error::MalformedOptions(_))
        ));
    }

    #[test]
    fn test_last_sibling_continuation() {
        let tree = TestTree::new();
        tree.add_file("a/one", 1);
        tree.add_file("a/two", 1);
        tree.add_file("b/three", 1);
        tree.add_file("z.txt", 1);

        let lines = walk_lines(tree.path(), depth(2));
        assert_eq!(
            lines,
            [
                "|-- a",
                "|   |-- one",
                "|   `-- two",
                "|-- b",
                "|   `-- three",
                "`-- z.txt",
            ]
        );
    }

    #[test]
    fn test_is_last_flags_per_level() {
        let tree = TestTree::new();
        tree.add_file("a/one", 1);
        tree.add_file("a/two", 1);
        tree.add_file("z.txt", 1);

        struct Flags(Vec<(usize, bool)>);
        impl TreeSink for Flags {
            fn line(&mut self, line: &RenderedLine) -> io::Result<()> {
                self.0.push((line.depth, line.is_last));
                Ok(())
            }
        }
        let mut flags = Flags(Vec::new());
        TreeWalker::new(depth(2))
            .unwrap()
            .walk(tree.path(), &mut flags)
            .unwrap();
        assert_eq!(flags.0, [(0, false), (1, false), (1, true), (0, true)]);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinks_are_leaves() {
        let tree = TestTree::new();
        tree.add_file("real/file", 1);
        tree.add_symlink("real", "alias");
        tree.add_symlink("..", "real/up");

        let lines = walk_lines(tree.path(), depth(5));
        assert_eq!(
            lines,
            [
                "|-- real",
                "|   |-- file",
                "|   `-- up -> ..",
                "`-- alias -> real",
            ]
        );
    }

    #[test]
    fn test_sizes_attached_to_files() {
        let tree = TestTree::new();
        tree.add_file("dir/x", 10);
        tree.add_file("f", 2048);

        let walker = TreeWalker::new(TreeOptions {
            show_size: true,
            ..depth(1)
        })
        .unwrap();
        struct Sizes(Vec<Option<u64>>);
        impl TreeSink for Sizes {
            fn line(&mut self, line: &RenderedLine) -> io::Result<()> {
                self.0.push(line.size);
                Ok(())
            }
        }
        let mut sink = Sizes(Vec::new());
        walker.walk(tree.path(), &mut sink).unwrap();
        assert_eq!(sink.0, [None, Some(2048)]);
    }

    #[test]
    fn test_summary_counts() {
        let tree = TestTree::new();
        tree.add_file("a/1", 1);
        tree.add_file("a/2", 1);
        tree.add_file("b", 1);

        let walker = TreeWalker::new(depth(2)).unwrap();
        let summary = walker.walk(tree.path(), &mut LineCollector::new()).unwrap();
        assert_eq!(
            summary,
            WalkSummary {
                directories: 1,
                files: 3
            }
        );
        assert_eq!(summary.report(), "1 directories, 3 files");
    }

    #[test]
    fn test_missing_root_is_access_error() {
        let tree = TestTree::new();
        let walker = TreeWalker::new(depth(1)).unwrap();
        let result = walker.walk(&tree.path().join("gone"), &mut LineCollector::new());
        assert!(matches!(result, Err(Error::Access { .. })));
    }
}
