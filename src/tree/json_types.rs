//! JSON serialization types for tree output

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::size::format_size;

use super::walker::{RenderedLine, TreeSink};

/// A walked tree held in memory for JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        #[serde(skip_serializing_if = "Option::is_none")]
        size_bytes: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size_human: Option<String>,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    fn dir(name: String, path: PathBuf) -> Self {
        TreeNode::Dir {
            name,
            path,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Dir { children, .. } => children,
            TreeNode::File { .. } => &[],
        }
    }

    fn push_child(&mut self, child: TreeNode) {
        if let TreeNode::Dir { children, .. } = self {
            children.push(child);
        }
    }
}

/// Sink that reassembles the depth-first line stream into nested nodes.
///
/// `stack[0]` is the root; `stack[d + 1]` is the open directory at depth `d`.
pub struct TreeBuilder {
    stack: Vec<TreeNode>,
}

impl TreeBuilder {
    pub fn new(root: &Path) -> Self {
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());
        Self {
            stack: vec![TreeNode::dir(name, root.to_path_buf())],
        }
    }

    /// Close every directory deeper than `depth`.
    fn close_to(&mut self, depth: usize) {
        while self.stack.len() > depth + 1 {
            if let Some(done) = self.stack.pop() {
                if let Some(parent) = self.stack.last_mut() {
                    parent.push_child(done);
                }
            }
        }
    }

    pub fn finish(mut self) -> TreeNode {
        self.close_to(0);
        self.stack
            .pop()
            .unwrap_or_else(|| TreeNode::dir(".".to_string(), PathBuf::from(".")))
    }
}

impl TreeSink for TreeBuilder {
    fn line(&mut self, line: &RenderedLine) -> io::Result<()> {
        self.close_to(line.depth);
        let name = line
            .path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        if line.is_dir {
            self.stack.push(TreeNode::dir(name, line.path.clone()));
        } else if let Some(parent) = self.stack.last_mut() {
            parent.push_child(TreeNode::File {
                name,
                path: line.path.clone(),
                size_bytes: line.size,
                size_human: line.size.map(format_size),
            });
        }
        Ok(())
    }
}
