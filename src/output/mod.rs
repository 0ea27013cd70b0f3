//! Console and JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `streaming` - Streaming tree formatter for `fstree`
//! - `size_report` - Size column output for `fsdu`
//! - `listing` - Attribute columns for `fsls`
//! - `json` - JSON output shared by all tools

mod config;
mod json;
mod listing;
mod size_report;
mod streaming;

pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use listing::ListingFormatter;
pub use size_report::ReportFormatter;
pub use streaming::StreamingFormatter;

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use super::*;
    use crate::test_utils::TestTree;
    use crate::tree::{Glyphs, TreeBuilder, TreeOptions, TreeWalker};

    fn sample_tree() -> TestTree {
        let tree = TestTree::new();
        tree.add_file("src/lib.rs", 512);
        tree.add_file("src/config.rs", 256);
        tree.add_file("app.rs", 2048);
        tree.add_file("simple.txt", 42);
        tree
    }

    fn walker() -> TreeWalker {
        TreeWalker::new(TreeOptions {
            max_depth: 2,
            show_size: true,
            ..Default::default()
        })
        .unwrap()
        .with_glyphs(Glyphs::ASCII)
    }

    #[test]
    fn test_console_and_json_contain_same_files() {
        let tree = sample_tree();

        let mut console = StreamingFormatter::with_writer(NoColor::new(Vec::new()));
        let summary = walker().walk(tree.path(), &mut console).unwrap();
        console.finish(&summary).unwrap();
        let console_output = String::from_utf8(console.into_inner().into_inner()).unwrap();

        let mut builder = TreeBuilder::new(tree.path());
        walker().walk(tree.path(), &mut builder).unwrap();
        let mut json = Vec::new();
        write_json(&mut json, &builder.finish()).unwrap();
        let json_output = String::from_utf8(json).unwrap();

        for name in ["simple.txt", "app.rs", "lib.rs", "config.rs", "src"] {
            assert!(console_output.contains(name), "console missing {}", name);
            assert!(json_output.contains(name), "JSON missing {}", name);
        }
        assert!(console_output.contains("1 directories, 4 files"));
    }

    #[test]
    fn test_json_tree_structure() {
        let tree = sample_tree();
        let mut builder = TreeBuilder::new(tree.path());
        walker().walk(tree.path(), &mut builder).unwrap();

        let mut out = Vec::new();
        write_json(&mut out, &builder.finish()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed["type"], "dir");
        let children = parsed["children"].as_array().unwrap();
        let names: Vec<_> = children.iter().map(|c| c["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["src", "app.rs", "simple.txt"]);
        assert_eq!(children[0]["children"].as_array().unwrap().len(), 2);
        assert_eq!(children[1]["size_bytes"], 2048);
    }
}
