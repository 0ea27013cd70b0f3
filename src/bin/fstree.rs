//! fstree - depth-limited directory tree

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::*;

use fsinspect::cli::{Charset, ColorMode, LogArgs, parse_depth, resolve_target, should_use_color};
use fsinspect::tree::DEFAULT_MAX_DEPTH;
use fsinspect::{
    OutputConfig, Result, StreamingFormatter, TreeBuilder, TreeOptions, TreeWalker, logging,
    print_json,
};

#[derive(Parser, Debug)]
#[command(name = "fstree")]
#[command(about = "List the contents of a directory as a tree")]
#[command(version)]
struct Args {
    /// Directory to display (defaults to the current directory)
    path: Option<PathBuf>,

    /// Show hidden files
    #[arg(short, long)]
    all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N", value_parser = parse_depth, default_value_t = DEFAULT_MAX_DEPTH)]
    level: usize,

    /// Ignore entries whose name matches GLOB (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB")]
    ignore: Vec<String>,

    /// Show file sizes
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Characters used to draw branches
    #[arg(long = "charset", value_name = "SET", default_value = "unicode")]
    charset: Charset,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Omit the directory and file counts at the end
    #[arg(long = "noreport")]
    noreport: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn run(args: Args) -> Result<()> {
    let header = args
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string());
    let root = resolve_target(args.path)?;

    let options = TreeOptions {
        show_hidden: args.all,
        dirs_only: args.dirs_only,
        max_depth: args.level,
        ignore_patterns: args.ignore,
        show_size: args.size,
    };
    let walker = TreeWalker::new(options)?.with_glyphs(args.charset.glyphs());

    if args.json {
        let mut builder = TreeBuilder::new(&root);
        walker.walk(&root, &mut builder)?;
        return print_json(&builder.finish());
    }

    let config = OutputConfig {
        use_color: should_use_color(args.color),
    };
    let mut formatter = StreamingFormatter::new(&config);
    formatter.header(&header)?;
    let summary = walker.walk(&root, &mut formatter)?;
    if args.noreport {
        formatter.flush()?;
    } else {
        formatter.finish(&summary)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = logging::init(&args.log, module_path!()) {
        eprintln!("fstree: {}", e);
    }
    if let Err(e) = run(args) {
        debug!("{:?}", e);
        eprintln!("fstree: {}", e);
        process::exit(1);
    }
}
