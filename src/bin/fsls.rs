//! fsls - list a single directory, `ls -l` style

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::*;

use fsinspect::cli::{ColorMode, LogArgs, resolve_target, should_use_color};
use fsinspect::{
    ListOptions, ListingFormatter, OutputConfig, Result, list_directory, logging, print_json,
};

#[derive(Parser, Debug)]
#[command(name = "fsls")]
#[command(about = "List directory contents with permissions, owner, size and time")]
#[command(version)]
struct Args {
    /// Directory to list (defaults to the current directory)
    path: Option<PathBuf>,

    /// Include entries starting with '.'
    #[arg(short, long)]
    all: bool,

    /// Names only
    #[arg(short = 's', long = "simple")]
    simple: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn run(args: Args) -> Result<()> {
    let root = resolve_target(args.path)?;
    let options = ListOptions {
        show_hidden: args.all,
        simple: args.simple,
    };
    let entries = list_directory(&root, &options)?;

    if args.json {
        return print_json(&entries);
    }

    let config = OutputConfig {
        use_color: !args.simple && should_use_color(args.color),
    };
    let mut formatter = ListingFormatter::new(&config);
    if args.simple {
        formatter.write_simple(&entries)?;
    } else {
        formatter.write_long(&entries)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = logging::init(&args.log, module_path!()) {
        eprintln!("fsls: {}", e);
    }
    if let Err(e) = run(args) {
        debug!("{:?}", e);
        eprintln!("fsls: {}", e);
        process::exit(1);
    }
}
