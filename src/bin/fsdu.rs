//! fsdu - directory sizes, `du` style

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::*;

use fsinspect::cli::{LogArgs, resolve_target};
use fsinspect::{
    ReportFormatter, Result, SizeFormatter, SizeReport, SizeReportOptions, SortMode, logging,
    print_json,
};

#[derive(Parser, Debug)]
#[command(name = "fsdu")]
#[command(about = "Show the size of each subdirectory and the directory total")]
#[command(version)]
struct Args {
    /// Directory to measure (defaults to the current directory)
    path: Option<PathBuf>,

    /// Sort subdirectories by size, largest first
    #[arg(short = 's', long = "sort-size")]
    sort_size: bool,

    /// Print exact byte counts
    #[arg(short = 'b', long = "bytes")]
    bytes: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    #[command(flatten)]
    log: LogArgs,
}

fn run(args: Args) -> Result<()> {
    let root = resolve_target(args.path)?;
    let options = SizeReportOptions {
        sort: if args.sort_size {
            SortMode::Size
        } else {
            SortMode::Name
        },
    };
    let report = SizeReport::build(&root, &options)?;

    if args.json {
        return print_json(&report);
    }
    let formatter = ReportFormatter::new(SizeFormatter::new()).raw_bytes(args.bytes);
    formatter.write(&mut io::stdout().lock(), &report)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = logging::init(&args.log, module_path!()) {
        eprintln!("fsdu: {}", e);
    }
    if let Err(e) = run(args) {
        debug!("{:?}", e);
        eprintln!("fsdu: {}", e);
        process::exit(1);
    }
}
