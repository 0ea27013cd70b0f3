//! fscat - concatenate files to standard output

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::*;

use fsinspect::cli::LogArgs;
use fsinspect::{Result, concatenate, logging};

#[derive(Parser, Debug)]
#[command(name = "fscat")]
#[command(about = "Print files one after another")]
#[command(version)]
struct Args {
    /// Files to print, in order
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    #[command(flatten)]
    log: LogArgs,
}

fn run(args: Args) -> Result<()> {
    let written = concatenate(&args.files, &mut io::stdout().lock())?;
    info!("{} bytes from {} files", written, args.files.len());
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = logging::init(&args.log, module_path!()) {
        eprintln!("fscat: {}", e);
    }
    if let Err(e) = run(args) {
        debug!("{:?}", e);
        eprintln!("fscat: {}", e);
        process::exit(1);
    }
}
