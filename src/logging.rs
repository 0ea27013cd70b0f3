//! Stderr logging setup for the binaries

use log::SetLoggerError;

use crate::cli::LogArgs;

/// Verbosity level when neither `-v` nor `-q` is given (warnings).
const DEFAULT_VERBOSITY: usize = 1;

/// Map the flags to a stderrlog verbosity: 0 is errors only, each step up
/// adds warn, info, debug and trace.
pub fn verbosity(args: &LogArgs) -> usize {
    if args.verbose > 0 {
        DEFAULT_VERBOSITY + args.verbose as usize
    } else if args.quiet {
        DEFAULT_VERBOSITY - 1
    } else {
        DEFAULT_VERBOSITY
    }
}

/// Install the logger for `bin` and for this library.
pub fn init(args: &LogArgs, bin: &str) -> Result<(), SetLoggerError> {
    stderrlog::new()
        .module(bin)
        .module(env!("CARGO_CRATE_NAME"))
        .verbosity(verbosity(args))
        .init()
}
