//! Argument pieces shared by the binaries

use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{Error, Result};
use crate::tree::Glyphs;

/// Verbosity flags, flattened into each binary's argument struct.
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
pub fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Characters used to draw tree branches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Charset {
    /// Box-drawing characters
    #[default]
    Unicode,
    /// Plain ASCII (`|--`, `` `-- ``)
    Ascii,
}

impl Charset {
    pub fn glyphs(self) -> Glyphs {
        match self {
            Charset::Unicode => Glyphs::UNICODE,
            Charset::Ascii => Glyphs::ASCII,
        }
    }
}

/// Value parser for `-L`: a non-negative integer.
pub fn parse_depth(s: &str) -> Result<usize> {
    s.trim().parse::<usize>().map_err(|_| {
        Error::MalformedOptions(format!(
            "invalid depth '{}': expected a non-negative integer",
            s
        ))
    })
}

/// The path operand, or the current directory when none was given.
///
/// Fails with [`Error::NotFound`] when the path does not exist. A dangling
/// symlink counts as existing.
pub fn resolve_target(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => env::current_dir()?,
    };
    if path.symlink_metadata().is_err() {
        return Err(Error::NotFound(path));
    }
    Ok(path)
}
