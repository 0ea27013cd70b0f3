//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;

/// Write any serializable value as pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized, W: Write>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Print a value as pretty-printed JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    write_json(&mut stdout.lock(), value)
}
