//! `du`-style size report output

use std::io::{self, Write};

use crate::size::{SizeEntry, SizeFormatter, SizeReport};

/// Width of the right-aligned size column (six digits plus a two-letter unit).
const SIZE_COLUMN: usize = 8;

/// Writes one `size path` line per entry, then the root total.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    sizes: SizeFormatter,
    raw_bytes: bool,
}

impl ReportFormatter {
    pub fn new(sizes: SizeFormatter) -> Self {
        Self {
            sizes,
            raw_bytes: false,
        }
    }

    /// Print exact byte counts instead of scaled units.
    pub fn raw_bytes(mut self, raw: bool) -> Self {
        self.raw_bytes = raw;
        self
    }

    pub fn format_entry(&self, entry: &SizeEntry) -> String {
        if self.raw_bytes {
            format!("{}\t{}", entry.size, entry.path.display())
        } else {
            format!(
                "{:>width$} {}",
                self.sizes.format(entry.size),
                entry.path.display(),
                width = SIZE_COLUMN
            )
        }
    }

    pub fn write<W: Write>(&self, out: &mut W, report: &SizeReport) -> io::Result<()> {
        for entry in &report.entries {
            writeln!(out, "{}", self.format_entry(entry))?;
        }
        writeln!(out, "{}", self.format_entry(&report.total_entry()))?;
        out.flush()
    }
}
