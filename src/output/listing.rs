//! `ls`-style listing output

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::listing::ListEntry;
use crate::size::SizeFormatter;

use super::config::OutputConfig;

const TIME_FORMAT: &str = "%b %e %H:%M";
// Sizes are right-aligned, every other column is left-aligned.
const SIZE_COLUMN: usize = 2;

/// Prints listing rows with aligned attribute columns.
pub struct ListingFormatter<W: WriteColor> {
    out: W,
    sizes: SizeFormatter,
}

impl ListingFormatter<StandardStream> {
    pub fn new(config: &OutputConfig) -> Self {
        Self::with_writer(StandardStream::stdout(config.color_choice()))
    }
}

impl<W: WriteColor> ListingFormatter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            sizes: SizeFormatter::new().with_precision(2),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Names only, one per line, uncolored.
    pub fn write_simple(&mut self, entries: &[ListEntry]) -> io::Result<()> {
        for entry in entries {
            writeln!(self.out, "{}", entry.name)?;
        }
        self.out.flush()
    }

    /// Permissions, owner, size and time columns followed by the name.
    pub fn write_long(&mut self, entries: &[ListEntry]) -> io::Result<()> {
        let rows: Vec<[String; 4]> = entries
            .iter()
            .map(|e| {
                [
                    e.permissions.clone().unwrap_or_default(),
                    e.owner.clone().unwrap_or_default(),
                    e.size
                        .map(|s| self.sizes.format_compact(s))
                        .unwrap_or_default(),
                    e.modified
                        .map(|t| t.format(TIME_FORMAT).to_string())
                        .unwrap_or_default(),
                ]
            })
            .collect();

        let mut widths = [0usize; 4];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for (entry, row) in entries.iter().zip(&rows) {
            for (column, cell) in row.iter().enumerate() {
                let width = widths[column];
                if width == 0 {
                    continue;
                }
                if column == SIZE_COLUMN {
                    write!(self.out, "{:>width$} ", cell)?;
                } else {
                    write!(self.out, "{:<width$} ", cell)?;
                }
            }
            self.write_name(entry)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn write_name(&mut self, entry: &ListEntry) -> io::Result<()> {
        let mut name_spec = ColorSpec::new();
        if entry.is_symlink {
            name_spec.set_fg(Some(Color::Cyan)).set_bold(entry.is_dir);
        } else if entry.is_dir {
            name_spec.set_fg(Some(Color::Blue)).set_bold(true);
        } else {
            name_spec.set_fg(Some(Color::Magenta));
        }
        self.out.set_color(&name_spec)?;
        write!(self.out, "{}", entry.name)?;
        self.out.reset()?;

        if let Some(target) = &entry.link_target {
            write!(self.out, " -> ")?;
            let mut target_spec = ColorSpec::new();
            if entry.is_dir {
                target_spec.set_fg(Some(Color::Blue)).set_bold(true);
            } else {
                target_spec.set_fg(Some(Color::Magenta));
            }
            self.out.set_color(&target_spec)?;
            write!(self.out, "{}", target.display())?;
            self.out.reset()?;
        }
        Ok(())
    }
}
