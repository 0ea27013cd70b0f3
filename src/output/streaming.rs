//! Streaming tree formatter
//!
//! This module provides `StreamingFormatter` which writes each tree line as
//! soon as the walker renders it, for use with `TreeWalker`.

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::size::format_size;
use crate::tree::{RenderedLine, TreeSink, WalkSummary};

use super::config::OutputConfig;

/// Console tree output. Writes to stdout unless built with
/// [`StreamingFormatter::with_writer`].
pub struct StreamingFormatter<W: WriteColor> {
    out: W,
}

impl StreamingFormatter<StandardStream> {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            out: StandardStream::stdout(config.color_choice()),
        }
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Root line printed before the walk.
    pub fn header(&mut self, root: &str) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.out, "{}", root)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Directory and file counts printed after the walk.
    pub fn finish(&mut self, summary: &WalkSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", summary.report())?;
        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: WriteColor> TreeSink for StreamingFormatter<W> {
    fn line(&mut self, line: &RenderedLine) -> io::Result<()> {
        write!(self.out, "{}", line.prefix)?;

        if line.is_dir {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else if line.is_symlink {
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        } else {
            self.out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(self.out, "{}", line.label)?;
        self.out.reset()?;

        if let Some(bytes) = line.size {
            write!(self.out, "  ")?;
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(self.out, "[{}]", format_size(bytes).trim_end())?;
            self.out.reset()?;
        }
        writeln!(self.out)
    }
}
