//! Human-readable progress lines.
//!
//! Format, one line per month:
//!
//! ```text
//!  1 , 2025 ,  40.68 ,   8.55 ,  15.87 ,  3,  0
//! ```
//!
//! month (one-based), year, temperature, precipitation, grain height, deer,
//! grasshoppers.

use std::io::{self, Stderr, Write};

use crate::writer::RowWriter;
use crate::{MonthRow, OutputResult};

/// Writes comma-separated progress lines to any byte sink (stderr by
/// default).
pub struct ConsoleWriter<W: Write = Stderr> {
    out: W,
}

impl ConsoleWriter<Stderr> {
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> RowWriter for ConsoleWriter<W> {
    fn write_row(&mut self, r: &MonthRow) -> OutputResult<()> {
        writeln!(
            self.out,
            "{:2} , {:2} , {:6.2} , {:6.2} , {:6.2} , {:2}, {:2}",
            r.month, r.year, r.temperature, r.precipitation, r.grain_height, r.deer, r.hoppers,
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
