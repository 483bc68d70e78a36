//! CSV output backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::RowWriter;
use crate::{MonthRow, OutputResult};

const HEADER: [&str; 9] = [
    "tick", "year", "month", "temperature", "precipitation",
    "grain_height", "deer", "hoppers", "swarm_grazing",
];

/// Writes one CSV record per simulated month.
pub struct CsvWriter<W: Write = File> {
    out:      Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any byte sink and write the header row.
    pub fn from_writer(inner: W) -> OutputResult<Self> {
        let mut out = Writer::from_writer(inner);
        out.write_record(HEADER)?;
        Ok(Self { out, finished: false })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write + Send> RowWriter for CsvWriter<W> {
    fn write_row(&mut self, row: &MonthRow) -> OutputResult<()> {
        self.out.write_record(&[
            row.tick.to_string(),
            row.year.to_string(),
            row.month.to_string(),
            format!("{:.2}", row.temperature),
            format!("{:.2}", row.precipitation),
            format!("{:.2}", row.grain_height),
            row.deer.to_string(),
            row.hoppers.to_string(),
            format!("{:.2}", row.swarm_grazing),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
