//! `OutputReporter<W>`: bridges `Reporter` to a `RowWriter`.

use eco_core::Tick;
use eco_sim::{EcoSnapshot, Reporter};
use tracing::warn;

use crate::writer::RowWriter;
use crate::{MonthRow, OutputError, OutputResult};

/// A [`Reporter`] that writes one row per month to any [`RowWriter`]
/// backend.
///
/// Errors from the writer are stored internally because `Reporter` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct OutputReporter<W: RowWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: RowWriter> OutputReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Rows written successfully.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                // Keep only the first error.
                if self.last_error.is_none() {
                    warn!(error = %e, "output write failed");
                    self.last_error = Some(e);
                }
                false
            }
        }
    }
}

impl<W: RowWriter> Reporter for OutputReporter<W> {
    fn on_tick(&mut self, tick: Tick, snapshot: &EcoSnapshot) {
        let result = self.writer.write_row(&MonthRow::new(tick, snapshot));
        if self.store_err(result) {
            self.rows += 1;
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _snapshot: &EcoSnapshot) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
