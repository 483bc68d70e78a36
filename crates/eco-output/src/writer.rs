//! The `RowWriter` trait implemented by all backend writers.

use crate::{MonthRow, OutputResult};

/// Trait implemented by the CSV and console writers.
///
/// Errors are stored by [`OutputReporter`][crate::OutputReporter] and
/// retrieved with [`take_error`][crate::OutputReporter::take_error], because
/// reporter callbacks have no return value.
pub trait RowWriter: Send {
    fn write_row(&mut self, row: &MonthRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
