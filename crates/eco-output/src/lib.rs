//! `eco-output`: reporters that write the monthly ecosystem state.
//!
//! | Writer            | Output                                           |
//! |-------------------|--------------------------------------------------|
//! | [`CsvWriter`]     | One CSV record per month, with a header row      |
//! | [`ConsoleWriter`] | One comma-separated progress line per month      |
//!
//! Both implement [`RowWriter`] and are driven by [`OutputReporter`], which
//! implements `eco_sim::Reporter`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use eco_output::{CsvWriter, OutputReporter};
//!
//! let mut csv = OutputReporter::new(CsvWriter::create(Path::new("eco.csv"))?);
//! sim.run(&mut csv)?;
//! if let Some(e) = csv.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod reporter;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use console::ConsoleWriter;
pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use reporter::OutputReporter;
pub use row::MonthRow;
pub use writer::RowWriter;
