//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `EcoError` as one
//! variant via `From`, so configuration problems surface unchanged.

use thiserror::Error;

use crate::Calendar;

/// The top-level error type for `eco-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EcoError {
    #[error("month {0} is out of range (expected 0..=11)")]
    InvalidMonth(u8),

    #[error("terminal date {terminal} is before start date {start}")]
    TerminalBeforeStart { start: Calendar, terminal: Calendar },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `eco-*` crates.
pub type EcoResult<T> = Result<T, EcoError>;
