//! Input loading error types.

use std::path::PathBuf;

use crate::domain::{InvalidTicket, InvalidTravelDay, MoneyError};

/// Errors raised while reading a ticket catalog or travel calendar.
///
/// Line numbers are 1-based and count comment and blank lines.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrong number of whitespace-separated fields
    #[error("line {line}: expected {expected}, found {found} fields")]
    FieldCount {
        line: usize,
        expected: &'static str,
        found: usize,
    },

    /// A field that should be an integer is not
    #[error("line {line}: {field} must be a whole number, got {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Bad date token
    #[error("line {line}: {source}")]
    InvalidDate {
        line: usize,
        #[source]
        source: InvalidTravelDay,
    },

    /// Bad ticket price
    #[error("line {line}: {source}")]
    InvalidCost {
        line: usize,
        #[source]
        source: MoneyError,
    },

    /// Ticket terms that cannot be used
    #[error("line {line}: {source}")]
    InvalidTicket {
        line: usize,
        #[source]
        source: InvalidTicket,
    },

    /// A day range with a zero or negative length
    #[error("line {line}: day count must be positive, got {count}")]
    NonPositiveCount { line: usize, count: i64 },

    /// A day range running past the end of the calendar
    #[error("line {line}: day range runs past the end of the calendar")]
    RangeOverflow { line: usize },
}
