//! Error types for csvcount

use thiserror::Error;

/// Errors raised at the boundary of the counting operations.
///
/// The scanner itself never fails: any byte sequence yields a count. Errors only
/// come from resolving where the CSV data lives or from rejecting caller
/// arguments that cannot be honored.
#[derive(Error, Debug)]
pub enum CsvCountError {
    /// Caller supplied a missing, conflicting or out-of-range argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// CSV source could not be opened or read
    #[error("Read error: {0}")]
    ReadError(String),
}

/// Result type alias for csvcount operations
pub type Result<T> = std::result::Result<T, CsvCountError>;
