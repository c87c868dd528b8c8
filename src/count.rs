//! Row and column counting
//!
//! Two layers are provided:
//!
//! - [`row_count`], [`column_count`] and [`scan`] work on in-memory text
//!   through [`ScanOptions`]. They are total: every input produces a count.
//! - [`RowCount`] and [`ColumnCount`] are builders that also accept a file
//!   path (plain or compressed) and report source problems as errors.
//!
//! Both layers share the same scanner, so for the same document the row count
//! and column count always agree with each other.

use crate::csv::CsvScanner;
use crate::error::Result;
use crate::source::Source;
use crate::types::{default_include_header_row, Dialect, ScanOptions, ScanResult};
use log::debug;
use std::path::PathBuf;

/// Scan a document once and return both statistics
pub fn scan(options: &ScanOptions<'_>) -> ScanResult {
    CsvScanner::with_dialect(options.dialect()).scan(options.file_data().as_bytes())
}

/// Returns a count of the logical rows
///
/// Record-terminating line breaks outside quotes are counted, plus one for a
/// final non-empty record without a trailing line break. With
/// `include_header_row(false)` the first record is excluded; the result never
/// goes below zero.
///
/// # Examples
///
/// ```
/// use csvcount::{row_count, ScanOptions};
///
/// let data = "fruit,price\napple,2.50\nbanana,3.00\nstrawberry,1.50";
///
/// assert_eq!(row_count(&ScanOptions::new(data)), 4);
/// assert_eq!(row_count(&ScanOptions::new(data).include_header_row(false)), 3);
/// ```
pub fn row_count(options: &ScanOptions<'_>) -> usize {
    scan(options).row_count(options.includes_header_row())
}

/// Returns a count of the fields in the first logical record
///
/// The header policy does not apply: the first record defines the width
/// whether or not it is counted as a row. Scanning stops at the end of that
/// record.
///
/// # Examples
///
/// ```
/// use csvcount::{column_count, ScanOptions};
///
/// assert_eq!(column_count(&ScanOptions::new("a,\"b,c\",d\n1,2,3")), 3);
/// assert_eq!(column_count(&ScanOptions::new("")), 0);
/// ```
pub fn column_count(options: &ScanOptions<'_>) -> usize {
    CsvScanner::with_dialect(options.dialect()).first_record_width(options.file_data().as_bytes())
}

/// Returns a count of the total number of rows.
///
/// The builder counterpart of [`row_count`] that can also read from a file.
///
/// # Examples
///
/// ```
/// use csvcount::{Result, RowCount};
///
/// fn main() -> Result<()> {
///     let data = "\
/// fruits,price
/// apple,2.50
/// banana,3.00
/// strawberry,1.50
/// ";
///     let output = RowCount::new()
///         .file_data(data)
///         .include_header_row(false)
///         .execute()?;
///     assert_eq!(output, 3);
///     Ok(())
/// }
/// ```
///
/// ## Notes
///
/// - `file_path` and `file_data` are alternatives; exactly one must be given.
/// - `include_header_row` defaults to `true`.
#[derive(Debug, Clone)]
pub struct RowCount {
    file_path: Option<PathBuf>,
    file_data: Option<String>,
    include_header_row: bool,
    dialect: Dialect,
}

impl RowCount {
    /// Returns a `RowCount` builder with no source set
    pub fn new() -> Self {
        RowCount {
            file_path: None,
            file_data: None,
            include_header_row: default_include_header_row(),
            dialect: Dialect::default(),
        }
    }

    /// CSV file path (alternative to `file_data`)
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// CSV file data (alternative to `file_path`)
    pub fn file_data(mut self, data: impl Into<String>) -> Self {
        self.file_data = Some(data.into());
        self
    }

    /// Specify whether to count the header row (first row). Defaults to true.
    pub fn include_header_row(mut self, include: bool) -> Self {
        self.include_header_row = include;
        self
    }

    /// Set custom delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.dialect.delimiter = delimiter;
        self
    }

    /// Set custom quote character
    pub fn quote_char(mut self, quote_char: u8) -> Self {
        self.dialect.quote_char = quote_char;
        self
    }

    /// Returns the row count.
    pub fn execute(self) -> Result<usize> {
        let source = Source::resolve(self.file_path, self.file_data)?;
        let bytes = source.load()?;
        let result = CsvScanner::with_dialect(self.dialect).scan(&bytes);
        let rows = result.row_count(self.include_header_row);
        debug!(
            "Counted {} rows ({} records, include_header_row={})",
            rows, result.rows, self.include_header_row
        );
        Ok(rows)
    }
}

impl Default for RowCount {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a count of the total number of columns (fields).
///
/// The builder counterpart of [`column_count`] that can also read from a file.
///
/// # Examples
///
/// ```
/// use csvcount::{ColumnCount, Result};
///
/// fn main() -> Result<()> {
///     let data = "fruits,price\napple,2.50\nbanana,3.00\nstrawberry,1.50";
///     let output = ColumnCount::new().file_data(data).execute()?;
///     assert_eq!(output, 2);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColumnCount {
    file_path: Option<PathBuf>,
    file_data: Option<String>,
    dialect: Dialect,
}

impl ColumnCount {
    /// Returns a `ColumnCount` builder with no source set
    pub fn new() -> Self {
        Self::default()
    }

    /// CSV file path (alternative to `file_data`)
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// CSV file data (alternative to `file_path`)
    pub fn file_data(mut self, data: impl Into<String>) -> Self {
        self.file_data = Some(data.into());
        self
    }

    /// Set custom delimiter
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.dialect.delimiter = delimiter;
        self
    }

    /// Set custom quote character
    pub fn quote_char(mut self, quote_char: u8) -> Self {
        self.dialect.quote_char = quote_char;
        self
    }

    /// Returns the column count.
    pub fn execute(self) -> Result<usize> {
        let source = Source::resolve(self.file_path, self.file_data)?;
        let bytes = source.load()?;
        let columns = CsvScanner::with_dialect(self.dialect).first_record_width(&bytes);
        debug!("Counted {} columns", columns);
        Ok(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CsvCountError;

    const FRUITS: &str = "fruit,price\napple,2.50\nbanana,3.00\nstrawberry,1.50";

    #[test]
    fn test_scenarios() {
        let cases = vec![
            ("", true, 0, 0),
            (FRUITS, true, 4, 2),
            (FRUITS, false, 3, 2),
            ("a,\"b,c\",d\n1,2,3", true, 2, 3),
            ("single", true, 1, 1),
            ("a,b\n", true, 1, 2),
        ];
        for (data, include, rows, columns) in cases {
            let options = ScanOptions::new(data).include_header_row(include);
            assert_eq!(row_count(&options), rows, "row_count of {:?}", data);
            assert_eq!(column_count(&options), columns, "column_count of {:?}", data);
        }
    }

    #[test]
    fn test_empty_input_ignores_header_flag() {
        assert_eq!(row_count(&ScanOptions::new("").include_header_row(false)), 0);
        assert_eq!(row_count(&ScanOptions::new("").include_header_row(true)), 0);
    }

    #[test]
    fn test_header_only_excluded_is_zero() {
        let options = ScanOptions::new("h1,h2\n").include_header_row(false);
        assert_eq!(row_count(&options), 0);
        assert_eq!(column_count(&options), 2);
    }

    #[test]
    fn test_quoted_field_spanning_lines() {
        let options = ScanOptions::new("h1,h2\n\"a,b\nc\",d");
        assert_eq!(scan(&options), ScanResult { rows: 2, columns: 2 });
    }

    #[test]
    fn test_semicolon_dialect() {
        let options = ScanOptions::new("a;b;c\n1;\"2;3\";4").delimiter(b';');
        assert_eq!(row_count(&options), 2);
        assert_eq!(column_count(&options), 3);
    }

    #[test]
    fn test_row_count_builder() -> Result<()> {
        assert_eq!(RowCount::new().file_data(FRUITS).execute()?, 4);
        assert_eq!(
            RowCount::new()
                .file_data(FRUITS)
                .include_header_row(false)
                .execute()?,
            3
        );
        Ok(())
    }

    #[test]
    fn test_column_count_builder() -> Result<()> {
        assert_eq!(ColumnCount::new().file_data(FRUITS).execute()?, 2);
        assert_eq!(
            ColumnCount::new().file_data("a|b|c").delimiter(b'|').execute()?,
            3
        );
        Ok(())
    }

    #[test]
    fn test_builder_without_source() {
        assert!(matches!(
            RowCount::new().execute(),
            Err(CsvCountError::InvalidInput(_))
        ));
        assert!(matches!(
            ColumnCount::new().execute(),
            Err(CsvCountError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_builder_with_both_sources() {
        let result = RowCount::new()
            .file_data(FRUITS)
            .file_path("fruits.csv")
            .execute();
        assert!(matches!(result, Err(CsvCountError::InvalidInput(_))));
    }
}
