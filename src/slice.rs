//! Extract a section of records
//!
//! Records are located with the same scanner used for counting, so a quoted
//! field spanning several lines stays one record. Selected records are written
//! back out with minimal quoting and joined by `\n`.

use crate::csv::{CsvEncoder, CsvScanner};
use crate::error::{CsvCountError, Result};
use crate::source::Source;
use crate::types::{default_include_header_row, Dialect, ScanOptions};
use log::debug;
use std::ops::Range;
use std::path::PathBuf;

/// Which records to extract
///
/// - `start`: first record (0-indexed); negative counts from the last record
/// - `end`: record to stop before (exclusive); negative counts from the last record
/// - `length`: number of records from `start` (alternative to `end`)
/// - `index`: a single record; negative counts from the last record
///
/// `index` cannot be combined with the other fields, and `end` cannot be
/// combined with `length`. With nothing set, every record is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub length: Option<usize>,
    pub index: Option<i64>,
}

fn normalize(name: &str, value: i64, total: usize) -> Result<usize> {
    let resolved = if value < 0 {
        total as i64 + value
    } else {
        value
    };
    if resolved < 0 || resolved as usize > total {
        return Err(CsvCountError::InvalidInput(format!(
            "{} value {} is out of range for {} records",
            name, value, total
        )));
    }
    Ok(resolved as usize)
}

impl SliceRange {
    /// Resolve against the number of available records
    pub fn resolve(&self, total: usize) -> Result<Range<usize>> {
        if let Some(index) = self.index {
            if self.start.is_some() || self.end.is_some() || self.length.is_some() {
                return Err(CsvCountError::InvalidInput(
                    "Cannot use index with start, end, or length".to_string(),
                ));
            }
            let at = normalize("index", index, total)?;
            if at == total {
                return Err(CsvCountError::InvalidInput(format!(
                    "index value {} is out of range for {} records",
                    index, total
                )));
            }
            return Ok(at..at + 1);
        }

        let start = match self.start {
            Some(start) => normalize("start", start, total)?,
            None => 0,
        };
        let end = match (self.end, self.length) {
            (Some(_), Some(_)) => {
                return Err(CsvCountError::InvalidInput(
                    "Cannot use end with length".to_string(),
                ))
            }
            (Some(end), None) => normalize("end", end, total)?,
            (None, Some(length)) => {
                let end = start.saturating_add(length);
                if end > total {
                    return Err(CsvCountError::InvalidInput(format!(
                        "length value {} from start {} is out of range for {} records",
                        length, start, total
                    )));
                }
                end
            }
            (None, None) => total,
        };

        if end < start {
            return Err(CsvCountError::InvalidInput(format!(
                "end {} comes before start {}",
                end, start
            )));
        }
        Ok(start..end)
    }
}

fn slice_bytes(
    bytes: &[u8],
    dialect: Dialect,
    include_header_row: bool,
    range: &SliceRange,
) -> Result<String> {
    let scanner = CsvScanner::with_dialect(dialect);
    let total = scanner.scan(bytes).row_count(include_header_row);
    let selected = range.resolve(total)?;
    let skip = usize::from(!include_header_row) + selected.start;

    debug!(
        "Slicing records {}..{} of {} (include_header_row={})",
        selected.start, selected.end, total, include_header_row
    );

    let records: Vec<Vec<String>> = scanner
        .records(bytes)
        .skip(skip)
        .take(selected.len())
        .collect();
    String::from_utf8(CsvEncoder::new(dialect).encode_records(&records)).map_err(|_| {
        CsvCountError::InvalidInput(
            "Sliced records are not valid UTF-8 with this delimiter or quote character"
                .to_string(),
        )
    })
}

/// Returns a slice of records from in-memory CSV data
///
/// The header policy and dialect come from `options`; with
/// `include_header_row(false)` the first record is not part of the indexed
/// records.
///
/// # Examples
///
/// ```
/// use csvcount::{slice, ScanOptions, SliceRange};
///
/// let options = ScanOptions::new("fruit,price\napple,2.50\nbanana,3.00\nstrawberry,1.50")
///     .include_header_row(false);
/// let range = SliceRange { start: Some(1), end: Some(3), ..Default::default() };
///
/// assert_eq!(slice(&options, &range).unwrap(), "banana,3.00\nstrawberry,1.50");
/// ```
pub fn slice(options: &ScanOptions<'_>, range: &SliceRange) -> Result<String> {
    slice_bytes(
        options.file_data().as_bytes(),
        options.dialect(),
        options.includes_header_row(),
        range,
    )
}

/// Returns a slice of records from CSV data or a CSV file.
///
/// # Examples
///
/// ```
/// use csvcount::{Result, Slice};
///
/// fn main() -> Result<()> {
///     let output = Slice::new()
///         .file_data("fruit,price\napple,2.50\nbanana,3.00\nstrawberry,1.50")
///         .start(0)
///         .end(2) // exclusive
///         .include_header_row(false)
///         .execute()?;
///     assert_eq!(output, "apple,2.50\nbanana,3.00");
///     Ok(())
/// }
/// ```
///
/// ## Notes
///
/// - `file_path` and `file_data` are alternatives; exactly one must be given.
/// - `end` and `length` are alternatives.
/// - `index` cannot be used with `start`, `end`, or `length`.
#[derive(Debug, Clone)]
pub struct Slice {
    file_path: Option<PathBuf>,
    file_data: Option<String>,
    range: SliceRange,
    include_header_row: bool,
    dialect: Dialect,
}

impl Slice {
    /// Returns a `Slice` builder selecting every record
    pub fn new() -> Self {
        Slice {
            file_path: None,
            file_data: None,
            range: SliceRange::default(),
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

    /// The index of the record to slice from (0-indexed). If negative, counts from the last record.
    pub fn start(mut self, start: i64) -> Self {
        self.range.start = Some(start);
        self
    }

    /// The index of the record to slice to (exclusive). If negative, counts from the last record.
    pub fn end(mut self, end: i64) -> Self {
        self.range.end = Some(end);
        self
    }

    /// The length of the slice (alternative to `end`).
    pub fn length(mut self, length: usize) -> Self {
        self.range.length = Some(length);
        self
    }

    /// Slice a single record. If negative, counts from the last record.
    pub fn index(mut self, index: i64) -> Self {
        self.range.index = Some(index);
        self
    }

    /// Specify whether the header row (first row) is part of the records. Defaults to true.
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

    /// Returns the sliced records.
    pub fn execute(self) -> Result<String> {
        let source = Source::resolve(self.file_path, self.file_data)?;
        let bytes = source.load()?;
        slice_bytes(&bytes, self.dialect, self.include_header_row, &self.range)
    }
}

impl Default for Slice {
    fn default() -> Self {
        Self::new()
    }
}
