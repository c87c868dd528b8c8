//! Type definitions for scan input and output

use std::borrow::Cow;

/// Byte conventions used to split CSV text into fields and records
///
/// The dialect is fixed by the caller; it is never guessed from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Dialect {
    /// Field separator (default `,`)
    pub delimiter: u8,
    /// Quote character (default `"`)
    pub quote_char: u8,
}

impl Dialect {
    /// Create a dialect with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter,
            quote_char,
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::new(b',', b'"')
    }
}

pub(crate) fn default_include_header_row() -> bool {
    true
}

/// Input to the counting operations
///
/// Holds the whole CSV document plus the header policy. The document is only
/// ever borrowed by the scanner.
///
/// `include_header_row` defaults to `true`: the first record is counted as a
/// row unless the caller opts out.
///
/// # Examples
///
/// ```
/// use csvcount::ScanOptions;
///
/// let options = ScanOptions::new("fruit,price\napple,2.50")
///     .include_header_row(false);
///
/// assert_eq!(csvcount::row_count(&options), 1);
/// assert_eq!(csvcount::column_count(&options), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScanOptions<'a> {
    #[cfg_attr(feature = "serde", serde(borrow))]
    file_data: Cow<'a, str>,

    #[cfg_attr(feature = "serde", serde(default = "default_include_header_row"))]
    include_header_row: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    dialect: Dialect,
}

impl<'a> ScanOptions<'a> {
    /// Create options for a CSV document with the default header policy and dialect
    pub fn new(file_data: impl Into<Cow<'a, str>>) -> Self {
        ScanOptions {
            file_data: file_data.into(),
            include_header_row: default_include_header_row(),
            dialect: Dialect::default(),
        }
    }

    /// Count the first record as a row (builder pattern)
    pub fn include_header_row(mut self, include: bool) -> Self {
        self.include_header_row = include;
        self
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.dialect.delimiter = delimiter;
        self
    }

    /// Set custom quote character (builder pattern)
    pub fn quote_char(mut self, quote_char: u8) -> Self {
        self.dialect.quote_char = quote_char;
        self
    }

    /// Replace the whole dialect (builder pattern)
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// The CSV document
    pub fn file_data(&self) -> &str {
        &self.file_data
    }

    /// Whether the first record counts as a row
    pub fn includes_header_row(&self) -> bool {
        self.include_header_row
    }

    /// Delimiter and quote conventions
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl Default for ScanOptions<'_> {
    fn default() -> Self {
        ScanOptions::new("")
    }
}

/// Row and column statistics of one CSV document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScanResult {
    /// Logical records, header included
    pub rows: usize,
    /// Fields in the first logical record
    pub columns: usize,
}

impl ScanResult {
    /// Row count under a header policy; excluding the header never goes below zero
    pub fn row_count(&self, include_header_row: bool) -> usize {
        if include_header_row {
            self.rows
        } else {
            self.rows.saturating_sub(1)
        }
    }
}
