//! # csvcount
//!
//! Quote-aware row and column counting for CSV text.
//!
//! A single linear scan recognizes field and record boundaries under RFC
//! 4180-like quoting: delimiters and line breaks inside a quoted field never
//! split it, `""` is an escaped quote, and an unterminated quote is closed by
//! the end of input instead of failing.
//!
//! # Example
//!
//! ```rust
//! use csvcount::{column_count, row_count, ScanOptions};
//!
//! let data = "\
//! fruit,price
//! apple,2.50
//! \"banana, ripe\",3.00
//! strawberry,1.50";
//!
//! let options = ScanOptions::new(data);
//! assert_eq!(row_count(&options), 4);
//! assert_eq!(column_count(&options), 2);
//!
//! // Exclude the header row from the row count
//! let options = options.include_header_row(false);
//! assert_eq!(row_count(&options), 3);
//! ```
//!
//! # Usage
//!
//! - [`row_count`], [`column_count`] and [`scan`] never fail and never panic.
//! - [`RowCount`], [`ColumnCount`] and [`Slice`] are builders that read either
//!   in-memory data or a file (`.csv`, or a ZIP container named `.csv.zst` or
//!   `.csv.zip`) and return a [`Result`].
//! - `include_header_row` defaults to `true` everywhere.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ScanOptions`], [`ScanResult`]
//!   and [`Dialect`], using camelCase keys (`fileData`, `includeHeaderRow`).

/// Counting operations including row count and column count.
pub mod count;
/// Scanning and encoding primitives.
pub mod csv;
/// Error type and result alias.
pub mod error;
/// Extract a section of records.
pub mod slice;
/// Resolution of file-path or in-memory CSV sources.
pub mod source;
/// Scan options, dialect and results.
pub mod types;

#[doc(inline)]
pub use count::{column_count, row_count, scan, ColumnCount, RowCount};
pub use error::{CsvCountError, Result};
#[doc(inline)]
pub use slice::{slice, Slice, SliceRange};
pub use types::{Dialect, ScanOptions, ScanResult};
