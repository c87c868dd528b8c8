//! Resolution of the CSV document a builder operates on

use crate::error::{CsvCountError, Result};
use log::debug;
use s_zip::StreamingZipReader;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Where the CSV document comes from
///
/// Exactly one of a file path or in-memory data backs an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// CSV file on disk, plain or compressed
    Path(PathBuf),
    /// CSV text held in memory
    Data(String),
}

impl Source {
    /// Pick the source from optional builder arguments
    ///
    /// Fails with [`CsvCountError::InvalidInput`] when both or neither are given.
    pub fn resolve(file_path: Option<PathBuf>, file_data: Option<String>) -> Result<Self> {
        match (file_path, file_data) {
            (Some(_), Some(_)) => Err(CsvCountError::InvalidInput(
                "Cannot use both file_path and file_data, specify one only".to_string(),
            )),
            (None, None) => Err(CsvCountError::InvalidInput(
                "Must provide either file_path or file_data".to_string(),
            )),
            (Some(path), None) => Ok(Source::Path(path)),
            (None, Some(data)) => Ok(Source::Data(data)),
        }
    }

    /// Bytes of the document; in-memory data is borrowed, files are read whole
    pub fn load(&self) -> Result<Cow<'_, [u8]>> {
        match self {
            Source::Data(data) => Ok(Cow::Borrowed(data.as_bytes())),
            Source::Path(path) => read_path(path).map(Cow::Owned),
        }
    }
}

fn is_compressed(path: &Path) -> bool {
    let path_str = path.to_str().unwrap_or("");
    path_str.ends_with(".csv.zst") || path_str.ends_with(".csv.zip")
}

/// Read a CSV file - auto-detects ZIP containers from file extension
///
/// - `.csv.zst`, `.csv.zip` → ZIP container (Zstd or Deflate entries)
/// - anything else, including `.csv.gz`, → read as-is
fn read_path(path: &Path) -> Result<Vec<u8>> {
    if !is_compressed(path) {
        debug!("Reading plain CSV {}", path.display());
        return std::fs::read(path).map_err(|e| {
            CsvCountError::ReadError(format!("Failed to open CSV file {}: {}", path.display(), e))
        });
    }

    debug!("Reading compressed CSV {}", path.display());
    let mut zip = StreamingZipReader::open(path)
        .map_err(|e| CsvCountError::ReadError(format!("Failed to open ZIP: {}", e)))?;

    // First .csv entry, falling back to the first entry
    let entry_name = zip
        .entries()
        .iter()
        .find(|e| e.name.ends_with(".csv"))
        .or_else(|| zip.entries().first())
        .ok_or_else(|| CsvCountError::ReadError("No CSV entry found in archive".to_string()))?
        .name
        .clone();

    debug!("Using archive entry {}", entry_name);
    zip.read_entry_by_name(&entry_name)
        .map_err(|e| CsvCountError::ReadError(format!("Failed to read ZIP entry: {}", e)))
}
