// Row acquisition and report export.
//
// All fallibility of input acquisition lives here: the engine consumes
// already-parsed row sequences and never touches a file.

pub mod csv;
pub mod error;
pub mod export;
pub mod xlsx;

pub use error::{ExportError, ReadError};

use std::path::Path;

use matchfacile_engine::RowRecord;

/// Read a tabular input by extension: `.csv`/`.tsv` through the csv reader,
/// everything else through calamine.
pub fn read_rows(path: &Path) -> Result<Vec<RowRecord>, ReadError> {
    if is_delimited_text(path) {
        csv::read_rows(path)
    } else {
        xlsx::read_rows(path)
    }
}

/// Read only the header row of a tabular input.
pub fn read_headers(path: &Path) -> Result<Vec<String>, ReadError> {
    if is_delimited_text(path) {
        csv::read_headers(path)
    } else {
        xlsx::read_headers(path)
    }
}

fn is_delimited_text(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("tsv")
    )
}
