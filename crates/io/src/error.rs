use std::fmt;

/// Failure to acquire a row sequence from an input file.
///
/// Acquisition failures must stay distinguishable from a matching run that
/// completed with zero results, so they are a dedicated error type rather
/// than an empty row sequence.
#[derive(Debug)]
pub enum ReadError {
    /// File open / byte-read failure.
    Open { path: String, message: String },
    /// Workbook contains no sheets.
    NoSheets { path: String },
    /// A sheet exists but cannot be read.
    Sheet { path: String, sheet: String, message: String },
    /// The first row is missing or carries no usable header names.
    NoHeaders { path: String },
    /// CSV record-level parse failure.
    Csv { path: String, message: String },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, message } => write!(f, "cannot open '{path}': {message}"),
            Self::NoSheets { path } => write!(f, "'{path}' contains no sheets"),
            Self::Sheet { path, sheet, message } => {
                write!(f, "'{path}': cannot read sheet '{sheet}': {message}")
            }
            Self::NoHeaders { path } => write!(f, "'{path}': missing header row"),
            Self::Csv { path, message } => write!(f, "'{path}': csv parse error: {message}"),
        }
    }
}

impl std::error::Error for ReadError {}

/// Failure to write the report to a file.
#[derive(Debug)]
pub enum ExportError {
    /// xlsx build / save failure.
    Xlsx { path: String, message: String },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xlsx { path, message } => write!(f, "cannot write '{path}': {message}"),
        }
    }
}

impl std::error::Error for ExportError {}
