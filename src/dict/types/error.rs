//! Custom error types for the palidict crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum DictError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The spreadsheet container could not be opened or read as a zip archive.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The named content entry is not present in the archive.
    #[error("'{0}' not found. Invalid ODS file.")]
    MissingContent(String),

    /// The content entry is not well-formed XML.
    #[error("Malformed content XML: {0}")]
    Xml(String),

    /// The document has no `office:spreadsheet` body.
    #[error("Document contains no spreadsheet")]
    NoSpreadsheet,

    /// No table with the requested name exists in the spreadsheet.
    #[error("Could not find sheet named {0}")]
    SheetNotFound(String),

    /// An offset or size does not fit the 32-bit fields of the index file.
    #[error("Index overflow for {context}: {size} bytes exceeds the 32-bit limit")]
    IndexOverflow { context: &'static str, size: u64 },

    /// The icon of a dictionary type is not valid base64.
    #[error("Invalid icon data: {0}")]
    InvalidIcon(String),

    /// The requested dictionary type is not one of the built-in mappings.
    #[error("Unknown dictionary type: {0}. Expected 'dpd' or 'dps'.")]
    UnknownDictionaryType(String),
}

/// A convenience `Result` type alias using the crate's `DictError` type.
pub type Result<T> = std::result::Result<T, DictError>;
