//! Core data structures shared across the extraction and build layers.
//!
//! This module defines:
//! - Dictionary metadata used for the `.ifo` file and the HTML wrapper
//! - Index entries of the StarDict `.idx` file
//! - The generated artifact bundle
//! - Run options for the end-to-end pipeline

use std::path::PathBuf;

use crate::dict::words::DictionaryType;

/// Default sheet holding the dictionary rows.
pub const DEFAULT_SHEET_NAME: &str = "PALI-X";

/// Default number of columns retained per row.
pub const DEFAULT_COLUMN_COUNT: usize = 40;

/// Website advertised in the `.ifo` metadata.
pub const DEFAULT_WEBSITE: &str = "https://github.com/digitalpalitools/dpt-tools";

/// User-visible metadata of one dictionary type.
///
/// Fills the `.ifo` file, the per-group HTML wrapper and the icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryInfo {
    pub name: String,
    /// Short identifier used in file names, CSS classes and table-of-contents ids.
    pub short_name: String,
    pub author: String,
    pub description: String,
    pub website: String,
    /// Value of the `version=` line in the `.ifo` file.
    pub version: String,
    /// CSS color of the first table column and the sutta sources.
    pub accent_color: String,
    /// Base64-encoded PNG written as the dictionary icon.
    pub icon_base64: String,
}

/// A single `.idx` record pointing into the `.dict` data blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub key: String,
    pub offset: u32,
    pub size: u32,
}

/// Summary of the serialized index, consumed by the `.ifo` metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexInfo {
    pub word_count: usize,
    pub file_size: usize,
}

/// The generated StarDict artifact bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarDictFiles {
    /// `.dict`: concatenated per-group HTML documents, in first-seen group order.
    pub dict: Vec<u8>,
    /// `.idx`: index records sorted with the ASCII case-insensitive comparator.
    pub idx: Vec<u8>,
    /// `.ifo`: key=value metadata text.
    pub ifo: Vec<u8>,
    /// `.png`: decoded icon bytes.
    pub png: Vec<u8>,
}

/// Options for one end-to-end run over an ODS file.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub ods_path: PathBuf,
    pub sheet_name: String,
    pub column_count: usize,
    pub dictionary_type: DictionaryType,
    /// Target directory; defaults to the directory containing `ods_path`.
    pub output_dir: Option<PathBuf>,
    pub write_csv: bool,
    pub write_stardict: bool,
}

impl RunOptions {
    /// Options with all defaults for the given input file.
    pub fn new(ods_path: impl Into<PathBuf>) -> Self {
        Self {
            ods_path: ods_path.into(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            column_count: DEFAULT_COLUMN_COUNT,
            dictionary_type: DictionaryType::Dpd,
            output_dir: None,
            write_csv: true,
            write_stardict: true,
        }
    }

    /// Resolves the directory that receives the generated files.
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self
                .ods_path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_default(),
        }
    }
}
