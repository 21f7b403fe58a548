//! # palidict
//!
//! Converts Pāli dictionary spreadsheets (`.ods`) into tab-delimited exports
//! and StarDict dictionaries.
//!
//! Two dictionary types are built in: the positional Digital Pāli Dictionary
//! (DPD) and the header-mapped Devamitta Pāli Study (DPS).
pub mod dict;

// Re-export the main types for convenience
pub use dict::{
    DictError,
    Result,
    collation::Collator,
    ods::{FlattenedSheet, archive::ArchiveReader, document::ContentDocument, styles::BoldStyles},
    pipeline::{RunSummary, read_words, run},
    types::models::{DictionaryInfo, IndexEntry, IndexInfo, RunOptions, StarDictFiles},
    words::{DictionaryType, HeaderIndex, WordRecord},
};
