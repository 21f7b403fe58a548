//! Core conversion modules.
//!
//! # Module Organization
//!
//! - [`types`]: Errors, metadata and run options
//! - [`ods`]: Text rows from OpenDocument spreadsheets
//! - [`words`]: Word records and dictionary types
//! - [`collation`]: Pāli letter order
//! - [`stardict`]: StarDict `.dict`/`.idx`/`.ifo` generation
//! - [`export`]: Tab-delimited exports
//! - [`pipeline`]: The end-to-end run
//!
//! # Data Flow
//!
//! ```text
//! .ods ──► ods::read_sheet ──► rows ──► DictionaryType::factory ──► words
//!                                                                     │
//!                                  ┌──────────────────────────────────┤
//!                                  ▼                                  ▼
//!                           export::*_csv                    stardict::generate
//! ```

pub mod collation;
pub mod export;
pub mod ods;
pub mod pipeline;
pub mod stardict;
pub mod types;
pub mod words;

pub use types::error::{DictError, Result};
