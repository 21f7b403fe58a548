//! Word records and the dictionary types that produce them.
//!
//! # Module Organization
//!
//! - [`record`]: The [`WordRecord`] capability set and shared helpers
//! - [`dpd`]: Digital Pāli Dictionary rows, read by column position
//! - [`dps`]: Devamitta Pāli Study rows, read through the header row
//!
//! A [`DictionaryType`] ties a record mapping to its [`DictionaryInfo`], so
//! the rest of the crate never names a concrete record type.

pub mod dpd;
pub mod dps;
pub mod record;

use std::fmt;
use std::str::FromStr;

use crate::dict::types::error::{DictError, Result};
use crate::dict::types::models::DictionaryInfo;

pub use dpd::DpdWord;
pub use dps::DpsWord;
pub use record::{HeaderIndex, WordFactory, WordRecord, make_group_id, make_sort_key, to_delimited_row};

/// The supported dictionary types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DictionaryType {
    #[default]
    Dpd,
    Dps,
}

impl DictionaryType {
    pub const ALL: [DictionaryType; 2] = [DictionaryType::Dpd, DictionaryType::Dps];

    pub fn short_name(self) -> &'static str {
        match self {
            DictionaryType::Dpd => dpd::SHORT_NAME,
            DictionaryType::Dps => dps::SHORT_NAME,
        }
    }

    pub fn info(self) -> DictionaryInfo {
        match self {
            DictionaryType::Dpd => dpd::info(),
            DictionaryType::Dps => dps::info(),
        }
    }

    /// The factory turning a flattened row into a record of this type.
    pub fn factory(self) -> WordFactory {
        match self {
            DictionaryType::Dpd => DpdWord::create,
            DictionaryType::Dps => DpsWord::create,
        }
    }

    /// Whether records of this type resolve fields through the header row.
    pub fn uses_header(self) -> bool {
        matches!(self, DictionaryType::Dps)
    }
}

impl FromStr for DictionaryType {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self> {
        DictionaryType::ALL
            .into_iter()
            .find(|t| t.short_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DictError::UnknownDictionaryType(s.to_string()))
    }
}

impl fmt::Display for DictionaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
