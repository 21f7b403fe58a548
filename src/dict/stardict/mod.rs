//! StarDict dictionary generation.
//!
//! # Module Organization
//!
//! - [`builder`]: Groups words and lays out the `.dict` data blob
//! - [`idx`]: Sorts and serializes the `.idx` index
//! - [`ifo`]: Renders the `.ifo` metadata
//!
//! # Orderings
//!
//! Three orderings coexist and are kept apart on purpose:
//!
//! ```text
//! entries of a group   plain lexical order of sort keys
//! .dict articles       first-seen group order
//! .idx records         ASCII case-insensitive byte order
//! ```
//!
//! Index offsets always refer to the `.dict` layout, never to the index order.

pub mod builder;
pub mod idx;
pub mod ifo;

use std::fs;
use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use log::{error, info};

use crate::dict::types::error::{DictError, Result};
use crate::dict::types::models::{DictionaryInfo, StarDictFiles};
use crate::dict::words::WordRecord;

pub use builder::{WordGroups, group_words};
pub use idx::ascii_casecmp;

/// Decodes the base64 icon of a dictionary type.
pub fn decode_icon(info: &DictionaryInfo) -> Result<Vec<u8>> {
    info!("Creating icon.");
    STANDARD.decode(info.icon_base64.trim()).map_err(|e| {
        error!("Icon of '{}' is not valid base64: {}", info.short_name, e);
        DictError::InvalidIcon(e.to_string())
    })
}

/// Builds the complete artifact bundle for `words`.
pub fn generate(
    info: &DictionaryInfo,
    words: &[Box<dyn WordRecord>],
    timestamp: DateTime<Utc>,
) -> Result<StarDictFiles> {
    let groups = group_words(words);
    info!("Creating dictionary at '{}'.", info.short_name);

    let (mut entries, dict) = builder::create_dict(&groups, info)?;
    let (index, idx) = idx::create_idx(&mut entries)?;
    let ifo = ifo::create_ifo(info, timestamp, index);
    let png = decode_icon(info)?;

    Ok(StarDictFiles { dict, idx, ifo, png })
}

impl StarDictFiles {
    /// Writes `<short_name>.{dict,idx,ifo,png}` into `dir`, creating it if needed.
    ///
    /// Returns the paths written, in that order.
    pub fn write_to(&self, dir: &Path, short_name: &str) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;

        let files: [(&str, &[u8]); 4] = [
            ("dict", &self.dict),
            ("idx", &self.idx),
            ("ifo", &self.ifo),
            ("png", &self.png),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (extension, bytes) in files {
            let path = dir.join(format!("{}.{}", short_name, extension));
            fs::write(&path, bytes)?;
            info!("Wrote {} ({} bytes)", path.display(), bytes.len());
            written.push(path);
        }
        Ok(written)
    }
}
