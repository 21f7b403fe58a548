//! The `.idx` file: index records sorted for binary search by lookup tools.
//!
//! Each record is laid out as:
//!
//! ```text
//! ┌──────────────────┬──────┬──────────────────┬──────────────────┐
//! │ key (UTF-8)      │ 0x00 │ offset (u32, BE) │ size (u32, BE)   │
//! └──────────────────┴──────┴──────────────────┴──────────────────┘
//! ```

use std::cmp::Ordering;

use byteorder::{BigEndian, WriteBytesExt};
use log::info;

use crate::dict::types::error::Result;
use crate::dict::types::models::{IndexEntry, IndexInfo};

/// Compares two keys byte by byte, folding ASCII letters only.
///
/// Bytes above 127 are compared as raw values, so non-ASCII letters are
/// never case folded. When one key is a prefix of the other, the shorter
/// one sorts first.
pub fn ascii_casecmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    for (&x, &y) in a.iter().zip(b) {
        let ordering = x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase());
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}

/// Sorts `entries` into index order and serializes them.
///
/// Only the records are reordered; their offsets keep pointing at the
/// unsorted data blob.
pub fn create_idx(entries: &mut [IndexEntry]) -> Result<(IndexInfo, Vec<u8>)> {
    info!("Creating idx: {} words.", entries.len());

    entries.sort_by(|a, b| ascii_casecmp(&a.key, &b.key));

    let mut buffer = Vec::new();
    for entry in entries.iter() {
        buffer.extend_from_slice(entry.key.as_bytes());
        buffer.write_u8(0)?;
        buffer.write_u32::<BigEndian>(entry.offset)?;
        buffer.write_u32::<BigEndian>(entry.size)?;
    }

    let info = IndexInfo {
        word_count: entries.len(),
        file_size: buffer.len(),
    };
    Ok((info, buffer))
}
