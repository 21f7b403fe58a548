//! The `.ifo` metadata file.

use chrono::{DateTime, SecondsFormat, Utc};
use log::info;

use crate::dict::types::models::{DictionaryInfo, IndexInfo};

/// First line identifying the file format.
pub const IFO_MAGIC: &str = "StarDict's dict ifo file";

/// Renders the metadata text. `date` is written in UTC with second precision.
pub fn create_ifo(info: &DictionaryInfo, timestamp: DateTime<Utc>, index: IndexInfo) -> Vec<u8> {
    info!("Creating ifo.");

    let date = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        "{IFO_MAGIC}
version={}
bookname={}
wordcount={}
idxfilesize={}
author={}
website={}
description={}
date={}
sametypesequence=h
",
        info.version,
        info.name,
        index.word_count,
        index.file_size,
        info.author,
        info.website,
        info.description,
        date,
    )
    .into_bytes()
}
