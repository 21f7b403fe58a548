//! Tab-delimited exports of the word records.
//!
//! Rows come from [`WordRecord::to_delimited_row`] and are joined with CRLF,
//! without a trailing line break.

use log::info;

use crate::dict::words::WordRecord;

fn generate_csv(words: &[Box<dyn WordRecord>], filter: impl Fn(&dyn WordRecord) -> bool) -> Vec<u8> {
    words
        .iter()
        .map(|w| &**w)
        .filter(|w| filter(*w))
        .map(|w| w.to_delimited_row())
        .collect::<Vec<_>>()
        .join("\r\n")
        .into_bytes()
}

/// Every record.
pub fn full_csv(words: &[Box<dyn WordRecord>]) -> Vec<u8> {
    info!("Creating full CSV");
    generate_csv(words, |_| true)
}

/// Records that go into the dictionary.
pub fn vocab_csv(words: &[Box<dyn WordRecord>]) -> Vec<u8> {
    info!("Creating vocab CSV");
    generate_csv(words, |w| w.include_in_dictionary())
}

/// Records that go into the root list.
pub fn root_csv(words: &[Box<dyn WordRecord>]) -> Vec<u8> {
    info!("Creating root CSV");
    generate_csv(words, |w| w.include_in_root_csv())
}
