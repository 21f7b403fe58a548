//! Grouping of word records and construction of the `.dict` data blob.

use std::collections::HashMap;

use log::{debug, info, trace};

use crate::dict::types::error::{DictError, Result};
use crate::dict::types::models::{DictionaryInfo, IndexEntry};
use crate::dict::words::WordRecord;

/// Word records bucketed by group id.
///
/// Groups iterate in the order their first member was added, and members
/// keep their insertion order within a group.
#[derive(Default)]
pub struct WordGroups<'a> {
    positions: HashMap<String, usize>,
    groups: Vec<(String, Vec<&'a dyn WordRecord>)>,
}

impl<'a> WordGroups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, word: &'a dyn WordRecord) {
        let id = word.group_id();
        match self.positions.get(&id) {
            Some(&i) => self.groups[i].1.push(word),
            None => {
                self.positions.insert(id.clone(), self.groups.len());
                self.groups.push((id, vec![word]));
            }
        }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&[&'a dyn WordRecord]> {
        self.positions.get(id).map(|&i| self.groups[i].1.as_slice())
    }

    /// Groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a dyn WordRecord])> {
        self.groups.iter().map(|(id, words)| (id.as_str(), words.as_slice()))
    }
}

/// Buckets `words` by group id.
pub fn group_words(words: &[Box<dyn WordRecord>]) -> WordGroups<'_> {
    let mut groups = WordGroups::new();
    for word in words {
        groups.push(word.as_ref());
    }
    info!("Grouped {} words into {} groups.", words.len(), groups.len());
    groups
}

/// Wraps an article body in a standalone HTML document styled for `info`.
pub fn wrap_html(contents: &str, info: &DictionaryInfo) -> String {
    let short = &info.short_name;
    format!(
        "
<!DOCTYPE html>
<html>
<head>
<style>
* {{
  font-family: \"Verajja Serif\", \"DejaVu Sans\", sans-serif;
}}
table.word-info-table-{short} tr {{
  vertical-align: top;
}}
table.word-info-table-{short} tr td:nth-child(1), span.sutta-source-{short} {{
  color: {color};
}}
</style>
</head>
<body>
{contents}
</body>
</html>",
        short = short,
        color = info.accent_color,
        contents = contents,
    )
}

/// Renders one group as an HTML article.
///
/// Members are ordered by plain lexical comparison of their sort keys. With
/// two or more members the article starts with one summary line per member.
pub fn render_group_html(words: &[&dyn WordRecord], info: &DictionaryInfo) -> String {
    let mut sorted: Vec<(String, &dyn WordRecord)> =
        words.iter().map(|w| (w.sort_key(), *w)).collect();
    sorted.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut body = String::new();
    if sorted.len() >= 2 {
        let toc: Vec<String> = sorted.iter().map(|(_, w)| w.render_summary_line()).collect();
        body.push_str(&toc.join("\n"));
        body.push_str("<br/>");
    }
    for (_, word) in &sorted {
        body.push_str(&word.render_full_entry());
    }

    wrap_html(&body, info)
}

fn to_u32(value: usize, context: &'static str) -> Result<u32> {
    u32::try_from(value).map_err(|_| DictError::IndexOverflow {
        context,
        size: value as u64,
    })
}

/// Builds the data blob and one index entry per group.
///
/// Articles are laid out in group order; entries are returned in that same
/// order with cumulative offsets.
pub fn create_dict(
    groups: &WordGroups<'_>,
    info: &DictionaryInfo,
) -> Result<(Vec<IndexEntry>, Vec<u8>)> {
    info!("Creating dict: {} word groups.", groups.len());

    let mut blob = Vec::new();
    let mut entries = Vec::with_capacity(groups.len());
    for (id, words) in groups.iter() {
        let html = render_group_html(words, info);
        let offset = to_u32(blob.len(), "data offset")?;
        let size = to_u32(html.len(), "entry size")?;
        trace!("Group '{}': {} words, offset {}, size {}", id, words.len(), offset, size);

        blob.extend_from_slice(html.as_bytes());
        entries.push(IndexEntry {
            key: id.to_string(),
            offset,
            size,
        });
    }
    to_u32(blob.len(), "data blob")?;

    debug!("Data blob: {} bytes.", blob.len());
    Ok((entries, blob))
}
