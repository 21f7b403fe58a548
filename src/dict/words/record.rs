//! The word-record capability set and helpers shared by all dictionary types.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// One dictionary entry built from a flattened spreadsheet row.
///
/// Each dictionary type maps columns to fields differently and renders its
/// own HTML; the builders only rely on this capability set.
pub trait WordRecord {
    /// Whether the row is a real entry rather than blank filler.
    fn is_valid_word(&self) -> bool;
    /// Key ordering the entries of one group (ordinary lexical order).
    fn sort_key(&self) -> String;
    /// Normalized headword; entries sharing it form one dictionary article.
    fn group_id(&self) -> String;
    /// Anchor id of the entry inside its article.
    fn toc_id(&self) -> String;
    fn include_in_root_csv(&self) -> bool;
    fn include_in_dictionary(&self) -> bool;
    /// The raw fields as one tab-delimited line.
    fn to_delimited_row(&self) -> String;
    /// Short line linking to the full entry, used when an article has several entries.
    fn render_summary_line(&self) -> String;
    fn render_full_entry(&self) -> String;
}

/// Column name → position, built from the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Indexes the non-empty header names; the first occurrence of a name wins.
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Self {
        let mut positions = HashMap::new();
        for (i, name) in header.iter().enumerate() {
            let name = name.as_ref().trim();
            if !name.is_empty() {
                positions.entry(name.to_string()).or_insert(i);
            }
        }
        Self { positions }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Builds a word record from a row's values and the optional header index.
pub type WordFactory = fn(Vec<String>, Option<&HeaderIndex>) -> Box<dyn WordRecord>;

static DIGIT_RUN: OnceLock<Regex> = OnceLock::new();

fn digit_run_regex() -> &'static Regex {
    DIGIT_RUN.get_or_init(|| Regex::new(r"[0-9]+").expect("Invalid digit-run regex pattern"))
}

/// Left-pads every run of digits to three places, so `"a 2"` sorts before `"a 10"`.
pub fn make_sort_key(headword: &str) -> String {
    digit_run_regex()
        .replace_all(headword, |caps: &Captures| format!("{:0>3}", &caps[0]))
        .into_owned()
}

/// Drops a trailing homonym number: `"buddha 2"` → `"buddha"`.
///
/// The last space-separated part counts as a number when it starts with an
/// optional sign followed by a digit.
pub fn make_group_id(headword: &str) -> String {
    match headword.rsplit_once(' ') {
        Some((base, last)) if is_integer_prefixed(last) => base.to_string(),
        None if is_integer_prefixed(headword) => String::new(),
        _ => headword.to_string(),
    }
}

fn is_integer_prefixed(s: &str) -> bool {
    let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    digits.starts_with(|c: char| c.is_ascii_digit())
}

/// Wraps every field in double quotes and joins them with tabs.
///
/// Quotes inside fields are not escaped.
pub fn to_delimited_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| format!("\"{}\"", f.as_ref()))
        .collect::<Vec<_>>()
        .join("\t")
}

/// Field of a row by position; missing positions read as empty.
pub(crate) fn field(record: &[String], index: usize) -> &str {
    record.get(index).map(String::as_str).unwrap_or_default()
}

/// `text` if `value` is non-empty, otherwise the empty string.
pub(crate) fn when(value: &str, text: impl FnOnce() -> String) -> String {
    if value.is_empty() { String::new() } else { text() }
}
