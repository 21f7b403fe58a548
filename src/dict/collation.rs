//! Pāli collation.
//!
//! Pāli is presented in the traditional Indic letter order (vowels, then
//! the velar, palatal, retroflex, dental and labial rows, then the rest),
//! and the aspirated consonants `kh`, `gh`, ... are single letters. Plain
//! code-point order gets both wrong.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::OnceLock;

/// Letters in collation order. Digits and the space sort after all letters.
const LETTER_ORDER: [&str; 52] = [
    "a", "ā", "i", "ī", "u", "ū", "e", "o", "k", "kh", "g", "gh", "ṅ", "c", "ch", "j", "jh", "ñ",
    "ṭ", "ṭh", "ḍ", "ḍh", "ṇ", "t", "th", "d", "dh", "n", "p", "ph", "b", "bh", "m", "y", "r", "l",
    "v", "s", "h", "ḷ", "ṃ", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", " ",
];

/// Aspirated consonants written with two characters.
const DIGRAPHS: [&str; 10] = ["kh", "gh", "ch", "jh", "ṭh", "ḍh", "th", "dh", "ph", "bh"];

static RANKS: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();

fn rank(letter: &str) -> Option<usize> {
    RANKS
        .get_or_init(|| LETTER_ORDER.iter().enumerate().map(|(i, l)| (*l, i)).collect())
        .get(letter)
        .copied()
}

fn first_char(letter: &str) -> Option<char> {
    letter.chars().next()
}

/// Comparator for Pāli strings.
///
/// Tokenized strings are cached per instance, so one collator should be
/// reused across the comparisons of a sort. The cache only grows.
///
/// Letters outside the Pāli alphabet are compared by their first character
/// against the other letter; for such input the order is not guaranteed to
/// be transitive.
#[derive(Debug, Default)]
pub struct Collator {
    cache: RefCell<HashMap<String, Rc<[String]>>>,
}

impl Collator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower-cases `text` and splits it into letters, keeping digraphs whole.
    pub fn tokenize(&self, text: &str) -> Rc<[String]> {
        if let Some(letters) = self.cache.borrow().get(text) {
            return Rc::clone(letters);
        }

        let letters: Rc<[String]> = split_letters(&text.to_lowercase()).into();
        self.cache
            .borrow_mut()
            .insert(text.to_string(), Rc::clone(&letters));
        letters
    }

    /// Compares two strings in Pāli letter order.
    ///
    /// Position by position: two alphabet letters compare by rank, two
    /// foreign letters compare lexically, and a mixed pair compares the first
    /// characters of both letters. When all shared positions are equal the
    /// shorter string sorts first.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let a_letters = self.tokenize(a);
        let b_letters = self.tokenize(b);

        for (x, y) in a_letters.iter().zip(b_letters.iter()) {
            let ordering = match (rank(x), rank(y)) {
                (Some(rx), Some(ry)) => rx.cmp(&ry),
                (None, None) => x.cmp(y),
                _ => first_char(x).cmp(&first_char(y)),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        a_letters.len().cmp(&b_letters.len())
    }

    /// Number of distinct strings tokenized so far.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

fn split_letters(lowered: &str) -> Vec<String> {
    let chars: Vec<char> = lowered.chars().collect();
    let mut letters = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if let Some(&next) = chars.get(i + 1) {
            let pair: String = [chars[i], next].iter().collect();
            if DIGRAPHS.contains(&pair.as_str()) {
                letters.push(pair);
                i += 2;
                continue;
            }
        }
        letters.push(chars[i].to_string());
        i += 1;
    }
    letters
}
