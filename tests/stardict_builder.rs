mod common;

use std::cmp::Ordering;
use std::fs;

use chrono::{TimeZone, Utc};
use common::TestWord;
use palidict::dict::stardict::builder::{create_dict, render_group_html, wrap_html};
use palidict::dict::stardict::idx::create_idx;
use palidict::dict::stardict::{ascii_casecmp, decode_icon, generate, group_words};
use palidict::{DictError, DictionaryInfo, DictionaryType, IndexEntry, WordRecord};
use proptest::prelude::*;

fn test_info() -> DictionaryInfo {
    DictionaryInfo {
        name: "Test Dictionary".to_string(),
        short_name: "tst".to_string(),
        author: "Tester".to_string(),
        description: "For tests".to_string(),
        website: "https://example.org".to_string(),
        version: "9.9.9".to_string(),
        accent_color: "teal".to_string(),
        // 1x1 transparent PNG
        icon_base64: "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==".to_string(),
    }
}

/// Splits an index file into (key, offset, size) records.
fn parse_idx(mut bytes: &[u8]) -> Vec<(String, u32, u32)> {
    let mut records = Vec::new();
    while !bytes.is_empty() {
        let nul = bytes.iter().position(|&b| b == 0).expect("Missing key terminator");
        let key = String::from_utf8(bytes[..nul].to_vec()).expect("Key is not UTF-8");
        let meta = &bytes[nul + 1..nul + 9];
        let offset = u32::from_be_bytes([meta[0], meta[1], meta[2], meta[3]]);
        let size = u32::from_be_bytes([meta[4], meta[5], meta[6], meta[7]]);
        records.push((key, offset, size));
        bytes = &bytes[nul + 9..];
    }
    records
}

#[test]
fn test_groups_keep_first_seen_order() {
    let words = TestWord::boxed(&["sati 1", "buddha", "sati 2", "anicca", "sati 3"]);
    let groups = group_words(&words);

    let ids: Vec<&str> = groups.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["sati", "buddha", "anicca"]);

    let sati: Vec<String> = groups
        .get("sati")
        .expect("Missing group")
        .iter()
        .map(|w| w.toc_id())
        .collect();
    assert_eq!(sati, vec!["sati_1", "sati_2", "sati_3"]);
}

#[test]
fn test_single_member_group_has_no_summary() {
    let words = TestWord::boxed(&["dhamma"]);
    let groups = group_words(&words);
    let members = groups.get("dhamma").expect("Missing group");

    let html = render_group_html(members, &test_info());
    assert!(!html.contains("<li>"));
    assert!(!html.contains("<br/>"));
    assert!(html.contains("<body>\n<div>dhamma</div>\n</body>"));
}

#[test]
fn test_homonyms_share_one_article() {
    let words = TestWord::boxed(&["buddha 2", "buddha 1"]);
    let groups = group_words(&words);
    assert_eq!(groups.len(), 1);

    let html = render_group_html(groups.get("buddha").expect("Missing group"), &test_info());
    let body = "<li>buddha 1</li>\n<li>buddha 2</li><br/><div>buddha 1</div><div>buddha 2</div>";
    assert!(html.contains(body), "Unexpected article: {}", html);
}

#[test]
fn test_members_sorted_by_padded_sort_key() {
    let words = TestWord::boxed(&["sati 10", "sati 9", "sati 1"]);
    let groups = group_words(&words);

    let html = render_group_html(groups.get("sati").expect("Missing group"), &test_info());
    let positions: Vec<usize> = ["<div>sati 1</div>", "<div>sati 9</div>", "<div>sati 10</div>"]
        .iter()
        .map(|needle| html.find(needle).expect("Missing entry"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_html_wrapper_uses_short_name_and_color() {
    let html = wrap_html("BODY", &test_info());
    assert!(html.starts_with("\n<!DOCTYPE html>\n<html>\n<head>\n<style>"));
    assert!(html.contains("table.word-info-table-tst tr {\n  vertical-align: top;\n}"));
    assert!(html.contains(
        "table.word-info-table-tst tr td:nth-child(1), span.sutta-source-tst {\n  color: teal;\n}"
    ));
    assert!(html.ends_with("<body>\nBODY\n</body>\n</html>"));
}

#[test]
fn test_data_blob_in_first_seen_order() {
    let info = test_info();
    let words = TestWord::boxed(&["zeta", "Alpha", "mu 1", "mu 2"]);
    let groups = group_words(&words);

    let (entries, blob) = create_dict(&groups, &info).expect("Failed to create dict");
    let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["zeta", "Alpha", "mu"]);

    let mut offset = 0;
    for (entry, (_, members)) in entries.iter().zip(groups.iter()) {
        assert_eq!(entry.offset, offset);
        let article = &blob[entry.offset as usize..(entry.offset + entry.size) as usize];
        assert_eq!(article, render_group_html(members, &info).as_bytes());
        offset += entry.size;
    }
    assert_eq!(offset as usize, blob.len());
}

#[test]
fn test_ascii_casecmp() {
    assert_eq!(ascii_casecmp("Apple", "apple"), Ordering::Equal);
    assert_eq!(ascii_casecmp("a", "B"), Ordering::Less);
    assert_eq!(ascii_casecmp("b", "A"), Ordering::Greater);
    assert_eq!(ascii_casecmp("ab", "a"), Ordering::Greater);
    assert_eq!(ascii_casecmp("", "a"), Ordering::Less);
    // Non-ASCII bytes compare raw and are never folded.
    assert_eq!(ascii_casecmp("ā", "z"), Ordering::Greater);
    assert_eq!(ascii_casecmp("Ā", "ā"), Ordering::Less);
}

#[test]
fn test_idx_byte_layout() {
    let mut entries = vec![
        IndexEntry { key: "b".to_string(), offset: 0, size: 2 },
        IndexEntry { key: "a".to_string(), offset: 2, size: 0x0102_0304 },
    ];
    let (info, bytes) = create_idx(&mut entries).expect("Failed to create idx");

    assert_eq!(
        bytes,
        vec![
            b'a', 0, 0, 0, 0, 2, 1, 2, 3, 4, //
            b'b', 0, 0, 0, 0, 0, 0, 0, 0, 2,
        ]
    );
    assert_eq!(info.word_count, 2);
    assert_eq!(info.file_size, 20);
    // Only the records move; offsets still point at the blob.
    assert_eq!(entries[0].key, "a");
    assert_eq!(entries[0].offset, 2);
}

#[test]
fn test_idx_keys_are_utf8() {
    let mut entries = vec![IndexEntry { key: "ñāṇa".to_string(), offset: 7, size: 9 }];
    let (info, bytes) = create_idx(&mut entries).expect("Failed to create idx");
    assert_eq!(info.file_size, "ñāṇa".len() + 9);
    assert_eq!(parse_idx(&bytes), vec![("ñāṇa".to_string(), 7, 9)]);
}

#[test]
fn test_generate_ifo() {
    let info = test_info();
    let words = TestWord::boxed(&["buddha 1", "buddha 2", "dhamma"]);
    let timestamp = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();

    let files = generate(&info, &words, timestamp).expect("Failed to generate");
    let ifo = String::from_utf8(files.ifo).expect("ifo is not UTF-8");
    let expected = format!(
        "StarDict's dict ifo file\n\
         version=9.9.9\n\
         bookname=Test Dictionary\n\
         wordcount=2\n\
         idxfilesize={}\n\
         author=Tester\n\
         website=https://example.org\n\
         description=For tests\n\
         date=2021-03-04T05:06:07Z\n\
         sametypesequence=h\n",
        files.idx.len()
    );
    assert_eq!(ifo, expected);
    assert_eq!(files.idx.len(), "buddha".len() + "dhamma".len() + 18);
}

#[test]
fn test_empty_word_list() {
    let files = generate(&test_info(), &[], Utc::now()).expect("Failed to generate");
    assert!(files.dict.is_empty());
    assert!(files.idx.is_empty());
    assert!(String::from_utf8_lossy(&files.ifo).contains("\nwordcount=0\nidxfilesize=0\n"));
}

#[test]
fn test_icons_decode_to_png() {
    for dictionary_type in DictionaryType::ALL {
        let png = decode_icon(&dictionary_type.info()).expect("Failed to decode icon");
        assert_eq!(&png[..4], b"\x89PNG", "Bad icon for {}", dictionary_type);
    }
}

#[test]
fn test_invalid_icon_is_an_error() {
    let mut info = test_info();
    info.icon_base64 = "not base64!".to_string();
    let words: Vec<Box<dyn WordRecord>> = Vec::new();
    assert!(matches!(generate(&info, &words, Utc::now()), Err(DictError::InvalidIcon(_))));
}

#[test]
fn test_write_to_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("out").join("tst");
    let words = TestWord::boxed(&["sati"]);
    let files = generate(&test_info(), &words, Utc::now()).expect("Failed to generate");

    let written = files.write_to(&target, "tst").expect("Failed to write files");
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["tst.dict", "tst.idx", "tst.ifo", "tst.png"]);
    assert_eq!(fs::read(target.join("tst.dict")).unwrap(), files.dict);
    assert_eq!(fs::read(target.join("tst.idx")).unwrap(), files.idx);
    assert_eq!(fs::read(target.join("tst.ifo")).unwrap(), files.ifo);
    assert_eq!(fs::read(target.join("tst.png")).unwrap(), files.png);
}

proptest! {
    #[test]
    fn prop_index_sorted_and_blob_partitioned(
        headwords in proptest::collection::vec("[a-cA-Cā]{1,4}( [1-3])?", 0..24),
    ) {
        let refs: Vec<&str> = headwords.iter().map(String::as_str).collect();
        let words = TestWord::boxed(&refs);
        let files = generate(&test_info(), &words, Utc::now()).expect("Failed to generate");
        let records = parse_idx(&files.idx);

        prop_assert_eq!(records.len(), group_words(&words).len());
        for pair in records.windows(2) {
            prop_assert_ne!(ascii_casecmp(&pair[0].0, &pair[1].0), Ordering::Greater);
        }

        let mut spans: Vec<(u32, u32)> = records.iter().map(|(_, o, s)| (*o, *s)).collect();
        spans.sort();
        let mut expected_offset = 0u32;
        for (offset, size) in spans {
            prop_assert_eq!(offset, expected_offset);
            expected_offset += size;
        }
        prop_assert_eq!(expected_offset as usize, files.dict.len());
    }
}
