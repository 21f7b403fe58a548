#![allow(dead_code)]

use std::io::{Cursor, Write};

use palidict::WordRecord;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const NAMESPACES: &str = concat!(
    r#"xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" "#,
    r#"xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" "#,
    r#"xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" "#,
    r#"xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" "#,
    r#"xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0""#,
);

/// Automatic styles where `T1` is bold and `T2` is italic.
pub const STYLES: &str = r#"<office:automatic-styles>
<style:style style:name="T1" style:family="text"><style:text-properties fo:font-weight="bold"/></style:style>
<style:style style:name="T2" style:family="text"><style:text-properties fo:font-style="italic"/></style:style>
</office:automatic-styles>"#;

/// A complete `content.xml` with the given automatic styles and tables.
pub fn content_xml(styles: &str, tables: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content {NAMESPACES} office:version="1.2">{styles}<office:body><office:spreadsheet>{tables}</office:spreadsheet></office:body></office:document-content>"#
    )
}

pub fn table(name: &str, rows: &[String]) -> String {
    format!(r#"<table:table table:name="{}">{}</table:table>"#, name, rows.concat())
}

pub fn row(cells: &[String]) -> String {
    format!("<table:table-row>{}</table:table-row>", cells.concat())
}

/// A string cell with one paragraph per entry of `paragraphs`.
pub fn cell(paragraphs: &[&str]) -> String {
    let body: String = paragraphs.iter().map(|p| format!("<text:p>{}</text:p>", p)).collect();
    format!(r#"<table:table-cell office:value-type="string">{}</table:table-cell>"#, body)
}

pub fn repeated_cell(paragraph: &str, count: i64) -> String {
    format!(
        r#"<table:table-cell table:number-columns-repeated="{}"><text:p>{}</text:p></table:table-cell>"#,
        count, paragraph
    )
}

/// The blank trailing row spreadsheet editors append up to the sheet limit.
pub fn filler_row(rows: i64, columns: i64) -> String {
    format!(
        r#"<table:table-row table:number-rows-repeated="{}"><table:table-cell table:number-columns-repeated="{}"/></table:table-row>"#,
        rows, columns
    )
}

/// A row of plain single-paragraph cells.
pub fn text_row(values: &[&str]) -> String {
    let cells: Vec<String> = values.iter().map(|v| cell(&[v])).collect();
    row(&cells)
}

/// Zips the given entries into an in-memory archive.
pub fn zip_entries(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, contents) in entries {
        writer.start_file(*name, options).expect("Failed to start zip entry");
        writer.write_all(contents.as_bytes()).expect("Failed to write zip entry");
    }
    writer.finish().expect("Failed to finish zip archive").into_inner()
}

/// An ODS archive holding `content` as its `content.xml`.
pub fn ods_bytes(content: &str) -> Vec<u8> {
    zip_entries(&[
        ("mimetype", "application/vnd.oasis.opendocument.spreadsheet"),
        ("content.xml", content),
    ])
}

/// Overwrites the uncompressed size recorded for `name` in the central directory.
pub fn set_declared_size(archive: &mut [u8], name: &str, size: u32) {
    const SIGNATURE: [u8; 4] = [0x50, 0x4b, 0x01, 0x02];
    let mut i = 0;
    while i + 46 <= archive.len() {
        if archive[i..i + 4] == SIGNATURE {
            let name_len = u16::from_le_bytes([archive[i + 28], archive[i + 29]]) as usize;
            if archive.get(i + 46..i + 46 + name_len) == Some(name.as_bytes()) {
                archive[i + 24..i + 28].copy_from_slice(&size.to_le_bytes());
                return;
            }
        }
        i += 1;
    }
    panic!("No central directory record for {}", name);
}

/// A word record with fixed values for builder tests.
#[derive(Debug, Clone)]
pub struct TestWord {
    pub headword: String,
    pub in_dictionary: bool,
    pub in_root: bool,
}

impl TestWord {
    pub fn new(headword: &str) -> Self {
        Self {
            headword: headword.to_string(),
            in_dictionary: true,
            in_root: false,
        }
    }

    pub fn boxed(headwords: &[&str]) -> Vec<Box<dyn WordRecord>> {
        headwords
            .iter()
            .map(|h| Box::new(TestWord::new(h)) as Box<dyn WordRecord>)
            .collect()
    }
}

impl WordRecord for TestWord {
    fn sort_key(&self) -> String {
        palidict::dict::words::make_sort_key(&self.headword)
    }

    fn group_id(&self) -> String {
        palidict::dict::words::make_group_id(&self.headword)
    }

    fn toc_id(&self) -> String {
        self.headword.replace(' ', "_")
    }

    fn is_valid_word(&self) -> bool {
        !self.headword.is_empty()
    }

    fn include_in_root_csv(&self) -> bool {
        self.in_root
    }

    fn include_in_dictionary(&self) -> bool {
        self.in_dictionary
    }

    fn to_delimited_row(&self) -> String {
        palidict::dict::words::to_delimited_row(&[self.headword.as_str()])
    }

    fn render_summary_line(&self) -> String {
        format!("<li>{}</li>", self.headword)
    }

    fn render_full_entry(&self) -> String {
        format!("<div>{}</div>", self.headword)
    }
}
