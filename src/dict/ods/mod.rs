//! Extraction of text rows from OpenDocument spreadsheets.
//!
//! # Module Organization
//!
//! - [`archive`]: Opens the zip container and reads `content.xml`
//! - [`document`]: Parses the XML into a queryable node tree
//! - [`styles`]: Finds the automatic styles that are bold
//! - [`sheet`]: Locates a sheet by name and returns its rows
//! - [`cells`]: Renders cells and flattens repeated cells per row
//!
//! # Data Flow
//!
//! ```text
//! archive ──► content.xml ──► ContentDocument ──┬──► BoldStyles ──┐
//!                                               └──► SheetRows ───┴──► FlattenedSheet
//! ```

pub mod archive;
pub mod cells;
pub mod document;
pub mod sheet;
pub mod styles;

use std::io::{Read, Seek};
use std::time::Instant;

use log::info;

use archive::ArchiveReader;
use cells::CellRenderer;
use document::ContentDocument;
use crate::dict::types::error::Result;

/// All rows of one sheet rendered to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedSheet {
    /// The header row, flattened like the data rows. Empty if the sheet has no rows.
    pub header: Vec<String>,
    /// Data rows; each has exactly the requested column count.
    pub rows: Vec<Vec<String>>,
}

/// Reads `sheet_name` from an ODS archive and renders its rows to `column_count` columns.
pub fn read_sheet<R: Read + Seek>(
    archive: &mut ArchiveReader<R>,
    sheet_name: &str,
    column_count: usize,
) -> Result<FlattenedSheet> {
    info!("Starting ODS processing.");

    let start = Instant::now();
    let content = archive.read_content()?;
    let doc = ContentDocument::parse(&content)?;
    info!("Parsed ODS. ({:.3} s)", start.elapsed().as_secs_f64());

    flatten_document(&doc, sheet_name, column_count)
}

/// Renders the rows of `sheet_name` from an already parsed document.
pub fn flatten_document(
    doc: &ContentDocument,
    sheet_name: &str,
    column_count: usize,
) -> Result<FlattenedSheet> {
    let start = Instant::now();
    let bold = styles::bold_styles(doc);
    info!("Obtained all bold styles. ({:.3} s)", start.elapsed().as_secs_f64());

    let start = Instant::now();
    let sheet = sheet::extract_sheet(doc, sheet_name)?;
    info!("Obtained sheet '{}'. ({:.3} s)", sheet_name, start.elapsed().as_secs_f64());

    let start = Instant::now();
    let renderer = CellRenderer::new(&bold);
    let header = sheet
        .header
        .map(|row| renderer.flatten_row(row, column_count))
        .unwrap_or_default();
    let rows = renderer.flatten_rows(&sheet.rows, column_count);
    info!(
        "Created in memory rows: {} rows. ({:.3} s)",
        rows.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(FlattenedSheet { header, rows })
}
