//! Lookup of a named sheet and its rows.

use log::{debug, error};

use super::document::{ContentDocument, Element};
use crate::dict::types::error::{DictError, Result};

/// Rows of one sheet, split into the header row and the data rows.
#[derive(Debug, Clone)]
pub struct SheetRows<'a> {
    /// The first row of the table, if any.
    pub header: Option<&'a Element>,
    /// All remaining rows in document order.
    pub rows: Vec<&'a Element>,
}

/// Finds the table named `sheet_name` in the first spreadsheet of the document.
///
/// # Errors
/// - [`DictError::NoSpreadsheet`] if the document has no `office:spreadsheet`
/// - [`DictError::SheetNotFound`] if no `table:table` has a matching `table:name`
pub fn extract_sheet<'a>(doc: &'a ContentDocument, sheet_name: &str) -> Result<SheetRows<'a>> {
    let spreadsheet = doc
        .elements_by_tag("office:spreadsheet")
        .next()
        .ok_or_else(|| {
            error!("Document contains no office:spreadsheet element");
            DictError::NoSpreadsheet
        })?;

    let table = spreadsheet
        .descendants("table:table")
        .find(|t| t.attribute("table:name") == Some(sheet_name))
        .ok_or_else(|| {
            error!("Could not find sheet named {}", sheet_name);
            DictError::SheetNotFound(sheet_name.to_string())
        })?;

    let mut rows = table.descendants("table:table-row");
    let header = rows.next();
    let rows: Vec<&Element> = rows.collect();
    debug!("Sheet '{}': {} data rows", sheet_name, rows.len());

    Ok(SheetRows { header, rows })
}

/// Data rows of the named sheet; the first row is treated as the header and dropped.
pub fn rows_in_sheet<'a>(doc: &'a ContentDocument, sheet_name: &str) -> Result<Vec<&'a Element>> {
    extract_sheet(doc, sheet_name).map(|sheet| sheet.rows)
}
