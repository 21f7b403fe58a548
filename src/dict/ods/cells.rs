//! Rendering of spreadsheet cells to markup-annotated text.
//!
//! Bold spans become `<b>…</b>` and paragraphs are joined with a literal
//! `<br/>`, since the text is embedded in HTML downstream. Characters that
//! were escaped in the XML (`<`, `"`, ...) are emitted as-is.

use std::iter;

use log::trace;

use super::document::{Element, Node};
use super::styles::BoldStyles;

const SPAN_TAG: &str = "text:span";
const SPAN_STYLE_ATTR: &str = "text:style-name";
const PARAGRAPH_TAG: &str = "text:p";
const CELL_TAG: &str = "table:table-cell";
const REPEAT_ATTR: &str = "table:number-columns-repeated";
const PARAGRAPH_SEPARATOR: &str = "<br/>";

/// Renders cells and rows against a fixed set of bold styles.
pub struct CellRenderer<'s> {
    bold_styles: &'s BoldStyles,
}

impl<'s> CellRenderer<'s> {
    pub fn new(bold_styles: &'s BoldStyles) -> Self {
        Self { bold_styles }
    }

    /// Renders one cell: every `text:p` descendant rendered and joined with `<br/>`.
    ///
    /// A cell without paragraphs renders to the empty string.
    pub fn render_cell(&self, cell: &Element) -> String {
        let paragraphs: Vec<String> = cell
            .descendants(PARAGRAPH_TAG)
            .map(|p| self.render_nodes(p.children()))
            .collect();
        paragraphs.join(PARAGRAPH_SEPARATOR)
    }

    /// Renders a node sequence by structural recursion.
    pub fn render_nodes(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        self.render_into(nodes, &mut out);
        out
    }

    fn render_into(&self, nodes: &[Node], out: &mut String) {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => {
                    if self.is_bold_span(el) {
                        out.push_str("<b>");
                        self.render_into(el.children(), out);
                        out.push_str("</b>");
                    } else {
                        self.render_into(el.children(), out);
                    }
                }
            }
        }
    }

    fn is_bold_span(&self, el: &Element) -> bool {
        el.name() == SPAN_TAG
            && self
                .bold_styles
                .contains(el.attribute(SPAN_STYLE_ATTR).unwrap_or_default())
    }

    /// Expands repeated cells and renders exactly `column_count` cells.
    ///
    /// Cells past `column_count` are never rendered. Rows that are too short
    /// are padded with empty strings.
    pub fn flatten_row(&self, row: &Element, column_count: usize) -> Vec<String> {
        let mut cells: Vec<String> = expand_cells(row)
            .take(column_count)
            .map(|cell| self.render_cell(cell))
            .collect();
        cells.resize(column_count, String::new());
        cells
    }

    /// Flattens every row in order.
    pub fn flatten_rows(&self, rows: &[&Element], column_count: usize) -> Vec<Vec<String>> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let cells = self.flatten_row(row, column_count);
                trace!("Row {}: first cell '{}'", i, cells.first().map(String::as_str).unwrap_or(""));
                cells
            })
            .collect()
    }
}

/// Number of consecutive identical cells a stored cell stands for.
///
/// Absent, unparsable or non-positive counts mean a single cell.
pub fn repeat_count(cell: &Element) -> usize {
    cell.attribute(REPEAT_ATTR)
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|&n| n > 0)
        .map(|n| n as usize)
        .unwrap_or(1)
}

/// Lazily expands the cells of a row by their repeat counts.
pub fn expand_cells(row: &Element) -> impl Iterator<Item = &Element> {
    row.descendants(CELL_TAG)
        .flat_map(|cell| iter::repeat(cell).take(repeat_count(cell)))
}
