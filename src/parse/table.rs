//! Shared table-row scanning for label/value pages.

use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

// CSS selector strings
const ROW_SELECTOR_STR: &str = "tr";
const CELL_SELECTOR_STR: &str = "td";

pub(crate) static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(ROW_SELECTOR_STR, "ROW_SELECTOR"));

pub(crate) static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CELL_SELECTOR_STR, "CELL_SELECTOR"));

/// Concatenated text of an element's descendants, with no separator.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}

/// Walks label/value rows and hands each `(label, value)` pair to `assign`.
///
/// A row qualifies if it has at least two cells. The label is the first
/// cell's text with leading/trailing colons stripped; whitespace is left
/// alone, so a label the portal renders with stray spaces does not match.
/// The value is the second cell's trimmed text. Rows repeating a label reach
/// `assign` in document order, so the last occurrence wins.
pub(crate) fn scan_label_rows<'a, I, F>(rows: I, mut assign: F)
where
    I: Iterator<Item = ElementRef<'a>>,
    F: FnMut(&str, String),
{
    for row in rows {
        let cells: Vec<ElementRef> = row.select(&CELL_SELECTOR).collect();
        if cells.len() < 2 {
            continue;
        }
        let label = element_text(&cells[0]);
        let value = element_text(&cells[1]).trim().to_string();
        assign(label.trim_matches(':'), value);
    }
}
