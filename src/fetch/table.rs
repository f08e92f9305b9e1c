// src/fetch/table.rs

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{node::Node, ElementRef, Html, Selector};

use crate::config::HeaderSignature;

static FOOTNOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").expect("footnote regex"));

/// A table as found on the page: every field is still text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Column positions of the signature headers inside a [`RawTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub year: usize,
    pub winner: usize,
    pub runner_up: usize,
}

/// Extract every `<table>` in `html`.
///
/// The header row is the first row made only of `th` cells; data rows are
/// those with at least one `td`. Row headers (`th scope="row"`) stay in
/// column order.
pub fn parse_tables(html: &str) -> Vec<RawTable> {
    let table_sel = Selector::parse("table").expect("table selector should parse");
    let row_sel = Selector::parse("tr").expect("row selector should parse");
    let doc = Html::parse_document(html);
    doc.select(&table_sel)
        .map(|t| parse_table(t, &row_sel))
        .collect()
}

fn parse_table(table: ElementRef<'_>, row_sel: &Selector) -> RawTable {
    let mut out = RawTable::default();
    for row in table.select(row_sel) {
        // skip rows belonging to a nested table
        if row.ancestors().filter_map(ElementRef::wrap).find(|a| a.value().name() == "table")
            != Some(table)
        {
            continue;
        }
        let cells: Vec<ElementRef<'_>> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|c| matches!(c.value().name(), "th" | "td"))
            .collect();
        if cells.is_empty() {
            continue;
        }
        let has_data = cells.iter().any(|c| c.value().name() == "td");
        let texts: Vec<String> = cells.into_iter().map(cell_text).collect();
        if has_data {
            out.rows.push(texts);
        } else if out.headers.is_empty() {
            out.headers = texts;
        }
    }
    out
}

/// Visible text of a cell: reference superscripts and hidden sort keys
/// skipped, footnote brackets removed, whitespace collapsed.
pub fn cell_text(cell: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(cell, &mut raw);
    clean_str(&FOOTNOTE.replace_all(&raw, ""))
}

fn collect_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                let hidden = e
                    .attr("style")
                    .map(|s| s.replace(' ', "").contains("display:none"))
                    .unwrap_or(false);
                if e.name() == "sup" || e.name() == "style" || hidden {
                    continue;
                }
                if e.name() == "br" {
                    out.push(' ');
                }
                if let Some(inner) = ElementRef::wrap(child) {
                    collect_text(inner, out);
                }
            }
            _ => {}
        }
    }
}

/// Collapse runs of whitespace (NBSP included) and trim.
pub fn clean_str(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First table whose headers contain every header in `sig`.
pub fn select_by_signature<'a>(
    tables: &'a [RawTable],
    sig: &HeaderSignature,
) -> Option<(&'a RawTable, Columns)> {
    tables.iter().find_map(|t| {
        let columns = Columns {
            year: header_index(&t.headers, &sig.year)?,
            winner: header_index(&t.headers, &sig.winner)?,
            runner_up: header_index(&t.headers, &sig.runner_up)?,
        };
        Some((t, columns))
    })
}

fn header_index(headers: &[String], wanted: &str) -> Option<usize> {
    let wanted = clean_str(wanted);
    headers.iter().position(|h| h.eq_ignore_ascii_case(&wanted))
}
