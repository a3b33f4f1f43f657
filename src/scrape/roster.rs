// src/scrape/roster.rs
//
// Roster table → one raw record per player row.
// Assumptions (by design of the source page):
// - the roster table is the first element with class="stats_table"
// - each <td> carries its column name in data-stat
// - header/separator rows have no usable <td> and fall out naturally

use std::collections::BTreeMap;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{STATS_TABLE_SELECTOR, STAT_ATTR};
use crate::error::ExtractError;

/// `data-stat` → cell text for one table row. Only non-empty pairs are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawPlayerRecord {
    fields: BTreeMap<String, String>,
}

impl RawPlayerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: &str) -> Option<&str> {
        self.fields.get(stat).map(String::as_str)
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, stat: K, text: V) {
        self.fields.insert(stat.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawPlayerRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rec = Self::new();
        for (k, v) in iter {
            rec.insert(k, v);
        }
        rec
    }
}

fn selector(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector { selector: css, reason: e.to_string() })
}

/// Find the stats table in `markup` and read every row that has at least one stat cell.
pub fn extract(markup: &str) -> Result<Vec<RawPlayerRecord>, ExtractError> {
    let table_sel = selector(STATS_TABLE_SELECTOR)?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;

    let doc = Html::parse_document(markup);
    let table = doc
        .select(&table_sel)
        .next()
        .ok_or(ExtractError::TableNotFound)?;

    let mut out = Vec::new();
    for row in table.select(&row_sel) {
        let record = read_row(row, &cell_sel);
        if !record.is_empty() {
            out.push(record);
        }
    }

    logd!("Extract: {} player rows", out.len());
    Ok(out)
}

fn read_row(row: ElementRef<'_>, cell_sel: &Selector) -> RawPlayerRecord {
    let mut record = RawPlayerRecord::new();
    for cell in row.select(cell_sel) {
        let stat = cell.value().attr(STAT_ATTR).unwrap_or_default();
        let text: String = cell.text().collect();
        if stat.is_empty() || text.is_empty() {
            continue;
        }
        record.insert(stat, text);
    }
    record
}
