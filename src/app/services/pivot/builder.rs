//! Pivot accumulation and read access

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use super::sort::PivotSort;
use crate::app::services::aggregator::GroupKey;
use crate::models::Bus;

/// One row of the pivot: a row-dimension value and its counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    pub label: String,
    pub counts: HashMap<String, usize>,
    pub total: usize,
}

impl PivotRow {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Count in `column`, 0 when absent
    pub fn count(&self, column: &str) -> usize {
        self.counts.get(column).copied().unwrap_or(0)
    }
}

/// Entity x category count matrix with totals
#[derive(Debug, Clone)]
pub struct PivotTable {
    row_key: GroupKey,
    column_key: GroupKey,
    rows: Vec<PivotRow>,
    row_index: HashMap<String, usize>,
    column_keys: Vec<String>,
    column_totals: HashMap<String, usize>,
    grand_total: usize,
}

/// Build a pivot of `records` with `row_key` down and `column_key` across
pub fn build_pivot(records: &[Bus], row_key: GroupKey, column_key: GroupKey) -> PivotTable {
    let mut rows: Vec<PivotRow> = Vec::new();
    let mut row_index: HashMap<String, usize> = HashMap::new();
    let mut column_totals: HashMap<String, usize> = HashMap::new();
    let mut grand_total = 0;

    for bus in records {
        let row_label = row_key.label(bus);
        let column_label = column_key.label(bus);

        let slot = match row_index.get(&*row_label) {
            Some(&slot) => slot,
            None => {
                row_index.insert(row_label.to_string(), rows.len());
                rows.push(PivotRow::new(&row_label));
                rows.len() - 1
            }
        };

        let row = &mut rows[slot];
        *row.counts.entry(column_label.to_string()).or_insert(0) += 1;
        row.total += 1;

        *column_totals.entry(column_label.into_owned()).or_insert(0) += 1;
        grand_total += 1;
    }

    let mut column_keys: Vec<String> = column_totals.keys().cloned().collect();
    column_keys.sort();

    debug!(
        "Built {} x {} pivot: {} rows, {} columns, {} records",
        row_key,
        column_key,
        rows.len(),
        column_keys.len(),
        grand_total
    );

    PivotTable {
        row_key,
        column_key,
        rows,
        row_index,
        column_keys,
        column_totals,
        grand_total,
    }
}

impl PivotTable {
    pub fn row_key(&self) -> GroupKey {
        self.row_key
    }

    pub fn column_key(&self) -> GroupKey {
        self.column_key
    }

    /// Rows in first-encountered order
    pub fn rows(&self) -> &[PivotRow] {
        &self.rows
    }

    pub fn row_keys(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }

    /// Column keys in ascending code-point order
    pub fn column_keys(&self) -> &[String] {
        &self.column_keys
    }

    pub fn row(&self, label: &str) -> Option<&PivotRow> {
        self.row_index.get(label).map(|&slot| &self.rows[slot])
    }

    /// Count at (row, column); 0 when either is absent
    pub fn cell(&self, row: &str, column: &str) -> usize {
        self.row(row).map(|row| row.count(column)).unwrap_or(0)
    }

    pub fn row_total(&self, row: &str) -> usize {
        self.row(row).map(|row| row.total).unwrap_or(0)
    }

    pub fn column_total(&self, column: &str) -> usize {
        self.column_totals.get(column).copied().unwrap_or(0)
    }

    pub fn grand_total(&self) -> usize {
        self.grand_total
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows ordered by `sort`; equal keys keep first-encountered order
    pub fn sorted_rows(&self, sort: &PivotSort) -> Vec<&PivotRow> {
        let mut sorted: Vec<&PivotRow> = self.rows.iter().collect();
        sorted.sort_by(|a, b| sort.compare(a, b));
        sorted
    }

    /// Flatten into a render-ready view with rows ordered by `sort`
    pub fn view(&self, sort: &PivotSort) -> PivotView {
        let rows = self
            .sorted_rows(sort)
            .into_iter()
            .map(|row| PivotViewRow {
                label: row.label.clone(),
                cells: self
                    .column_keys
                    .iter()
                    .map(|column| row.count(column))
                    .collect(),
                total: row.total,
            })
            .collect();

        PivotView {
            row_key: self.row_key,
            column_key: self.column_key,
            sort: sort.clone(),
            columns: self.column_keys.clone(),
            rows,
            column_totals: self
                .column_keys
                .iter()
                .map(|column| self.column_total(column))
                .collect(),
            grand_total: self.grand_total,
        }
    }
}

/// Render-ready pivot: cells aligned with `columns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotView {
    pub row_key: GroupKey,
    pub column_key: GroupKey,
    pub sort: PivotSort,
    pub columns: Vec<String>,
    pub rows: Vec<PivotViewRow>,
    pub column_totals: Vec<usize>,
    pub grand_total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotViewRow {
    pub label: String,
    pub cells: Vec<usize>,
    pub total: usize,
}
