//! Parsing statistics and result structures for the fleet list
//!
//! Dropped lines never surface as errors; these counters are the optional
//! diagnostic channel for them.

use serde::Serialize;

use super::record_parser::DropReason;
use crate::models::Bus;

/// Parsing result with records and drop diagnostics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Accepted records in source order
    pub records: Vec<Bus>,

    /// Line counts and drop reasons
    pub stats: ParseStats,
}

/// Per-reason drop counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DropCounts {
    pub empty_lines: usize,
    pub empty_rows: usize,
    pub too_few_fields: usize,
    /// Blank depot on an otherwise well-formed line. Lines are trimmed before
    /// splitting, so an empty first field is already an empty row and this
    /// stays 0 for delimiter-split input.
    pub missing_depot: usize,
}

impl DropCounts {
    pub fn record(&mut self, reason: DropReason) {
        match reason {
            DropReason::EmptyLine => self.empty_lines += 1,
            DropReason::EmptyRow => self.empty_rows += 1,
            DropReason::TooFewFields { .. } => self.too_few_fields += 1,
            DropReason::MissingDepot => self.missing_depot += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.empty_lines + self.empty_rows + self.too_few_fields + self.missing_depot
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Data lines seen (header excluded)
    pub data_lines: usize,

    /// Lines that became records
    pub records_parsed: usize,

    /// Lines dropped, by reason
    pub dropped: DropCounts,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records_dropped(&self) -> usize {
        self.dropped.total()
    }

    /// Accepted lines as a percentage of data lines
    pub fn acceptance_rate(&self) -> f64 {
        if self.data_lines == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.data_lines as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} of {} data lines ({:.1}%) | dropped: {} empty, {} blank rows, {} short",
            self.records_parsed,
            self.data_lines,
            self.acceptance_rate(),
            self.dropped.empty_lines,
            self.dropped.empty_rows,
            self.dropped.too_few_fields
        )
    }
}
