//! Fleet list parser orchestration
//!
//! Splits the raw text into lines, discards the header and feeds each data
//! line through [`parse_record_line`], collecting drop diagnostics.

use tracing::{debug, info, warn};

use super::record_parser::parse_record_line;
use super::stats::{ParseResult, ParseStats};
use crate::constants::AFFIRMATIVE_TOKEN;
use crate::models::Bus;

/// Parser for the comma-delimited fleet list
///
/// Pure: the same text always yields the same records and statistics.
#[derive(Debug, Clone)]
pub struct FleetParser {
    affirmative_token: String,
}

impl FleetParser {
    /// Create a parser that treats `yes` (any case) as air-conditioned
    pub fn new() -> Self {
        Self {
            affirmative_token: AFFIRMATIVE_TOKEN.to_string(),
        }
    }

    /// Use a different affirmative token for the AC column
    pub fn with_affirmative_token(mut self, token: impl Into<String>) -> Self {
        self.affirmative_token = token.into().trim().to_lowercase();
        self
    }

    /// Parse the fleet list text and return records with statistics
    pub fn parse(&self, text: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for (position, line) in text.trim().split('\n').skip(1).enumerate() {
            stats.data_lines += 1;

            match parse_record_line(line, position, &self.affirmative_token) {
                Ok(bus) => {
                    records.push(bus);
                    stats.records_parsed += 1;
                }
                Err(reason) => {
                    debug!("Dropped data line {}: {}", position, reason);
                    stats.dropped.record(reason);
                }
            }
        }

        if stats.data_lines > 0 && stats.records_parsed == 0 {
            warn!("No records accepted from {} data lines", stats.data_lines);
        }
        info!("{}", stats.summary());

        ParseResult { records, stats }
    }
}

impl Default for FleetParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the fleet list text with default settings, discarding diagnostics
pub fn parse_fleet_data(text: &str) -> Vec<Bus> {
    FleetParser::new().parse(text).records
}
