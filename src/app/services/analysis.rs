//! Data context for the natural-language analysis collaborator
//!
//! The collaborator answers free-text questions about the fleet. It receives
//! the aggregate [`FleetSummary`] for counting questions and a small sample of
//! records picked by keyword match for questions about specific vehicles.
//! Building the prompt and calling the text-generation service happen outside
//! this crate.

use serde::Serialize;

use crate::app::services::aggregator::FleetSummary;
use crate::constants::analysis::{
    FALLBACK_SAMPLE_SIZE, MAX_RELEVANT_RECORDS, MIN_TERM_CHARS, SAMPLE_CSV_HEADER,
};
use crate::models::Bus;

/// Everything handed to the collaborator for one question
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisContext<'a> {
    pub query: String,
    pub summary: FleetSummary,
    pub relevant_records: Vec<&'a Bus>,
}

impl<'a> AnalysisContext<'a> {
    pub fn build(query: &str, records: &'a [Bus]) -> Self {
        Self {
            query: query.to_string(),
            summary: FleetSummary::from_records(records),
            relevant_records: relevant_records(query, records),
        }
    }

    /// Relevant records as CSV, header included
    pub fn samples_csv(&self) -> String {
        let mut csv = String::from(SAMPLE_CSV_HEADER);
        for bus in &self.relevant_records {
            csv.push('\n');
            csv.push_str(&sample_row(bus));
        }
        csv
    }
}

/// Lowercased whitespace-separated terms longer than the minimum length
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|term| term.chars().count() > MIN_TERM_CHARS)
        .map(str::to_string)
        .collect()
}

/// Records whose identifying fields contain any query term
///
/// Falls back to the first few records when the query has no usable terms.
pub fn relevant_records<'a>(query: &str, records: &'a [Bus]) -> Vec<&'a Bus> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return records.iter().take(FALLBACK_SAMPLE_SIZE).collect();
    }

    records
        .iter()
        .filter(|bus| {
            let haystack = format!(
                "{} {} {} {} {} {}",
                bus.fleet_number,
                bus.registration_number,
                bus.depot,
                bus.make,
                bus.model,
                bus.service_type
            )
            .to_lowercase();
            terms.iter().any(|term| haystack.contains(term.as_str()))
        })
        .take(MAX_RELEVANT_RECORDS)
        .collect()
}

fn sample_row(bus: &Bus) -> String {
    [
        bus.depot.as_str(),
        bus.fleet_number.as_str(),
        bus.registration_number.as_str(),
        bus.make.as_str(),
        bus.model.as_str(),
        if bus.is_ac { "Yes" } else { "No" },
        bus.service_type.as_str(),
        bus.registration_date.as_str(),
        bus.status.as_str(),
    ]
    .join(",")
}
