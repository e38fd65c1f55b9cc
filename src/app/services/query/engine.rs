//! Query evaluation: filter, then sort, then window

use serde::Serialize;
use tracing::debug;

use super::filter::FleetFilters;
use super::pagination::{page_window, total_pages};
use super::sort::RecordSort;
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::models::Bus;
use crate::{FleetError, Result};

/// Immutable query parameters
///
/// Changing the filters, sort or page size through the `with_*` builders
/// starts over at page 1; only [`QueryParams::with_page`] keeps the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    filters: FleetFilters,
    sort: Option<RecordSort>,
    page: usize,
    page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            filters: FleetFilters::default(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParams {
    /// Create parameters; `page_size` must be positive
    pub fn new(
        filters: FleetFilters,
        sort: Option<RecordSort>,
        page: usize,
        page_size: usize,
    ) -> Result<Self> {
        validate_page_size(page_size)?;
        Ok(Self {
            filters,
            sort,
            page,
            page_size,
        })
    }

    pub fn filters(&self) -> &FleetFilters {
        &self.filters
    }

    pub fn sort(&self) -> Option<&RecordSort> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn with_filters(&self, filters: FleetFilters) -> Self {
        Self {
            filters,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: Option<RecordSort>) -> Self {
        Self {
            sort,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page_size(&self, page_size: usize) -> Result<Self> {
        validate_page_size(page_size)?;
        Ok(Self {
            page_size,
            page: 1,
            ..self.clone()
        })
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

fn validate_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(FleetError::invalid_argument(
            "Page size must be greater than 0",
        ));
    }
    Ok(())
}

/// One page of a filtered, sorted fleet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult<'a> {
    /// Records on the requested page
    pub windowed: Vec<&'a Bus>,
    /// Records matching the filters, across all pages
    pub filtered_count: usize,
    /// `ceil(filtered_count / page_size)`, 0 when nothing matched
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl QueryResult<'_> {
    /// Page count as shown to the user (never below 1)
    pub fn displayed_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    /// 1-indexed first and last position shown, if the page has rows
    pub fn showing_range(&self) -> Option<(usize, usize)> {
        if self.windowed.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.windowed.len() - 1))
    }

    /// Page reached by "previous" (stays on 1)
    pub fn previous_page(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    /// Page reached by "next" (stays on the last page)
    pub fn next_page(&self) -> usize {
        self.page.saturating_add(1).min(self.displayed_total_pages())
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.displayed_total_pages()
    }
}

/// Evaluate `params` over `records` without touching them
pub fn query<'a>(records: &'a [Bus], params: &QueryParams) -> QueryResult<'a> {
    let mut matched = params.filters.apply(records);

    if let Some(sort) = &params.sort {
        // stable: equal keys keep source order
        matched.sort_by(|a, b| sort.compare(a, b));
    }

    let filtered_count = matched.len();
    let window = page_window(filtered_count, params.page, params.page_size);
    let windowed = matched[window].to_vec();

    debug!(
        "Query matched {} of {} records, page {} holds {}",
        filtered_count,
        records.len(),
        params.page,
        windowed.len()
    );

    QueryResult {
        windowed,
        filtered_count,
        total_pages: total_pages(filtered_count, params.page_size),
        page: params.page,
        page_size: params.page_size,
    }
}
