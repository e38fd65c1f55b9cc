//! Filter, sort and paginate queries over the fleet list
//!
//! The engine is stateless: every call takes the full record slice and an
//! immutable [`QueryParams`] and returns a fresh [`QueryResult`] borrowing
//! the matching records. The caller owns the parameters and threads them
//! between calls; the `with_*` builders reset the page to 1 whenever the
//! filters, sort or page size change.

pub mod engine;
pub mod filter;
pub mod pagination;
pub mod sort;

#[cfg(test)]
pub mod tests;

pub use engine::{QueryParams, QueryResult, query};
pub use filter::{FilterOptions, FleetFilters, distinct_values};
pub use pagination::{page_window, total_pages};
pub use sort::{RecordSort, RecordSortField};
