//! Two-dimensional count pivot (e.g. depot x service type)
//!
//! [`build_pivot`] makes a single pass over the records and produces a
//! [`PivotTable`] with cell, row, column and grand totals. Column keys are
//! exposed in ascending code-point order so renders with the same data keep
//! a stable column layout. Row order is chosen by the consumer through a
//! [`PivotSort`].

pub mod builder;
pub mod sort;

#[cfg(test)]
pub mod tests;

pub use builder::{PivotRow, PivotTable, PivotView, PivotViewRow, build_pivot};
pub use sort::{PivotSort, PivotSortField};
