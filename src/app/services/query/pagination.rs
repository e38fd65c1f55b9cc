//! Page arithmetic (1-indexed pages)

use std::ops::Range;

/// Number of pages needed for `count` items; 0 when there are none
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Index range of `page` within `len` items, clipped; empty when out of range
pub fn page_window(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let Some(page_index) = page.checked_sub(1) else {
        return 0..0;
    };

    let start = page_index.saturating_mul(page_size);
    if start >= len {
        return len..len;
    }
    let end = start.saturating_add(page_size).min(len);
    start..end
}
