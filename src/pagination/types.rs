//! Pagination types and arithmetic

use std::ops::Range;

/// A 1-based page number
pub type PageNumber = usize;

/// The page a freshly mounted component shows
pub const FIRST_PAGE: PageNumber = 1;

/// Number of pages needed to show `count` records, `size` per page
///
/// `ceil(count / size)`; zero records (or a zero page size) means zero pages.
pub fn total_pages(count: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    count.div_ceil(size)
}

/// Ordered page numbers `1..=total_pages(count, size)`
pub fn page_numbers(count: usize, size: usize) -> Vec<PageNumber> {
    (FIRST_PAGE..=total_pages(count, size)).collect()
}

/// Index range of `page` within a collection of `count` records
///
/// Always a valid sub-range of `0..count`. Page `0` and pages past the end
/// produce an empty range rather than wrapping or clamping.
pub fn page_bounds(count: usize, page: PageNumber, size: usize) -> Range<usize> {
    if page == 0 || size == 0 {
        return 0..0;
    }

    let start = (page - 1).saturating_mul(size).min(count);
    let end = page.saturating_mul(size).min(count);
    start..end
}
