//! Result paging.
//!
//! Pagination state is passed in explicitly and a borrowed slice comes
//! back out; nothing here owns or mutates the result set.

use serde::Serialize;

/// Default number of results shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One page of a result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    /// The entries on this page, in result-set order.
    pub items: &'a [T],
    /// 1-based page number after clamping.
    pub number: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
    /// Total number of entries across all pages.
    pub total: usize,
    /// 1-based index of the first entry shown, 0 when the set is empty.
    pub start: usize,
    /// 1-based index of the last entry shown, 0 when the set is empty.
    pub end: usize,
}

/// Slice `items` into fixed-size pages and return the requested one.
///
/// `page` is 1-based; values past the last page clamp to the last page, and
/// 0 clamps to the first. A zero `page_size` is treated as 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let number = page.clamp(1, total_pages);

    let start_index = (number - 1) * page_size;
    let end_index = (start_index + page_size).min(total);
    let items = &items[start_index.min(total)..end_index];

    Page {
        items,
        number,
        total_pages,
        total,
        start: if items.is_empty() { 0 } else { start_index + 1 },
        end: end_index,
    }
}
