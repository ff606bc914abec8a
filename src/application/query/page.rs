//! Fixed-size, 1-indexed pagination.

use serde::Serialize;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// One page of a larger list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page number that was served.
    pub page_number: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

/// `ceil(count / page_size)`, never less than one.
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Slice `items` into the requested page.
///
/// Page 0 is served as page 1. A page past the end, or any page of an empty
/// list, is an empty page rather than an error. A zero page size yields an
/// empty page.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page_number: usize) -> Page<T> {
    let page_number = page_number.max(1);
    let start = (page_number - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        page_number,
        page_size,
        total_items: items.len(),
        total_pages: total_pages(items.len(), page_size),
    }
}
