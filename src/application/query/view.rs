//! Sales table view state.
//!
//! The selected filters and current page travel as one value. Transitions
//! return a new state; changing the filter always lands on page 1.

use serde::Serialize;

use super::filter::{apply_filters, SaleFilter};
use super::page::{paginate, total_pages, Page, DEFAULT_PAGE_SIZE};
use crate::domain::EnrichedSale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesView {
    pub filter: SaleFilter,
    pub page_number: usize,
    pub page_size: usize,
}

impl Default for SalesView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl SalesView {
    /// Unfiltered view on page 1.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            filter: SaleFilter {
                product_id: None,
                start_date: None,
                end_date: None,
            },
            page_number: 1,
            page_size,
        }
    }

    /// Replace the filter and go back to page 1.
    #[must_use]
    pub const fn with_filter(self, filter: SaleFilter) -> Self {
        Self {
            filter,
            page_number: 1,
            ..self
        }
    }

    /// Move to `page_number` (page 0 is treated as page 1).
    #[must_use]
    pub fn with_page(self, page_number: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            ..self
        }
    }

    /// Move to the next page, stopping at the last page of `sales`.
    #[must_use]
    pub fn next_page(self, sales: &[EnrichedSale]) -> Self {
        let filtered = apply_filters(sales, &self.filter).len();
        let last = total_pages(filtered, self.page_size);
        self.with_page(self.page_number.saturating_add(1).min(last))
    }

    /// Move to the previous page, stopping at page 1.
    #[must_use]
    pub fn previous_page(self) -> Self {
        self.with_page(self.page_number.saturating_sub(1))
    }

    /// Filter `sales` and cut out the current page.
    #[must_use]
    pub fn render(&self, sales: &[EnrichedSale]) -> Page<EnrichedSale> {
        let filtered = apply_filters(sales, &self.filter);
        paginate(&filtered, self.page_size, self.page_number)
    }
}
