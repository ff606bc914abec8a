//! Filtering and pagination of the unified sale list.
//!
//! Everything here is pure: state comes in as parameters and new state goes
//! out as return values.

mod filter;
mod page;
mod view;

pub use filter::{apply_filters, product_options, SaleFilter};
pub use page::{paginate, total_pages, Page, DEFAULT_PAGE_SIZE};
pub use view::SalesView;
