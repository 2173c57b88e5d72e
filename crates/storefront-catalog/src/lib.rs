//! Catalog query engine: filters, sorts and paginates an in-memory product
//! collection for listing and category pages.

pub mod engine;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod price;
pub mod query;
pub mod sort;

pub use engine::{filter_and_sort, run_query, Catalog, Filtered, QueryOutcome};
pub use error::CatalogError;
pub use pagination::{cumulative_page, PageRequest, Pager};
pub use price::PriceBounds;
pub use query::{QueryDescriptor, QueryParams, SortKey};
pub use sort::sort_products;
