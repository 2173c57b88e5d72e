//! Cumulative ("load more") pagination.
//!
//! Page `n` shows the first `n * items_per_page` results rather than the
//! `n`th window, so every page is a prefix of the next one:
//!
//! ```text
//! items_per_page = 3, total = 7
//! page 1 -> [0, 1, 2]
//! page 2 -> [0, 1, 2, 3, 4, 5]
//! page 3 -> [0, 1, 2, 3, 4, 5, 6]
//! ```

use crate::error::CatalogError;
use crate::query::QueryDescriptor;

/// A validated page size and 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    items_per_page: usize,
    current_page: usize,
}

impl PageRequest {
    /// # Errors
    ///
    /// Returns [`CatalogError::ZeroPageSize`] or [`CatalogError::ZeroPage`]
    /// when either value is zero.
    pub fn new(items_per_page: usize, current_page: usize) -> Result<Self, CatalogError> {
        if items_per_page == 0 {
            return Err(CatalogError::ZeroPageSize);
        }
        if current_page == 0 {
            return Err(CatalogError::ZeroPage);
        }
        Ok(Self {
            items_per_page,
            current_page,
        })
    }

    /// The first page at the given size.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ZeroPageSize`] when `items_per_page` is zero.
    pub fn first(items_per_page: usize) -> Result<Self, CatalogError> {
        Self::new(items_per_page, 1)
    }

    #[must_use]
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of items visible out of `total`.
    #[must_use]
    pub fn visible_len(&self, total: usize) -> usize {
        self.current_page
            .saturating_mul(self.items_per_page)
            .min(total)
    }

    /// Whether results remain beyond the visible prefix.
    #[must_use]
    pub fn has_more(&self, total: usize) -> bool {
        self.visible_len(total) < total
    }
}

/// Returns the visible prefix of `items` for `request`.
#[must_use]
pub fn cumulative_page<T>(items: &[T], request: PageRequest) -> &[T] {
    &items[..request.visible_len(items.len())]
}

/// Tracks the page of a listing as its query and page size change.
///
/// Any change to the query or the page size resets to page 1.
#[derive(Debug, Clone)]
pub struct Pager {
    query: QueryDescriptor,
    request: PageRequest,
}

impl Pager {
    /// # Errors
    ///
    /// Returns [`CatalogError::ZeroPageSize`] when `items_per_page` is zero.
    pub fn new(query: QueryDescriptor, items_per_page: usize) -> Result<Self, CatalogError> {
        Ok(Self {
            query,
            request: PageRequest::first(items_per_page)?,
        })
    }

    #[must_use]
    pub fn query(&self) -> &QueryDescriptor {
        &self.query
    }

    #[must_use]
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Replaces the query. Returns `true` if it differed and the page was reset.
    pub fn set_query(&mut self, query: QueryDescriptor) -> bool {
        if query == self.query {
            return false;
        }
        self.query = query;
        self.request.current_page = 1;
        true
    }

    /// Changes the page size and resets to page 1.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ZeroPageSize`] when `items_per_page` is zero;
    /// the pager is left unchanged.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<(), CatalogError> {
        self.request = PageRequest::first(items_per_page)?;
        Ok(())
    }

    /// Advances one page if results remain past the current prefix.
    ///
    /// Returns `true` if the page advanced.
    pub fn load_more(&mut self, total: usize) -> bool {
        if !self.request.has_more(total) {
            return false;
        }
        self.request.current_page += 1;
        true
    }
}
