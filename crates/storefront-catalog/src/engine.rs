//! Query execution: filter, sort, then slice the cumulative page.

use serde::Serialize;
use storefront_core::{visible_categories, CatalogFile, Category, Product};

use crate::error::CatalogError;
use crate::filter::{
    matches_category, matches_price, matches_search, matches_subcategory_name, normalize_needle,
    resolve_subcategory_name,
};
use crate::pagination::{cumulative_page, PageRequest};
use crate::price::{observed_bounds, resolve_bounds, PriceBounds};
use crate::query::{QueryDescriptor, SortKey};
use crate::sort::sort_products;

/// Result of one listing query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutcome<'a> {
    /// The visible prefix of the filtered, sorted result.
    pub items: Vec<&'a Product>,
    /// Number of products matching the query across all pages.
    pub total: usize,
    pub has_more: bool,
    /// Price range of the selected category, for rendering a price slider.
    pub available_price: Option<PriceBounds>,
    /// Price range actually applied, if any.
    pub applied_price: Option<PriceBounds>,
}

/// Every product matching a query, sorted, before pagination.
#[derive(Debug, Clone)]
pub struct Filtered<'a> {
    pub items: Vec<&'a Product>,
    pub available_price: Option<PriceBounds>,
    pub applied_price: Option<PriceBounds>,
}

/// Filters and sorts `products` for `query`, without pagination.
///
/// Filters run in order: category, subcategory, search text, price.
///
/// # Errors
///
/// Returns [`CatalogError`] if the descriptor carries an invalid price bound.
pub fn filter_and_sort<'a>(
    products: &'a [Product],
    categories: &[Category],
    query: &QueryDescriptor,
) -> Result<Filtered<'a>, CatalogError> {
    query.validate()?;

    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|p| matches_category(p, &query.category))
        .collect();

    let available_price = observed_bounds(&matched);

    if let Some(sub_id) = query.effective_subcategory() {
        match resolve_subcategory_name(categories, &query.category, sub_id) {
            Some(name) => {
                let needle = normalize_needle(name);
                matched.retain(|p| matches_subcategory_name(p, &needle));
            }
            None => {
                tracing::debug!(
                    category = %query.category,
                    subcategory = %sub_id,
                    "subcategory not found; skipping subcategory filter"
                );
            }
        }
    }

    if let Some(search) = query.effective_search() {
        let needle = normalize_needle(search);
        matched.retain(|p| matches_search(p, &needle));
    }

    let applied_price = resolve_bounds(query.price_min, query.price_max, available_price);
    if let Some(bounds) = applied_price {
        matched.retain(|p| matches_price(p, bounds));
    }

    sort_products(&mut matched, &query.sort_by);

    Ok(Filtered {
        items: matched,
        available_price,
        applied_price,
    })
}

/// Runs `query` over `products` and returns the visible page.
///
/// # Errors
///
/// Returns [`CatalogError`] if the descriptor carries an invalid price bound.
pub fn run_query<'a>(
    products: &'a [Product],
    categories: &[Category],
    query: &QueryDescriptor,
    page: PageRequest,
) -> Result<QueryOutcome<'a>, CatalogError> {
    let Filtered {
        items: matched,
        available_price,
        applied_price,
    } = filter_and_sort(products, categories, query)?;

    let total = matched.len();
    let visible = cumulative_page(&matched, page).to_vec();

    tracing::debug!(
        category = %query.category,
        sort = %query.sort_by,
        total,
        visible = visible.len(),
        page = page.current_page(),
        "catalog query executed"
    );

    Ok(QueryOutcome {
        items: visible,
        total,
        has_more: page.has_more(total),
        available_price,
        applied_price,
    })
}

/// A loaded catalog: immutable products plus the category tree.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    #[must_use]
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories for display, with the `"all"` sentinel removed.
    #[must_use]
    pub fn visible_categories(&self) -> Vec<Category> {
        visible_categories(&self.categories)
    }

    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Featured products in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// New arrivals, newest first.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<&Product> {
        let mut items: Vec<&Product> = self.products.iter().filter(|p| p.is_new_arrival).collect();
        sort_products(&mut items, &SortKey::Newest);
        items
    }

    /// # Errors
    ///
    /// Returns [`CatalogError`] if the descriptor carries an invalid price bound.
    pub fn query(
        &self,
        query: &QueryDescriptor,
        page: PageRequest,
    ) -> Result<QueryOutcome<'_>, CatalogError> {
        run_query(&self.products, &self.categories, query, page)
    }
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        Self::new(file.products, file.categories)
    }
}
