//! Per-product predicates. All text matching is case-insensitive substring
//! matching; callers pass needles already lowercased.

use storefront_core::{find_category, Category, Product, ALL_CATEGORIES};

use crate::price::PriceBounds;

/// Lowercases a needle once so predicates can compare against it repeatedly.
#[must_use]
pub fn normalize_needle(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[must_use]
pub fn matches_category(product: &Product, category: &str) -> bool {
    category == ALL_CATEGORIES || product.category == category
}

/// Subcategory membership by display name appearing in the product's name or
/// description. This is a text heuristic, not a key lookup: a product whose
/// `subCategory` says `"chairs"` but whose copy never mentions "chair" is
/// excluded, and the reverse is included.
#[must_use]
pub fn matches_subcategory_name(product: &Product, needle: &str) -> bool {
    contains_folded(&product.name, needle) || contains_folded(&product.description, needle)
}

/// Free-text search over name, description, category, tags and features.
#[must_use]
pub fn matches_search(product: &Product, needle: &str) -> bool {
    contains_folded(&product.name, needle)
        || contains_folded(&product.description, needle)
        || contains_folded(&product.category, needle)
        || product.tags.iter().any(|tag| contains_folded(tag, needle))
        || product
            .features
            .iter()
            .any(|feature| contains_folded(feature, needle))
}

#[must_use]
pub fn matches_price(product: &Product, bounds: PriceBounds) -> bool {
    bounds.contains(product.price)
}

/// Resolves a subcategory id to the display name used for matching.
///
/// Looks under `category` when it names a real category, otherwise across
/// every category. Returns `None` when the id matches nothing.
#[must_use]
pub fn resolve_subcategory_name<'a>(
    categories: &'a [Category],
    category: &str,
    subcategory: &str,
) -> Option<&'a str> {
    let sub = if category == ALL_CATEGORIES {
        categories
            .iter()
            .find_map(|parent| parent.subcategory(subcategory))
    } else {
        find_category(categories, category)?.subcategory(subcategory)
    };
    sub.map(|sub| sub.name.as_str())
}
