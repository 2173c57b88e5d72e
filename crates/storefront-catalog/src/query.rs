//! The query descriptor a listing page sends to the engine, and the raw
//! string parameters it is parsed from.

use serde::{Deserialize, Serialize};
use storefront_core::ALL_CATEGORIES;

use crate::error::CatalogError;
use crate::pagination::PageRequest;

/// Ordering applied after filtering.
///
/// Keys the engine does not know are carried through as
/// [`SortKey::Unrecognized`] and leave the input order untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Featured products first; otherwise input order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
    Name,
    Unrecognized(String),
}

impl SortKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
            SortKey::Name => "name",
            SortKey::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for SortKey {
    fn from(raw: &str) -> Self {
        match raw {
            "featured" => SortKey::Featured,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            "newest" => SortKey::Newest,
            "name" => SortKey::Name,
            other => SortKey::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for SortKey {
    fn from(raw: String) -> Self {
        SortKey::from(raw.as_str())
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter and sort parameters for one product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescriptor {
    /// `"all"` or a category id.
    #[serde(default = "default_category")]
    pub category: String,
    /// Subcategory id under `category`; `"all"` or absent disables it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(default)]
    pub sort_by: SortKey,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl Default for QueryDescriptor {
    fn default() -> Self {
        Self {
            category: default_category(),
            subcategory: None,
            search_text: None,
            price_min: None,
            price_max: None,
            sort_by: SortKey::default(),
        }
    }
}

impl QueryDescriptor {
    #[must_use]
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_by = key;
        self
    }

    /// Rejects price bounds that are negative or not finite.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPriceBound`] naming the offending bound.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (field, bound) in [("priceMin", self.price_min), ("priceMax", self.price_max)] {
            if let Some(value) = bound {
                if !value.is_finite() || value < 0.0 {
                    return Err(CatalogError::InvalidPriceBound { field, value });
                }
            }
        }
        Ok(())
    }

    /// Trimmed search text, or `None` when it is absent or blank.
    #[must_use]
    pub fn effective_search(&self) -> Option<&str> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Subcategory id, or `None` when absent or the `"all"` sentinel.
    #[must_use]
    pub fn effective_subcategory(&self) -> Option<&str> {
        self.subcategory
            .as_deref()
            .filter(|s| !s.is_empty() && *s != ALL_CATEGORIES)
    }
}

/// Untyped listing parameters, as they arrive from a URL query string or
/// command line. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort: Option<String>,
    pub per_page: Option<String>,
    pub page: Option<String>,
}

impl QueryParams {
    /// Parses the raw parameters into a validated descriptor and page request.
    ///
    /// Nothing is applied unless every parameter is valid.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for a non-numeric, negative or non-finite
    /// price bound, or a page size / page number that is not a positive integer.
    pub fn parse(
        &self,
        default_items_per_page: usize,
    ) -> Result<(QueryDescriptor, PageRequest), CatalogError> {
        let price_min = parse_price("minPrice", self.min_price.as_deref())?;
        let price_max = parse_price("maxPrice", self.max_price.as_deref())?;

        let items_per_page =
            parse_count("perPage", self.per_page.as_deref())?.unwrap_or(default_items_per_page);
        let current_page = parse_count("page", self.page.as_deref())?.unwrap_or(1);

        let descriptor = QueryDescriptor {
            category: self
                .category
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map_or_else(default_category, str::to_string),
            subcategory: self.subcategory.clone(),
            search_text: self.search.clone(),
            price_min,
            price_max,
            sort_by: self
                .sort
                .as_deref()
                .map(str::trim)
                .map(SortKey::from)
                .unwrap_or_default(),
        };
        descriptor.validate()?;

        let page = PageRequest::new(items_per_page, current_page)?;
        Ok((descriptor, page))
    }
}

fn parse_price(field: &'static str, raw: Option<&str>) -> Result<Option<f64>, CatalogError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let value = raw
        .parse::<f64>()
        .map_err(|e| CatalogError::InvalidParam {
            field,
            value: raw.to_string(),
            reason: e.to_string(),
        })?;
    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::InvalidPriceBound { field, value });
    }
    Ok(Some(value))
}

fn parse_count(field: &'static str, raw: Option<&str>) -> Result<Option<usize>, CatalogError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<usize>()
        .map(Some)
        .map_err(|e| CatalogError::InvalidParam {
            field,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
