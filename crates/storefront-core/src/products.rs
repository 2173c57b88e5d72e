use serde::{Deserialize, Serialize};

/// Category id meaning "no category filter". Never rendered as a real category.
pub const ALL_CATEGORIES: &str = "all";

/// A catalog product, shaped exactly like the storefront's JSON records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Pre-discount price. When present it is never below `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Key of the owning [`Category`]. Not checked against the category list.
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    /// Average review score in `[0, 5]`.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub is_new_arrival: bool,
    /// ISO date or RFC 3339 timestamp; drives newest-first ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Returns `true` when the product carries an original price above its
    /// current price.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|orig| orig > self.price)
    }

    /// Percentage off the original price, rounded to the nearest whole percent.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price.filter(|orig| *orig > self.price)?;
        if original <= 0.0 {
            return None;
        }
        // Bounded to [0, 100] by the filter above.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = ((original - self.price) / original * 100.0).round() as u32;
        Some(pct)
    }

    /// The first image URL, used as the listing thumbnail.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A product category. Subcategories nest one level deep only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Declared product count. Display-only; never reconciled with the products.
    #[serde(default)]
    pub count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<Category>,
}

impl Category {
    /// Returns `true` for the `"all"` sentinel.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.id == ALL_CATEGORIES
    }

    /// Looks up a direct subcategory by id.
    #[must_use]
    pub fn subcategory(&self, id: &str) -> Option<&Category> {
        self.subcategories.iter().find(|sub| sub.id == id)
    }
}

/// Categories suitable for rendering: the `"all"` sentinel is dropped at both
/// nesting levels, original order is kept.
#[must_use]
pub fn visible_categories(categories: &[Category]) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| !c.is_sentinel())
        .map(|c| Category {
            subcategories: c
                .subcategories
                .iter()
                .filter(|sub| !sub.is_sentinel())
                .cloned()
                .collect(),
            ..c.clone()
        })
        .collect()
}

/// Finds a top-level category by id.
#[must_use]
pub fn find_category<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.id == id)
}
