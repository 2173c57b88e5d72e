use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::products::{Category, Product};
use crate::ConfigError;

/// On-disk catalog: the category tree plus every product, loaded once at start-up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Yaml,
        }
    }
}

/// Load and validate the catalog from a YAML or JSON file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<CatalogFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_catalog(&content, CatalogFormat::from_path(path))
}

/// Parse and validate catalog content already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the content cannot be parsed or fails validation.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<CatalogFile, ConfigError> {
    let catalog: CatalogFile = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
    };

    validate_catalog(&catalog)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &CatalogFile) -> Result<(), ConfigError> {
    validate_categories(&catalog.categories)?;

    let mut seen_ids = HashSet::new();
    for product in &catalog.products {
        if product.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "product id must be non-empty".to_string(),
            ));
        }

        if product.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has an empty name",
                product.id
            )));
        }

        if !seen_ids.insert(product.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: '{}'",
                product.id
            )));
        }

        if !product.price.is_finite() || product.price < 0.0 {
            return Err(ConfigError::Validation(format!(
                "product '{}' has invalid price {}",
                product.id, product.price
            )));
        }

        if let Some(original) = product.original_price {
            if !original.is_finite() || original < product.price {
                return Err(ConfigError::Validation(format!(
                    "product '{}' has original price {} below price {}",
                    product.id, original, product.price
                )));
            }
        }

        if !(0.0..=5.0).contains(&product.rating) {
            return Err(ConfigError::Validation(format!(
                "product '{}' has rating {}; must be within 0..=5",
                product.id, product.rating
            )));
        }
    }

    Ok(())
}

fn validate_categories(categories: &[Category]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for category in categories {
        if !seen.insert(category.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category id: '{}'",
                category.id
            )));
        }

        let mut seen_sub = HashSet::new();
        for sub in &category.subcategories {
            if !sub.subcategories.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "subcategory '{}' of '{}' nests further; only one level is supported",
                    sub.id, category.id
                )));
            }
            if !seen_sub.insert(sub.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate subcategory id '{}' under '{}'",
                    sub.id, category.id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
