use thiserror::Error;

/// Errors raised while assembling [`crate::AppConfig`] or loading the catalog file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog YAML: {0}")]
    CatalogYaml(#[from] serde_yaml::Error),

    #[error("failed to parse catalog JSON: {0}")]
    CatalogJson(#[from] serde_json::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}

/// An order write that would break one of the order invariants.
///
/// Writes carrying any of these are rejected whole; nothing is partially applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("order id must be non-empty")]
    EmptyId,

    #[error("item {item_id} in order {order_id} has quantity {quantity}; must be at least 1")]
    ItemQuantity {
        order_id: String,
        item_id: String,
        quantity: u32,
    },

    #[error("order {order_id} field {field} must be a finite, non-negative amount (got {value})")]
    InvalidAmount {
        order_id: String,
        field: &'static str,
        value: f64,
    },

    #[error(
        "order {order_id} total {total} does not equal subtotal + shipping + tax ({expected})"
    )]
    TotalMismatch {
        order_id: String,
        total: f64,
        expected: f64,
    },
}
