use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("invalid {field} \"{value}\": {reason}")]
    InvalidParam {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid price bound {field}: {value} (must be finite and non-negative)")]
    InvalidPriceBound { field: &'static str, value: f64 },

    #[error("items per page must be at least 1")]
    ZeroPageSize,

    #[error("page numbers start at 1")]
    ZeroPage,
}
