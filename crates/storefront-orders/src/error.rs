use std::path::PathBuf;

use storefront_core::{OrderStatus, ValidationError};
use thiserror::Error;

/// Failure reading or writing the persisted order collection.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("order file I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("order file {path} is not a valid order list: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize orders: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("order not found: {id}")]
    NotFound { id: String },

    #[error("order {id} already exists")]
    DuplicateId { id: String },

    #[error("order {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("order persistence failed: {0}")]
    Persistence(#[from] RepositoryError),
}
