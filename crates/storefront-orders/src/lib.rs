//! Order lifecycle store: the order collection, its write commands, and the
//! repositories it persists through.

pub mod command;
pub mod error;
pub mod repository;
pub mod shared;
pub mod store;

#[cfg(test)]
mod test_support;

pub use command::{apply, sort_newest_first, OrderCommand};
pub use error::{OrderError, RepositoryError};
pub use repository::{JsonFileRepository, MemoryRepository, OrderRepository};
pub use shared::SharedOrderStore;
pub use store::{next_order_id, OrderStore, StoreConfig};
