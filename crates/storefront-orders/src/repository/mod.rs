//! Where the order collection lives between runs.

mod json_file;
mod memory;

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;

use storefront_core::Order;

use crate::error::RepositoryError;

/// Storage for the whole order collection. The store reads it once on load
/// and writes the complete collection after every accepted command.
pub trait OrderRepository {
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the stored collection cannot be read
    /// or decoded.
    fn load(&self) -> Result<Vec<Order>, RepositoryError>;

    /// Replaces the stored collection with `orders`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the collection cannot be written. The
    /// previously stored collection must survive a failed save.
    fn save(&mut self, orders: &[Order]) -> Result<(), RepositoryError>;
}

impl<R: OrderRepository + ?Sized> OrderRepository for Box<R> {
    fn load(&self) -> Result<Vec<Order>, RepositoryError> {
        (**self).load()
    }

    fn save(&mut self, orders: &[Order]) -> Result<(), RepositoryError> {
        (**self).save(orders)
    }
}
