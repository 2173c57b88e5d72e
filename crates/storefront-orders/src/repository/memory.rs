use storefront_core::Order;

use super::OrderRepository;
use crate::error::RepositoryError;

/// In-process storage; contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    orders: Vec<Order>,
    saves: usize,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `orders` already stored.
    #[must_use]
    pub fn seeded(orders: Vec<Order>) -> Self {
        Self { orders, saves: 0 }
    }

    #[must_use]
    pub fn stored(&self) -> &[Order] {
        &self.orders
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl OrderRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.orders.clone())
    }

    fn save(&mut self, orders: &[Order]) -> Result<(), RepositoryError> {
        self.orders = orders.to_vec();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::order;
    use storefront_core::OrderStatus;

    #[test]
    fn new_repository_is_empty() {
        let repo = MemoryRepository::new();
        assert!(repo.load().unwrap().is_empty());
        assert_eq!(repo.save_count(), 0);
    }

    #[test]
    fn save_replaces_contents() {
        let mut repo =
            MemoryRepository::seeded(vec![order("A", "2024-01-01", OrderStatus::Processing)]);
        repo.save(&[order("B", "2024-01-02", OrderStatus::Confirmed)])
            .unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "B");
        assert_eq!(repo.save_count(), 1);
    }
}
