use std::sync::Arc;

use parking_lot::Mutex;
use storefront_core::{Order, OrderStatus};

use crate::command::OrderCommand;
use crate::error::OrderError;
use crate::repository::OrderRepository;
use crate::store::OrderStore;

/// A cloneable handle to one [`OrderStore`] shared across threads.
///
/// Commands are applied one at a time under the lock, each against the
/// result of the previous, so concurrent writers never lose each other's
/// updates. Reads return owned copies.
pub struct SharedOrderStore<R> {
    inner: Arc<Mutex<OrderStore<R>>>,
}

impl<R> Clone for SharedOrderStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: OrderRepository> SharedOrderStore<R> {
    #[must_use]
    pub fn new(store: OrderStore<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// # Errors
    ///
    /// See [`OrderStore::dispatch`].
    pub fn dispatch(&self, command: OrderCommand) -> Result<(), OrderError> {
        self.inner.lock().dispatch(command)
    }

    /// # Errors
    ///
    /// See [`OrderStore::load_orders`].
    pub fn reload(&self) -> Result<usize, OrderError> {
        let mut store = self.inner.lock();
        store.load_orders()?;
        Ok(store.len())
    }

    #[must_use]
    pub fn get_order_by_id(&self, id: &str) -> Option<Order> {
        self.inner.lock().get_order_by_id(id).cloned()
    }

    #[must_use]
    pub fn get_orders_by_status(&self, status: OrderStatus) -> Vec<Order> {
        self.inner
            .lock()
            .get_orders_by_status(status)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn recent_orders(&self) -> Vec<Order> {
        self.inner.lock().recent_orders().to_vec()
    }

    /// Runs `f` with the store locked. Keep `f` short; every other caller
    /// waits on it.
    pub fn with_store<T>(&self, f: impl FnOnce(&OrderStore<R>) -> T) -> T {
        f(&*self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;
    use crate::store::StoreConfig;
    use crate::test_support::order;

    fn shared(orders: Vec<Order>) -> SharedOrderStore<MemoryRepository> {
        let store =
            OrderStore::open(MemoryRepository::seeded(orders), StoreConfig::default()).unwrap();
        SharedOrderStore::new(store)
    }

    #[test]
    fn concurrent_writers_do_not_lose_updates() {
        let orders: Vec<Order> = (1..=8)
            .map(|n| {
                order(
                    &format!("ORD-2024-{n:03}"),
                    &format!("2024-05-{n:02}"),
                    OrderStatus::Processing,
                )
            })
            .collect();
        let handle = shared(orders);

        std::thread::scope(|scope| {
            for n in 1..=8 {
                let handle = handle.clone();
                scope.spawn(move || {
                    handle
                        .dispatch(OrderCommand::UpdateStatus {
                            id: format!("ORD-2024-{n:03}"),
                            status: OrderStatus::Shipped,
                            timeline: None,
                        })
                        .unwrap();
                });
            }
        });

        assert_eq!(handle.get_orders_by_status(OrderStatus::Shipped).len(), 8);
        assert_eq!(handle.with_store(|s| s.repository().save_count()), 8);
    }

    #[test]
    fn clones_share_state() {
        let handle = shared(vec![]);
        let other = handle.clone();
        other
            .dispatch(OrderCommand::Add(order(
                "ORD-2024-001",
                "2024-05-01",
                OrderStatus::Processing,
            )))
            .unwrap();

        assert!(handle.get_order_by_id("ORD-2024-001").is_some());
        assert_eq!(handle.recent_orders().len(), 1);
        assert_eq!(handle.reload().unwrap(), 1);
    }
}
