use storefront_core::{AppConfig, Order, OrderStatus, TerminalTransitionPolicy, TimelineEntry};

use crate::command::{apply, sort_newest_first, OrderCommand};
use crate::error::OrderError;
use crate::repository::OrderRepository;

const DEFAULT_RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// How many orders [`OrderStore::recent_orders`] returns.
    pub recent_limit: usize,
    pub terminal_policy: TerminalTransitionPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            terminal_policy: TerminalTransitionPolicy::default(),
        }
    }
}

impl From<&AppConfig> for StoreConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            recent_limit: config.recent_orders,
            terminal_policy: config.terminal_policy,
        }
    }
}

/// The order collection, kept newest first and written through to `R` on
/// every accepted change.
///
/// Writes are all-or-nothing: a command that fails validation, or whose save
/// fails, leaves both the in-memory collection and the repository as they
/// were.
#[derive(Debug)]
pub struct OrderStore<R> {
    repository: R,
    config: StoreConfig,
    orders: Vec<Order>,
}

impl<R: OrderRepository> OrderStore<R> {
    /// An empty store. Call [`OrderStore::load_orders`] to read the
    /// repository.
    #[must_use]
    pub fn new(repository: R, config: StoreConfig) -> Self {
        Self {
            repository,
            config,
            orders: Vec::new(),
        }
    }

    /// Builds a store and loads it from `repository`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Persistence`] if the repository cannot be read.
    pub fn open(repository: R, config: StoreConfig) -> Result<Self, OrderError> {
        let mut store = Self::new(repository, config);
        store.load_orders()?;
        Ok(store)
    }

    /// Re-reads the repository and replaces the in-memory collection with it,
    /// newest first. Loading twice yields the same state.
    ///
    /// Stored orders that break an order invariant are kept but logged; they
    /// cannot be written back until corrected.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Persistence`] if the repository cannot be read.
    pub fn load_orders(&mut self) -> Result<&[Order], OrderError> {
        let mut orders = self.repository.load()?;
        sort_newest_first(&mut orders);

        for order in &orders {
            if let Err(e) = order.validate() {
                tracing::warn!(order_id = %order.id, error = %e, "stored order fails validation");
            }
        }

        tracing::info!(count = orders.len(), "orders loaded");
        self.orders = orders;
        Ok(&self.orders)
    }

    /// Runs `command` against the collection and persists the result.
    ///
    /// # Errors
    ///
    /// Returns whatever [`apply`] rejects the command with, or
    /// [`OrderError::Persistence`] if the save fails.
    pub fn dispatch(&mut self, command: OrderCommand) -> Result<(), OrderError> {
        let kind = command.kind();
        let order_id = command.order_id().to_string();

        let next = match apply(&self.orders, command, self.config.terminal_policy) {
            Ok(next) => next,
            Err(e) => {
                tracing::debug!(command = kind, %order_id, error = %e, "order write rejected");
                return Err(e);
            }
        };
        self.repository.save(&next)?;
        self.orders = next;

        tracing::info!(
            command = kind,
            %order_id,
            total_orders = self.orders.len(),
            "order write applied"
        );
        Ok(())
    }

    /// # Errors
    ///
    /// See [`OrderStore::dispatch`]; an existing id is
    /// [`OrderError::DuplicateId`].
    pub fn add_order(&mut self, order: Order) -> Result<(), OrderError> {
        self.dispatch(OrderCommand::Add(order))
    }

    /// Replaces the stored order that has `order.id`.
    ///
    /// # Errors
    ///
    /// See [`OrderStore::dispatch`].
    pub fn update_order(&mut self, order: Order) -> Result<(), OrderError> {
        self.dispatch(OrderCommand::Update(order))
    }

    /// # Errors
    ///
    /// See [`OrderStore::dispatch`].
    pub fn update_order_status(
        &mut self,
        id: &str,
        status: OrderStatus,
        timeline: Option<Vec<TimelineEntry>>,
    ) -> Result<(), OrderError> {
        self.dispatch(OrderCommand::UpdateStatus {
            id: id.to_string(),
            status,
            timeline,
        })
    }

    /// # Errors
    ///
    /// See [`OrderStore::dispatch`].
    pub fn cancel_order(&mut self, id: &str) -> Result<(), OrderError> {
        self.dispatch(OrderCommand::Cancel { id: id.to_string() })
    }

    #[must_use]
    pub fn get_order_by_id(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    #[must_use]
    pub fn get_orders_by_status(&self, status: OrderStatus) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.status == status)
            .collect()
    }

    /// Every order, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The newest orders, up to the configured limit.
    #[must_use]
    pub fn recent_orders(&self) -> &[Order] {
        let end = self.config.recent_limit.min(self.orders.len());
        &self.orders[..end]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Order count per status, in lifecycle order, zeros included.
    #[must_use]
    pub fn status_counts(&self) -> Vec<(OrderStatus, usize)> {
        OrderStatus::ALL
            .into_iter()
            .map(|status| {
                let count = self.orders.iter().filter(|o| o.status == status).count();
                (status, count)
            })
            .collect()
    }

    /// The next free id of the form `ORD-<year>-<seq>` for `year`.
    #[must_use]
    pub fn next_order_id(&self, year: i32) -> String {
        next_order_id(&self.orders, year)
    }

    #[must_use]
    pub fn config(&self) -> StoreConfig {
        self.config
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

/// `ORD-<year>-<seq>` with `seq` one past the highest sequence already used
/// for `year`, zero-padded to three digits. Ids in any other shape are
/// ignored.
#[must_use]
pub fn next_order_id(orders: &[Order], year: i32) -> String {
    let prefix = format!("ORD-{year}-");
    let highest = orders
        .iter()
        .filter_map(|order| order.id.strip_prefix(&prefix))
        .filter_map(|seq| seq.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:03}", highest.saturating_add(1))
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
