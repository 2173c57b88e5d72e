use std::path::Path;

use storefront_core::{Order, OrderStatus};

use super::FileStore;

/// # Errors
///
/// Returns an error if the order is unknown, the move is not allowed, or the
/// save fails.
pub(crate) fn run_orders_status(
    store: &mut FileStore,
    id: &str,
    status: OrderStatus,
) -> anyhow::Result<()> {
    store.update_order_status(id, status, None)?;
    println!("order {id} is now {status}");
    Ok(())
}

/// # Errors
///
/// Returns an error if the order is unknown, already terminal, or the save
/// fails.
pub(crate) fn run_orders_cancel(store: &mut FileStore, id: &str) -> anyhow::Result<()> {
    store.cancel_order(id)?;
    println!("order {id} cancelled");
    Ok(())
}

/// Read a single order from a JSON file and add it to the store.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the order is
/// rejected.
pub(crate) fn run_orders_add(store: &mut FileStore, path: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let order: Order = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("{} is not a valid order: {e}", path.display()))?;

    let id = order.id.clone();
    store.add_order(order)?;
    println!("added order {id} ({} orders total)", store.len());
    Ok(())
}
