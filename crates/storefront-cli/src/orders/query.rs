use chrono::{Datelike, Utc};
use storefront_core::{Order, OrderStatus};

use super::{fmt_date, fmt_money, FileStore};

fn print_table(orders: &[&Order]) {
    let header = format!(
        "{:<15}{:<12}{:<18}{:>6}{:>11}  CUSTOMER",
        "ID", "DATE", "STATUS", "ITEMS", "TOTAL"
    );
    println!("{header}");
    for order in orders {
        println!(
            "{:<15}{:<12}{:<18}{:>6}{:>11}  {}",
            order.id,
            fmt_date(&order.date),
            order.status,
            order.item_count(),
            fmt_money(order.total),
            order.customer.name
        );
    }
}

/// List every order, or only those in `status`.
pub(crate) fn run_orders_list(store: &FileStore, status: Option<OrderStatus>) {
    let orders: Vec<&Order> = match status {
        Some(status) => store.get_orders_by_status(status),
        None => store.orders().iter().collect(),
    };

    if orders.is_empty() {
        println!(
            "no orders found{}",
            status.map(|s| format!(" with status {s}")).unwrap_or_default()
        );
        return;
    }
    print_table(&orders);
}

pub(crate) fn run_orders_recent(store: &FileStore) {
    let recent: Vec<&Order> = store.recent_orders().iter().collect();
    if recent.is_empty() {
        println!("no orders yet");
        return;
    }
    print_table(&recent);
}

/// Print one order with items, totals, shipping and timeline.
///
/// # Errors
///
/// Returns an error if no order has `id`.
pub(crate) fn run_orders_show(store: &FileStore, id: &str) -> anyhow::Result<()> {
    let order = store
        .get_order_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("order '{id}' not found"))?;

    println!("Order {} ({})", order.id, order.status);
    println!("Placed: {}", fmt_date(&order.date));
    println!("Customer: {} <{}>", order.customer.name, order.customer.email);
    if let Some(payment) = &order.payment_method {
        println!("Payment: {payment}");
    }
    println!();

    for item in &order.items {
        let variant: Vec<&str> = [item.selected_size.as_deref(), item.selected_color.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        println!(
            "  {} x{} @ {}{}",
            item.name,
            item.quantity,
            fmt_money(item.price),
            if variant.is_empty() {
                String::new()
            } else {
                format!(" ({})", variant.join(", "))
            }
        );
    }
    println!();
    println!("Subtotal: {:>10}", fmt_money(order.subtotal));
    println!("Shipping: {:>10}", fmt_money(order.shipping));
    println!("Tax:      {:>10}", fmt_money(order.tax));
    println!("Total:    {:>10}", fmt_money(order.total));

    let ship = &order.shipping_info;
    println!();
    println!("Ship to: {}, {}, {} {}", ship.name, ship.address, ship.city, ship.postal_code);
    print!("Method: {}", ship.method);
    if let Some(tracking) = &ship.tracking_number {
        print!(
            " ({} {tracking})",
            ship.carrier.as_deref().unwrap_or("tracking")
        );
    }
    println!();

    if !order.timeline.is_empty() {
        println!();
        for step in &order.timeline {
            let mark = if step.completed { "x" } else { " " };
            println!(
                "[{mark}] {:<12}{:<18}{}",
                fmt_date(&step.date),
                step.status,
                step.description
            );
        }
    }
    if let Some(notes) = &order.notes {
        println!();
        println!("Notes: {notes}");
    }

    Ok(())
}

/// Order counts per status, skipping statuses with none.
pub(crate) fn run_orders_summary(store: &FileStore) {
    println!("{:<18}{:>6}", "STATUS", "COUNT");
    for (status, count) in store.status_counts() {
        if count > 0 {
            println!("{:<18}{count:>6}", status.as_str());
        }
    }
    println!("{:<18}{:>6}", "total", store.len());
}

pub(crate) fn run_orders_next_id(store: &FileStore, year: Option<i32>) {
    let year = year.unwrap_or_else(|| Utc::now().year());
    println!("{}", store.next_order_id(year));
}
