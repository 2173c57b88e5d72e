//! Order writes as data. Every mutation of the order collection is an
//! [`OrderCommand`] run through [`apply`], which either returns the complete
//! next collection or an error and leaves the input untouched.

use std::cmp::Reverse;

use storefront_core::dates::sort_timestamp;
use storefront_core::{Order, OrderStatus, TerminalTransitionPolicy, TimelineEntry};

use crate::error::OrderError;

#[derive(Debug, Clone, PartialEq)]
pub enum OrderCommand {
    Add(Order),
    /// Full replacement of the order with the same id.
    Update(Order),
    /// Status change; the timeline is replaced only when one is supplied.
    UpdateStatus {
        id: String,
        status: OrderStatus,
        timeline: Option<Vec<TimelineEntry>>,
    },
    Cancel {
        id: String,
    },
}

impl OrderCommand {
    /// Id of the order this command writes.
    #[must_use]
    pub fn order_id(&self) -> &str {
        match self {
            OrderCommand::Add(order) | OrderCommand::Update(order) => &order.id,
            OrderCommand::UpdateStatus { id, .. } | OrderCommand::Cancel { id } => id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            OrderCommand::Add(_) => "add",
            OrderCommand::Update(_) => "update",
            OrderCommand::UpdateStatus { .. } => "update_status",
            OrderCommand::Cancel { .. } => "cancel",
        }
    }
}

/// Applies `command` to `orders` and returns the next collection, newest
/// first.
///
/// # Errors
///
/// - [`OrderError::Validation`] if the written order breaks an order invariant.
/// - [`OrderError::DuplicateId`] when adding an id that already exists.
/// - [`OrderError::NotFound`] when updating or cancelling an unknown id.
/// - [`OrderError::InvalidTransition`] when leaving a terminal status under
///   [`TerminalTransitionPolicy::Reject`].
pub fn apply(
    orders: &[Order],
    command: OrderCommand,
    policy: TerminalTransitionPolicy,
) -> Result<Vec<Order>, OrderError> {
    let mut next = match command {
        OrderCommand::Add(order) => {
            order.validate()?;
            if orders.iter().any(|existing| existing.id == order.id) {
                return Err(OrderError::DuplicateId { id: order.id });
            }
            let mut next = Vec::with_capacity(orders.len() + 1);
            next.push(order);
            next.extend_from_slice(orders);
            next
        }
        OrderCommand::Update(order) => {
            order.validate()?;
            let index = position(orders, &order.id)?;
            check_transition(&orders[index], order.status, policy)?;
            replace_at(orders, index, order)
        }
        OrderCommand::UpdateStatus {
            id,
            status,
            timeline,
        } => set_status(orders, &id, status, timeline, policy)?,
        OrderCommand::Cancel { id } => {
            set_status(orders, &id, OrderStatus::Cancelled, None, policy)?
        }
    };

    sort_newest_first(&mut next);
    Ok(next)
}

/// Stable sort by placement date, newest first. Orders with an unparsable
/// date sink to the end in their current relative order.
pub fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by_key(|order| Reverse(sort_timestamp(Some(order.date.as_str()))));
}

fn position(orders: &[Order], id: &str) -> Result<usize, OrderError> {
    orders
        .iter()
        .position(|order| order.id == id)
        .ok_or_else(|| OrderError::NotFound { id: id.to_string() })
}

fn replace_at(orders: &[Order], index: usize, order: Order) -> Vec<Order> {
    let mut next = orders.to_vec();
    next[index] = order;
    next
}

fn set_status(
    orders: &[Order],
    id: &str,
    status: OrderStatus,
    timeline: Option<Vec<TimelineEntry>>,
    policy: TerminalTransitionPolicy,
) -> Result<Vec<Order>, OrderError> {
    let index = position(orders, id)?;
    check_transition(&orders[index], status, policy)?;

    let mut updated = orders[index].clone();
    updated.status = status;
    if let Some(timeline) = timeline {
        updated.timeline = timeline;
    }
    updated.validate()?;

    Ok(replace_at(orders, index, updated))
}

fn check_transition(
    current: &Order,
    to: OrderStatus,
    policy: TerminalTransitionPolicy,
) -> Result<(), OrderError> {
    let from = current.status;
    if from.can_transition_to(to) {
        return Ok(());
    }
    match policy {
        TerminalTransitionPolicy::Reject => Err(OrderError::InvalidTransition {
            id: current.id.clone(),
            from,
            to,
        }),
        TerminalTransitionPolicy::Warn => {
            tracing::warn!(
                order_id = %current.id,
                %from,
                %to,
                "moving order out of a terminal status"
            );
            Ok(())
        }
    }
}
