use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Allowed drift between `total` and `subtotal + shipping + tax`.
pub const TOTAL_TOLERANCE: f64 = 0.01;

/// Order status. Serialized as its display string, e.g. `"Out for Delivery"`.
///
/// The happy path is linear, `Processing` through `Delivered`; `Cancelled`
/// and `Returned` are side exits. `Delivered`, `Cancelled` and `Returned`
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    Confirmed,
    Shipped,
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::Processing,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::InTransit,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Returned,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Returned => "Returned",
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Returned
        )
    }

    /// The next step on the happy path, or `None` past `Delivered` and for
    /// the side exits.
    #[must_use]
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Processing => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::InTransit),
            OrderStatus::InTransit => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Returned => None,
        }
    }

    /// Whether moving from `self` to `to` stays inside the state machine.
    ///
    /// Re-asserting the current status is always allowed. Nothing leaves a
    /// terminal status; any other move is accepted, since admins may pick
    /// any status from the dashboard.
    #[must_use]
    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        self == to || !self.is_terminal()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    /// Accepts the display form (`"In Transit"`) as well as kebab/snake
    /// spellings (`"in-transit"`, `"out_for_delivery"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().replace(' ', "").to_lowercase() == folded)
            .ok_or_else(|| format!("unknown order status: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Recipient, address and carrier details for an order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
}

/// One step of the customer-facing status history.
///
/// The timeline is maintained by whoever writes the order; it is not derived
/// from `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub status: OrderStatus,
    pub date: String,
    pub completed: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Placement date (ISO date or RFC 3339); orders list newest first by it.
    pub date: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
    pub shipping_info: ShippingInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    /// `subtotal + shipping + tax`.
    #[must_use]
    pub fn expected_total(&self) -> f64 {
        self.subtotal + self.shipping + self.tax
    }

    /// Sets `total` from the three components.
    pub fn recompute_total(&mut self) {
        self.total = self.expected_total();
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Checks every write-time invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found: empty id, an item with
    /// zero quantity, a negative or non-finite amount, or a `total` more than
    /// [`TOTAL_TOLERANCE`] away from `subtotal + shipping + tax`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }

        if let Some(item) = self.items.iter().find(|item| item.quantity < 1) {
            return Err(ValidationError::ItemQuantity {
                order_id: self.id.clone(),
                item_id: item.id.clone(),
                quantity: item.quantity,
            });
        }

        for (field, value) in [
            ("subtotal", self.subtotal),
            ("shipping", self.shipping),
            ("tax", self.tax),
            ("total", self.total),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidAmount {
                    order_id: self.id.clone(),
                    field,
                    value,
                });
            }
        }

        let expected = self.expected_total();
        if !within_tolerance(self.total, expected) {
            return Err(ValidationError::TotalMismatch {
                order_id: self.id.clone(),
                total: self.total,
                expected,
            });
        }

        Ok(())
    }
}

/// Compares in whole cents so a drift of exactly [`TOTAL_TOLERANCE`] is
/// accepted despite binary float error (`118.01 - 118.0 > 0.01`).
fn within_tolerance(total: f64, expected: f64) -> bool {
    let cents = |amount: f64| (amount * 100.0).round();
    (cents(total) - cents(expected)).abs() <= (TOTAL_TOLERANCE * 100.0).round()
}
