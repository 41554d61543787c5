//! Order Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order lifecycle status.
///
/// Forward path: `pending → preparing → on-the-way → delivered`, with
/// `cancelled` reachable from any non-terminal state. The status
/// update API is an operational override for staff and deliberately
/// permissive: it does not reject off-path transitions, it only logs
/// them. [`OrderStatus::can_transition`] documents the forward path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "kebab-case"))]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OnTheWay,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OnTheWay => "on-the-way",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal states never progress further on the forward path.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Whether `next` lies on the normal fulfillment path from `self`.
    ///
    /// Setting the current status again counts as valid (idempotent
    /// updates must not fail).
    pub fn can_transition(&self, next: OrderStatus) -> bool {
        if *self == next {
            return true;
        }
        match (self, next) {
            (OrderStatus::Pending, OrderStatus::Preparing)
            | (OrderStatus::Preparing, OrderStatus::OnTheWay)
            | (OrderStatus::OnTheWay, OrderStatus::Delivered) => true,
            (current, OrderStatus::Cancelled) => !current.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing an order status from text
#[derive(Debug, thiserror::Error)]
#[error("invalid order status: {0}")]
pub struct ParseOrderStatusError(String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "on-the-way" => Ok(OrderStatus::OnTheWay),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(ParseOrderStatusError(other.to_string())),
        }
    }
}

/// Order line: a snapshot of `{product, name, price}` taken at
/// checkout time. Later catalog edits never change historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: i64,
    pub name: String,
    /// Unit price at order time
    pub price: f64,
    pub quantity: i64,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// Client-generated grouping key, not an identity proof
    pub user_id: String,
    #[cfg_attr(feature = "db", sqlx(skip))]
    pub items: Vec<OrderItem>,
    pub hostel_name: String,
    pub room_number: String,
    /// Always `Σ item.price × item.quantity`, computed server-side
    pub total_amount: f64,
    pub status: OrderStatus,
    /// Unix millis
    pub created_at: i64,
    pub updated_at: i64,
}

/// Cart line as submitted by the storefront.
///
/// Clients send `name` and `price` for display purposes but neither is
/// trusted: checkout re-reads both from the product table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Checkout payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub user_id: String,
    pub items: Vec<CartItem>,
    #[serde(default = "default_hostel")]
    pub hostel_name: String,
    pub room_number: String,
}

fn default_hostel() -> String {
    "Himalaya".to_string()
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}
