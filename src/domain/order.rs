use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle states of a water-bottle order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed by the customer, not yet assigned to a supplier.
    Pending,
    /// A supplier has been assigned for fulfillment.
    Assigned,
    /// The linked delivery was completed.
    Delivered,
    /// Cancelled by the customer or an administrator.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value {
            "assigned" => Self::Assigned,
            "delivered" => Self::Delivered,
            "cancelled" => Self::Cancelled,
            _ => Self::Pending,
        }
    }
}

/// Domain representation of a customer's water-bottle purchase.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    pub id: i32,
    /// Customer who placed the order.
    pub customer_id: i32,
    /// Supplier assigned for fulfillment, if any.
    pub supplier_id: Option<i32>,
    /// Number of bottles ordered.
    pub quantity: i32,
    pub status: OrderStatus,
    /// Delivery address captured at order time.
    pub address: String,
    pub notes: Option<String>,
    /// Requested delivery date.
    pub delivery_date: NaiveDateTime,
    /// When the order was placed.
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: i32,
    pub quantity: i32,
    pub address: String,
    pub notes: Option<String>,
    pub delivery_date: NaiveDateTime,
    pub status: OrderStatus,
    pub updated_at: NaiveDateTime,
}

impl NewOrder {
    /// Build a pending order payload with the current timestamp.
    pub fn new(
        customer_id: i32,
        quantity: i32,
        address: impl Into<String>,
        delivery_date: NaiveDateTime,
    ) -> Self {
        Self {
            customer_id,
            quantity,
            address: address.into(),
            notes: None,
            delivery_date,
            status: OrderStatus::default(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Partial update applied to an existing order. `None` fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrder {
    pub quantity: Option<i32>,
    pub status: Option<OrderStatus>,
    pub address: Option<String>,
    pub notes: Option<Option<String>>,
    pub delivery_date: Option<NaiveDateTime>,
    pub supplier_id: Option<Option<i32>>,
}

impl UpdateOrder {
    /// Update that only changes the order status.
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Update that assigns the order to a supplier.
    pub fn assign(supplier_id: i32) -> Self {
        Self {
            status: Some(OrderStatus::Assigned),
            supplier_id: Some(Some(supplier_id)),
            ..Self::default()
        }
    }
}
