use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle states of a delivery run.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    InProgress,
    Completed,
}

impl Default for DeliveryStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl From<&str> for DeliveryStatus {
    fn from(value: &str) -> Self {
        match value {
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Pending,
        }
    }
}

/// Fulfillment record for an order, handled by a supplier.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Delivery {
    pub id: i32,
    /// Order being fulfilled.
    pub order_id: i32,
    /// Supplier carrying out the delivery.
    pub supplier_id: i32,
    pub delivery_date: NaiveDateTime,
    pub status: DeliveryStatus,
    /// Optional free-form route label, e.g. "North loop".
    pub route_name: Option<String>,
    /// Stamped when the delivery reaches `completed`.
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to schedule a delivery.
#[derive(Debug, Clone)]
pub struct NewDelivery {
    pub order_id: i32,
    pub supplier_id: i32,
    pub delivery_date: NaiveDateTime,
    pub status: DeliveryStatus,
    pub route_name: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewDelivery {
    /// Build a pending delivery payload with the current timestamp.
    pub fn new(order_id: i32, supplier_id: i32, delivery_date: NaiveDateTime) -> Self {
        Self {
            order_id,
            supplier_id,
            delivery_date,
            status: DeliveryStatus::default(),
            route_name: None,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn with_route_name(mut self, route_name: impl Into<String>) -> Self {
        self.route_name = Some(route_name.into());
        self
    }
}

/// Partial update applied to an existing delivery.
#[derive(Debug, Clone, Default)]
pub struct UpdateDelivery {
    pub status: Option<DeliveryStatus>,
    pub completed_at: Option<Option<NaiveDateTime>>,
}

impl UpdateDelivery {
    /// Update that only changes the delivery status.
    pub fn status(status: DeliveryStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Update that completes the delivery at the given time.
    pub fn completed(at: NaiveDateTime) -> Self {
        Self {
            status: Some(DeliveryStatus::Completed),
            completed_at: Some(Some(at)),
        }
    }
}
