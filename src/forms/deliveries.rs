use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::delivery::{DeliveryStatus, NewDelivery};

/// Payload for scheduling a delivery against an order.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDeliveryForm {
    #[validate(range(min = 1))]
    pub order_id: i32,
    #[validate(range(min = 1))]
    pub supplier_id: i32,
    pub delivery_date: NaiveDateTime,
    pub route_name: Option<String>,
}

impl CreateDeliveryForm {
    /// Converts the validated payload into a pending `NewDelivery`.
    pub fn into_new_delivery(self) -> NewDelivery {
        let mut new_delivery =
            NewDelivery::new(self.order_id, self.supplier_id, self.delivery_date);
        if let Some(route_name) = self.route_name {
            let route_name = route_name.trim();
            if !route_name.is_empty() {
                new_delivery = new_delivery.with_route_name(route_name);
            }
        }
        new_delivery
    }
}

/// Payload for moving a delivery to a new status.
#[derive(Debug, Deserialize)]
pub struct UpdateDeliveryStatusForm {
    pub status: DeliveryStatus,
}
