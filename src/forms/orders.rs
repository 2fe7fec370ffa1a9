use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::order::{NewOrder, OrderStatus, UpdateOrder};
use crate::forms::sanitize_inline_text;

pub type OrderFormResult<T> = Result<T, OrderFormError>;

#[derive(Debug, Error)]
pub enum OrderFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The delivery address is empty after sanitization.
    #[error("address cannot be empty")]
    EmptyAddress,
}

/// Payload for placing a new order.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderForm {
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub address: String,
    pub notes: Option<String>,
    pub delivery_date: NaiveDateTime,
}

impl CreateOrderForm {
    /// Validates and sanitizes the payload into a pending `NewOrder` for the
    /// given customer.
    pub fn into_new_order(self, customer_id: i32) -> OrderFormResult<NewOrder> {
        self.validate()?;

        let address = sanitize_inline_text(&self.address);
        if address.is_empty() {
            return Err(OrderFormError::EmptyAddress);
        }

        let mut new_order = NewOrder::new(customer_id, self.quantity, address, self.delivery_date);
        if let Some(notes) = self.notes {
            let notes = notes.trim();
            if !notes.is_empty() {
                new_order = new_order.with_notes(notes);
            }
        }

        Ok(new_order)
    }
}

/// Payload for partially updating an order.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOrderForm {
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
    pub status: Option<OrderStatus>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub delivery_date: Option<NaiveDateTime>,
}

impl UpdateOrderForm {
    /// Validates and sanitizes the payload into a domain `UpdateOrder`. An
    /// empty `notes` clears the stored value.
    pub fn into_update_order(self) -> OrderFormResult<UpdateOrder> {
        self.validate()?;

        let address = match self.address {
            Some(address) => {
                let sanitized = sanitize_inline_text(&address);
                if sanitized.is_empty() {
                    return Err(OrderFormError::EmptyAddress);
                }
                Some(sanitized)
            }
            None => None,
        };

        Ok(UpdateOrder {
            quantity: self.quantity,
            status: self.status,
            address,
            notes: self.notes.map(|notes| {
                let trimmed = notes.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }),
            delivery_date: self.delivery_date,
            supplier_id: None,
        })
    }
}

/// Payload for assigning an order to a supplier.
#[derive(Debug, Deserialize, Validate)]
pub struct AssignOrderForm {
    #[validate(range(min = 1))]
    pub supplier_id: i32,
}
