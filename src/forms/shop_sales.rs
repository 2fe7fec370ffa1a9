use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::shop_sale::NewShopSale;

pub type SaleFormResult<T> = Result<T, SaleFormError>;

#[derive(Debug, Error)]
pub enum SaleFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The buyer handed over less cash than the sale total.
    #[error("cash received is less than the sale total")]
    InsufficientCash,
}

/// Payload for recording a counter sale. Amounts are integer cents.
#[derive(Debug, Deserialize, Validate)]
pub struct RecordSaleForm {
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(range(min = 1))]
    pub total_cents: i64,
    #[validate(range(min = 0))]
    pub cash_received_cents: i64,
}

impl RecordSaleForm {
    /// Validates the payload into a `NewShopSale` for the given shopkeeper.
    pub fn into_new_sale(self, shopkeeper_id: i32) -> SaleFormResult<NewShopSale> {
        self.validate()?;
        if self.cash_received_cents < self.total_cents {
            return Err(SaleFormError::InsufficientCash);
        }

        Ok(NewShopSale::new(
            shopkeeper_id,
            self.quantity,
            self.total_cents,
            self.cash_received_cents,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_form_derives_change() {
        let form = RecordSaleForm {
            quantity: 3,
            total_cents: 450,
            cash_received_cents: 500,
        };

        let sale = form.into_new_sale(8).expect("expected success");

        assert_eq!(sale.shopkeeper_id, 8);
        assert_eq!(sale.quantity, 3);
        assert_eq!(sale.change_returned_cents, 50);
    }

    #[test]
    fn sale_form_rejects_short_cash() {
        let form = RecordSaleForm {
            quantity: 1,
            total_cents: 150,
            cash_received_cents: 100,
        };

        let result = form.into_new_sale(8);

        assert!(matches!(result, Err(SaleFormError::InsufficientCash)));
    }

    #[test]
    fn sale_form_rejects_zero_quantity() {
        let form = RecordSaleForm {
            quantity: 0,
            total_cents: 150,
            cash_received_cents: 150,
        };

        let result = form.into_new_sale(8);

        assert!(matches!(result, Err(SaleFormError::Validation(_))));
    }
}
