use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::finance::{
    ExpenseCategory, IncomeSource, NewIncomingTransaction, NewOutgoingTransaction, PaymentMethod,
};
use crate::forms::sanitize_inline_text;

pub type FinanceFormResult<T> = Result<T, FinanceFormError>;

#[derive(Debug, Error)]
pub enum FinanceFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The expense description is empty after sanitization.
    #[error("description cannot be empty")]
    EmptyDescription,
}

/// Payload for recording a cash inflow. Amounts are integer cents.
#[derive(Debug, Deserialize, Validate)]
pub struct AddIncomingForm {
    pub source: IncomeSource,
    #[validate(range(min = 1))]
    pub amount_cents: i64,
    pub customer_id: Option<i32>,
    pub description: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub occurred_at: Option<NaiveDateTime>,
}

impl AddIncomingForm {
    /// Validates the payload into a domain `NewIncomingTransaction`.
    pub fn into_new_incoming(self) -> FinanceFormResult<NewIncomingTransaction> {
        self.validate()?;

        let mut tx = NewIncomingTransaction::new(self.source, self.amount_cents);
        if let Some(customer_id) = self.customer_id {
            tx = tx.with_customer_id(customer_id);
        }
        if let Some(description) = self.description {
            let description = sanitize_inline_text(&description);
            if !description.is_empty() {
                tx = tx.with_description(description);
            }
        }
        if let Some(payment_method) = self.payment_method {
            tx = tx.with_payment_method(payment_method);
        }
        if let Some(occurred_at) = self.occurred_at {
            tx = tx.with_occurred_at(occurred_at);
        }

        Ok(tx)
    }
}

/// Payload for recording an expense. Amounts are integer cents.
#[derive(Debug, Deserialize, Validate)]
pub struct AddExpenseForm {
    pub category: ExpenseCategory,
    #[validate(range(min = 1))]
    pub amount_cents: i64,
    pub description: String,
    pub receipt: Option<String>,
    pub occurred_at: Option<NaiveDateTime>,
}

impl AddExpenseForm {
    /// Validates the payload into a domain `NewOutgoingTransaction`.
    pub fn into_new_outgoing(self) -> FinanceFormResult<NewOutgoingTransaction> {
        self.validate()?;

        let description = sanitize_inline_text(&self.description);
        if description.is_empty() {
            return Err(FinanceFormError::EmptyDescription);
        }

        let mut tx = NewOutgoingTransaction::new(self.category, self.amount_cents, description);
        if let Some(receipt) = self.receipt {
            let receipt = receipt.trim();
            if !receipt.is_empty() {
                tx = tx.with_receipt(receipt);
            }
        }
        if let Some(occurred_at) = self.occurred_at {
            tx = tx.with_occurred_at(occurred_at);
        }

        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoming_form_defaults_payment_method_to_cash() {
        let form = AddIncomingForm {
            source: IncomeSource::CustomerPayment,
            amount_cents: 5000,
            customer_id: Some(12),
            description: None,
            payment_method: None,
            occurred_at: None,
        };

        let tx = form.into_new_incoming().expect("expected success");

        assert_eq!(tx.source, IncomeSource::CustomerPayment);
        assert_eq!(tx.amount_cents, 5000);
        assert_eq!(tx.customer_id, Some(12));
        assert_eq!(tx.payment_method, PaymentMethod::Cash);
    }

    #[test]
    fn incoming_form_rejects_zero_amount() {
        let form = AddIncomingForm {
            source: IncomeSource::CustomerPayment,
            amount_cents: 0,
            customer_id: None,
            description: None,
            payment_method: None,
            occurred_at: None,
        };

        let result = form.into_new_incoming();

        assert!(matches!(result, Err(FinanceFormError::Validation(_))));
    }

    #[test]
    fn expense_form_blank_description_is_rejected() {
        let form = AddExpenseForm {
            category: ExpenseCategory::Fuel,
            amount_cents: 1500,
            description: " \t ".to_string(),
            receipt: None,
            occurred_at: None,
        };

        let result = form.into_new_outgoing();

        assert!(matches!(result, Err(FinanceFormError::EmptyDescription)));
    }
}
