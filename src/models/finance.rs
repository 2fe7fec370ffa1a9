use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::finance::{
    IncomingTransaction as DomainIncoming, NewIncomingTransaction as DomainNewIncoming,
    NewOutgoingTransaction as DomainNewOutgoing, OutgoingTransaction as DomainOutgoing,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::finance_incoming)]
pub struct IncomingTransaction {
    pub id: i32,
    pub source: String,
    pub amount_cents: i64,
    pub customer_id: Option<i32>,
    pub shopkeeper_id: Option<i32>,
    pub description: Option<String>,
    pub payment_method: String,
    pub occurred_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::finance_incoming)]
pub struct NewIncomingTransaction<'a> {
    pub source: &'a str,
    pub amount_cents: i64,
    pub customer_id: Option<i32>,
    pub shopkeeper_id: Option<i32>,
    pub description: Option<&'a str>,
    pub payment_method: &'a str,
    pub occurred_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::finance_outgoing)]
pub struct OutgoingTransaction {
    pub id: i32,
    pub category: String,
    pub amount_cents: i64,
    pub description: String,
    pub receipt: Option<String>,
    pub occurred_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::finance_outgoing)]
pub struct NewOutgoingTransaction<'a> {
    pub category: &'a str,
    pub amount_cents: i64,
    pub description: &'a str,
    pub receipt: Option<&'a str>,
    pub occurred_at: NaiveDateTime,
}

impl From<IncomingTransaction> for DomainIncoming {
    fn from(value: IncomingTransaction) -> Self {
        Self {
            id: value.id,
            source: value.source.as_str().into(),
            amount_cents: value.amount_cents,
            customer_id: value.customer_id,
            shopkeeper_id: value.shopkeeper_id,
            description: value.description,
            payment_method: value.payment_method.as_str().into(),
            occurred_at: value.occurred_at,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewIncoming> for NewIncomingTransaction<'a> {
    fn from(value: &'a DomainNewIncoming) -> Self {
        Self {
            source: value.source.as_str(),
            amount_cents: value.amount_cents,
            customer_id: value.customer_id,
            shopkeeper_id: value.shopkeeper_id,
            description: value.description.as_deref(),
            payment_method: value.payment_method.as_str(),
            occurred_at: value.occurred_at,
        }
    }
}

impl From<OutgoingTransaction> for DomainOutgoing {
    fn from(value: OutgoingTransaction) -> Self {
        Self {
            id: value.id,
            category: value.category.as_str().into(),
            amount_cents: value.amount_cents,
            description: value.description,
            receipt: value.receipt,
            occurred_at: value.occurred_at,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewOutgoing> for NewOutgoingTransaction<'a> {
    fn from(value: &'a DomainNewOutgoing) -> Self {
        Self {
            category: value.category.as_str(),
            amount_cents: value.amount_cents,
            description: value.description.as_str(),
            receipt: value.receipt.as_deref(),
            occurred_at: value.occurred_at,
        }
    }
}
