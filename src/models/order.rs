use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, UpdateOrder as DomainUpdateOrder,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub supplier_id: Option<i32>,
    pub quantity: i32,
    pub status: String,
    pub address: String,
    pub notes: Option<String>,
    pub delivery_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub customer_id: i32,
    pub quantity: i32,
    pub status: &'a str,
    pub address: &'a str,
    pub notes: Option<&'a str>,
    pub delivery_date: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrder<'a> {
    pub quantity: Option<i32>,
    pub status: Option<&'a str>,
    pub address: Option<&'a str>,
    pub notes: Option<Option<&'a str>>,
    pub delivery_date: Option<NaiveDateTime>,
    pub supplier_id: Option<Option<i32>>,
    pub updated_at: NaiveDateTime,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            supplier_id: value.supplier_id,
            quantity: value.quantity,
            status: value.status.as_str().into(),
            address: value.address,
            notes: value.notes,
            delivery_date: value.delivery_date,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            customer_id: value.customer_id,
            quantity: value.quantity,
            status: value.status.as_str(),
            address: value.address.as_str(),
            notes: value.notes.as_deref(),
            delivery_date: value.delivery_date,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateOrder> for UpdateOrder<'a> {
    fn from(value: &'a DomainUpdateOrder) -> Self {
        Self {
            quantity: value.quantity,
            status: value.status.as_ref().map(|status| status.as_str()),
            address: value.address.as_deref(),
            notes: value.notes.as_ref().map(|inner| inner.as_deref()),
            delivery_date: value.delivery_date,
            supplier_id: value.supplier_id,
            updated_at: Utc::now().naive_utc(),
        }
    }
}
