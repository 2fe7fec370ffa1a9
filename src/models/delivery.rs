use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::delivery::{
    Delivery as DomainDelivery, NewDelivery as DomainNewDelivery,
    UpdateDelivery as DomainUpdateDelivery,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::deliveries)]
pub struct Delivery {
    pub id: i32,
    pub order_id: i32,
    pub supplier_id: i32,
    pub delivery_date: NaiveDateTime,
    pub status: String,
    pub route_name: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::deliveries)]
pub struct NewDelivery<'a> {
    pub order_id: i32,
    pub supplier_id: i32,
    pub delivery_date: NaiveDateTime,
    pub status: &'a str,
    pub route_name: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::deliveries)]
pub struct UpdateDelivery<'a> {
    pub status: Option<&'a str>,
    pub completed_at: Option<Option<NaiveDateTime>>,
    pub updated_at: NaiveDateTime,
}

impl From<Delivery> for DomainDelivery {
    fn from(value: Delivery) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            supplier_id: value.supplier_id,
            delivery_date: value.delivery_date,
            status: value.status.as_str().into(),
            route_name: value.route_name,
            completed_at: value.completed_at,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewDelivery> for NewDelivery<'a> {
    fn from(value: &'a DomainNewDelivery) -> Self {
        Self {
            order_id: value.order_id,
            supplier_id: value.supplier_id,
            delivery_date: value.delivery_date,
            status: value.status.as_str(),
            route_name: value.route_name.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateDelivery> for UpdateDelivery<'a> {
    fn from(value: &'a DomainUpdateDelivery) -> Self {
        Self {
            status: value.status.as_ref().map(|status| status.as_str()),
            completed_at: value.completed_at,
            updated_at: Utc::now().naive_utc(),
        }
    }
}
