use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::shop_sale::{NewShopSale as DomainNewShopSale, ShopSale as DomainShopSale};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::shop_sales)]
pub struct ShopSale {
    pub id: i32,
    pub shopkeeper_id: i32,
    pub quantity: i32,
    pub total_cents: i64,
    pub cash_received_cents: i64,
    pub change_returned_cents: i64,
    pub sold_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shop_sales)]
pub struct NewShopSale {
    pub shopkeeper_id: i32,
    pub quantity: i32,
    pub total_cents: i64,
    pub cash_received_cents: i64,
    pub change_returned_cents: i64,
    pub sold_at: NaiveDateTime,
}

impl From<ShopSale> for DomainShopSale {
    fn from(value: ShopSale) -> Self {
        Self {
            id: value.id,
            shopkeeper_id: value.shopkeeper_id,
            quantity: value.quantity,
            total_cents: value.total_cents,
            cash_received_cents: value.cash_received_cents,
            change_returned_cents: value.change_returned_cents,
            sold_at: value.sold_at,
            created_at: value.created_at,
        }
    }
}

impl From<&DomainNewShopSale> for NewShopSale {
    fn from(value: &DomainNewShopSale) -> Self {
        Self {
            shopkeeper_id: value.shopkeeper_id,
            quantity: value.quantity,
            total_cents: value.total_cents,
            cash_received_cents: value.cash_received_cents,
            change_returned_cents: value.change_returned_cents,
            sold_at: value.sold_at,
        }
    }
}
