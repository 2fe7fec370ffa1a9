use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Walk-in counter sale recorded by a shopkeeper. Amounts are integer cents.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShopSale {
    pub id: i32,
    pub shopkeeper_id: i32,
    /// Number of bottles sold.
    pub quantity: i32,
    pub total_cents: i64,
    pub cash_received_cents: i64,
    /// cash_received - total, returned to the buyer.
    pub change_returned_cents: i64,
    pub sold_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Payload required to record a counter sale.
#[derive(Debug, Clone)]
pub struct NewShopSale {
    pub shopkeeper_id: i32,
    pub quantity: i32,
    pub total_cents: i64,
    pub cash_received_cents: i64,
    pub change_returned_cents: i64,
    pub sold_at: NaiveDateTime,
}

impl NewShopSale {
    /// Build a sale payload; the change is derived from cash received.
    pub fn new(shopkeeper_id: i32, quantity: i32, total_cents: i64, cash_received_cents: i64) -> Self {
        Self {
            shopkeeper_id,
            quantity,
            total_cents,
            cash_received_cents,
            change_returned_cents: cash_received_cents - total_cents,
            sold_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Rollup returned by the daily sales report.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DailySalesSummary {
    pub total_sales_cents: i64,
    pub total_quantity: i64,
    pub number_of_transactions: usize,
}
