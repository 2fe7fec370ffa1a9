use serde::Serialize;

use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::activity_log::{LogAction, NewActivityLog};
use crate::domain::finance::{IncomeSource, NewIncomingTransaction};
use crate::domain::shop_sale::{DailySalesSummary, ShopSale};
use crate::forms::shop_sales::RecordSaleForm;
use crate::repository::{
    ActivityLogWriter, FinanceWriter, SaleListQuery, ShopSaleReader, ShopSaleWriter,
};
use crate::services::{ServiceError, ServiceResult, record_activity, today_range};
use crate::{ROLE_ADMIN, ROLE_SHOPKEEPER};

/// Today's sales plus their rollup, as returned by the daily endpoint.
#[derive(Debug, Serialize)]
pub struct DailySales {
    pub sales: Vec<ShopSale>,
    pub summary: DailySalesSummary,
}

/// Lists counter sales. Shopkeepers see their own, admins everything.
pub fn list_sales<R>(repo: &R, claims: &AuthenticatedUser) -> ServiceResult<Vec<ShopSale>>
where
    R: ShopSaleReader + ?Sized,
{
    if !check_role(&[ROLE_ADMIN, ROLE_SHOPKEEPER], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let mut query = SaleListQuery::new();
    if check_role(&[ROLE_SHOPKEEPER], &claims.role) {
        query = query.shopkeeper(claims.sub);
    }

    repo.list_sales(query).map_err(ServiceError::from)
}

/// Records a counter sale for the calling shopkeeper and mirrors it into the
/// incoming ledger.
pub fn record_sale<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    form: RecordSaleForm,
    ip: Option<&str>,
) -> ServiceResult<ShopSale>
where
    R: ShopSaleWriter + FinanceWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_SHOPKEEPER], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let new_sale = form
        .into_new_sale(claims.sub)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let sale = repo.create_sale(&new_sale)?;

    repo.create_incoming(
        &NewIncomingTransaction::new(IncomeSource::ShopSale, sale.total_cents)
            .with_shopkeeper_id(claims.sub)
            .with_description(format!("Shop sale - {} units", sale.quantity))
            .with_occurred_at(sale.sold_at),
    )?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Create, "shop_sale")
            .with_entity_id(sale.id)
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(sale)
}

/// Today's sales with totals. Shopkeepers see their own day, admins the
/// whole shop's.
pub fn daily_sales<R>(repo: &R, claims: &AuthenticatedUser) -> ServiceResult<DailySales>
where
    R: ShopSaleReader + ?Sized,
{
    if !check_role(&[ROLE_ADMIN, ROLE_SHOPKEEPER], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let mut query = SaleListQuery::new().since(today_range().start);
    if check_role(&[ROLE_SHOPKEEPER], &claims.role) {
        query = query.shopkeeper(claims.sub);
    }

    let sales = repo.list_sales(query)?;
    let summary = DailySalesSummary {
        total_sales_cents: sales.iter().map(|sale| sale.total_cents).sum(),
        total_quantity: sales.iter().map(|sale| i64::from(sale.quantity)).sum(),
        number_of_transactions: sales.len(),
    };

    Ok(DailySales { sales, summary })
}
