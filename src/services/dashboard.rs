use serde::Serialize;

use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::delivery::{Delivery, DeliveryStatus};
use crate::domain::finance::IncomingTransaction;
use crate::domain::order::{Order, OrderStatus};
use crate::repository::{
    DeliveryListQuery, DeliveryReader, FinanceReader, IncomingListQuery, OrderListQuery,
    OrderReader, UserReader,
};
use crate::services::{ServiceError, ServiceResult, today_range};
use crate::{ROLE_ADMIN, ROLE_CUSTOMER, ROLE_SUPPLIER};

const RECENT_ORDERS_LIMIT: usize = 10;
const RECENT_PAYMENTS_LIMIT: usize = 5;

/// Counters shown on the admin landing page.
#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub orders: OrderCounters,
    pub finance: FinanceTotals,
    pub users: UserCounters,
    pub pending_deliveries: usize,
}

#[derive(Debug, Serialize)]
pub struct OrderCounters {
    pub total: usize,
    pub pending: usize,
    pub today: usize,
}

#[derive(Debug, Serialize)]
pub struct FinanceTotals {
    pub total_income_cents: i64,
    pub total_expenses_cents: i64,
    pub net_profit_cents: i64,
}

#[derive(Debug, Serialize)]
pub struct UserCounters {
    pub customers: usize,
    pub suppliers: usize,
}

/// Recent activity shown to a customer.
#[derive(Debug, Serialize)]
pub struct CustomerDashboard {
    pub recent_orders: Vec<Order>,
    pub recent_payments: Vec<IncomingTransaction>,
    pub total_spent_cents: i64,
}

/// Work queue shown to a supplier.
#[derive(Debug, Serialize)]
pub struct SupplierDashboard {
    pub today_deliveries: Vec<Delivery>,
    pub pending_deliveries: Vec<Delivery>,
}

/// Order, finance, user and delivery counters. Admin only.
pub fn admin_dashboard<R>(repo: &R, claims: &AuthenticatedUser) -> ServiceResult<AdminDashboard>
where
    R: OrderReader + DeliveryReader + UserReader + FinanceReader + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let total_income = repo.total_incoming(None)?;
    let total_expenses = repo.total_outgoing(None)?;

    Ok(AdminDashboard {
        orders: OrderCounters {
            total: repo.count_orders(OrderListQuery::new())?,
            pending: repo.count_orders(OrderListQuery::new().status(OrderStatus::Pending))?,
            today: repo.count_orders(OrderListQuery::new().since(today_range().start))?,
        },
        finance: FinanceTotals {
            total_income_cents: total_income,
            total_expenses_cents: total_expenses,
            net_profit_cents: total_income - total_expenses,
        },
        users: UserCounters {
            customers: repo.count_users_by_role(ROLE_CUSTOMER)?,
            suppliers: repo.count_users_by_role(ROLE_SUPPLIER)?,
        },
        pending_deliveries: repo
            .count_deliveries(DeliveryListQuery::new().status(DeliveryStatus::Pending))?,
    })
}

/// The caller's recent orders and payments. Customer only.
pub fn customer_dashboard<R>(
    repo: &R,
    claims: &AuthenticatedUser,
) -> ServiceResult<CustomerDashboard>
where
    R: OrderReader + FinanceReader + ?Sized,
{
    if !check_role(&[ROLE_CUSTOMER], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let recent_orders = repo.list_orders(
        OrderListQuery::new()
            .customer(claims.sub)
            .limit(RECENT_ORDERS_LIMIT),
    )?;
    let recent_payments = repo.list_incoming(
        IncomingListQuery::new()
            .customer(claims.sub)
            .limit(RECENT_PAYMENTS_LIMIT),
    )?;
    let total_spent_cents = repo.total_incoming_for_customer(claims.sub)?;

    Ok(CustomerDashboard {
        recent_orders,
        recent_payments,
        total_spent_cents,
    })
}

/// The caller's deliveries for today plus everything still pending.
/// Supplier only.
pub fn supplier_dashboard<R>(
    repo: &R,
    claims: &AuthenticatedUser,
) -> ServiceResult<SupplierDashboard>
where
    R: DeliveryReader + ?Sized,
{
    if !check_role(&[ROLE_SUPPLIER], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let today_deliveries = repo.list_deliveries(
        DeliveryListQuery::new()
            .supplier(claims.sub)
            .since(today_range().start),
    )?;
    let pending_deliveries = repo.list_deliveries(
        DeliveryListQuery::new()
            .supplier(claims.sub)
            .status(DeliveryStatus::Pending),
    )?;

    Ok(SupplierDashboard {
        today_deliveries,
        pending_deliveries,
    })
}
