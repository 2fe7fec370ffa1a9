use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::activity_log::{ActivityLog, NewActivityLog};
use crate::domain::delivery::{Delivery, DeliveryStatus, NewDelivery, UpdateDelivery};
use crate::domain::finance::{
    ExpenseCategory, IncomingTransaction, NewIncomingTransaction, NewOutgoingTransaction,
    OutgoingTransaction,
};
use crate::domain::order::{NewOrder, Order, OrderStatus, UpdateOrder};
use crate::domain::route::{NewRoute, Route, UpdateRoute};
use crate::domain::shop_sale::{NewShopSale, ShopSale};
use crate::domain::user::{NewUser, UpdateUser, User};

pub mod errors;

pub mod activity_log;
pub mod delivery;
pub mod finance;
pub mod order;
pub mod route;
pub mod shop_sale;
pub mod user;

#[cfg(test)]
pub mod mock;

use errors::RepositoryResult;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Half-open time window `[start, end)` used for ledger and report filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }
}

/// Query definition used to filter users.
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub role: Option<String>,
    pub search: Option<String>,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to one role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Case-sensitive substring match on username, email or full name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// Query definition used to filter and count orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    pub customer_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub status: Option<OrderStatus>,
    pub since: Option<NaiveDateTime>,
    pub limit: Option<usize>,
}

impl OrderListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn supplier(mut self, supplier_id: i32) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Only orders placed at or after `since`.
    pub fn since(mut self, since: NaiveDateTime) -> Self {
        self.since = Some(since);
        self
    }

    /// Cap the number of returned rows (newest first).
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Query definition used to filter and count deliveries.
#[derive(Debug, Clone, Default)]
pub struct DeliveryListQuery {
    pub supplier_id: Option<i32>,
    pub status: Option<DeliveryStatus>,
    pub since: Option<NaiveDateTime>,
}

impl DeliveryListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn supplier(mut self, supplier_id: i32) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    pub fn status(mut self, status: DeliveryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Only deliveries scheduled at or after `since`.
    pub fn since(mut self, since: NaiveDateTime) -> Self {
        self.since = Some(since);
        self
    }
}

/// Query definition used to filter incoming ledger rows.
#[derive(Debug, Clone, Default)]
pub struct IncomingListQuery {
    pub customer_id: Option<i32>,
    pub range: Option<DateRange>,
    pub limit: Option<usize>,
}

impl IncomingListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Query definition used to filter outgoing ledger rows.
#[derive(Debug, Clone, Default)]
pub struct OutgoingListQuery {
    pub category: Option<ExpenseCategory>,
    pub range: Option<DateRange>,
}

impl OutgoingListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }
}

/// Query definition used to filter routes.
#[derive(Debug, Clone, Default)]
pub struct RouteListQuery {
    pub supplier_id: Option<i32>,
    pub range: Option<DateRange>,
}

impl RouteListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn supplier(mut self, supplier_id: i32) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    /// Only routes whose date falls inside `range`.
    pub fn range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }
}

/// Query definition used to filter shop sales.
#[derive(Debug, Clone, Default)]
pub struct SaleListQuery {
    pub shopkeeper_id: Option<i32>,
    pub since: Option<NaiveDateTime>,
}

impl SaleListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shopkeeper(mut self, shopkeeper_id: i32) -> Self {
        self.shopkeeper_id = Some(shopkeeper_id);
        self
    }

    /// Only sales recorded at or after `since`.
    pub fn since(mut self, since: NaiveDateTime) -> Self {
        self.since = Some(since);
        self
    }
}

/// Query definition used to page through the activity log.
#[derive(Debug, Clone)]
pub struct LogListQuery {
    pub user_id: Option<i32>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for LogListQuery {
    fn default() -> Self {
        Self {
            user_id: None,
            limit: 100,
            offset: 0,
        }
    }
}

impl LogListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// Read-only operations over user records.
pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
    fn count_users_by_role(&self, role: &str) -> RepositoryResult<usize>;
}

/// Write operations over user records.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
    fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over order records.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
    fn count_orders(&self, query: OrderListQuery) -> RepositoryResult<usize>;
}

/// Write operations over order records.
pub trait OrderWriter {
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
}

/// Read-only operations over delivery records.
pub trait DeliveryReader {
    fn get_delivery_by_id(&self, id: i32) -> RepositoryResult<Option<Delivery>>;
    fn list_deliveries(&self, query: DeliveryListQuery) -> RepositoryResult<Vec<Delivery>>;
    fn count_deliveries(&self, query: DeliveryListQuery) -> RepositoryResult<usize>;
}

/// Write operations over delivery records.
pub trait DeliveryWriter {
    fn create_delivery(&self, new_delivery: &NewDelivery) -> RepositoryResult<Delivery>;
    fn update_delivery(
        &self,
        delivery_id: i32,
        updates: &UpdateDelivery,
    ) -> RepositoryResult<Delivery>;
}

/// Read-only operations over the finance ledgers.
pub trait FinanceReader {
    fn list_incoming(&self, query: IncomingListQuery)
    -> RepositoryResult<Vec<IncomingTransaction>>;
    fn list_outgoing(&self, query: OutgoingListQuery)
    -> RepositoryResult<Vec<OutgoingTransaction>>;
    fn sum_incoming_by_source(
        &self,
        range: Option<DateRange>,
    ) -> RepositoryResult<Vec<(String, i64)>>;
    fn sum_outgoing_by_category(
        &self,
        range: Option<DateRange>,
    ) -> RepositoryResult<Vec<(String, i64)>>;
    fn total_incoming(&self, range: Option<DateRange>) -> RepositoryResult<i64>;
    fn total_outgoing(&self, range: Option<DateRange>) -> RepositoryResult<i64>;
    fn total_incoming_for_customer(&self, customer_id: i32) -> RepositoryResult<i64>;
}

/// Write operations over the finance ledgers.
pub trait FinanceWriter {
    fn create_incoming(
        &self,
        tx: &NewIncomingTransaction,
    ) -> RepositoryResult<IncomingTransaction>;
    fn create_outgoing(
        &self,
        tx: &NewOutgoingTransaction,
    ) -> RepositoryResult<OutgoingTransaction>;
}

/// Read-only operations over route records.
pub trait RouteReader {
    fn get_route_by_id(&self, id: i32) -> RepositoryResult<Option<Route>>;
    fn list_routes(&self, query: RouteListQuery) -> RepositoryResult<Vec<Route>>;
}

/// Write operations over route records.
pub trait RouteWriter {
    fn create_route(&self, new_route: &NewRoute) -> RepositoryResult<Route>;
    fn update_route(&self, route_id: i32, updates: &UpdateRoute) -> RepositoryResult<Route>;
}

/// Read-only operations over shop sales.
pub trait ShopSaleReader {
    fn list_sales(&self, query: SaleListQuery) -> RepositoryResult<Vec<ShopSale>>;
}

/// Write operations over shop sales.
pub trait ShopSaleWriter {
    fn create_sale(&self, new_sale: &NewShopSale) -> RepositoryResult<ShopSale>;
}

/// Read-only operations over the activity log.
pub trait ActivityLogReader {
    fn list_logs(&self, query: LogListQuery) -> RepositoryResult<(usize, Vec<ActivityLog>)>;
}

/// Write operations over the activity log.
pub trait ActivityLogWriter {
    fn log_activity(&self, entry: &NewActivityLog) -> RepositoryResult<()>;
}
