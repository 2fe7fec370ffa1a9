use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::activity_log::{LogAction, NewActivityLog};
use crate::domain::order::{Order, OrderStatus, UpdateOrder};
use crate::forms::orders::{AssignOrderForm, CreateOrderForm, UpdateOrderForm};
use crate::repository::{ActivityLogWriter, OrderListQuery, OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult, record_activity};
use crate::{ROLE_ADMIN, ROLE_CUSTOMER};

/// Lists orders scoped to the caller's role: customers see their own,
/// suppliers their assignments, admins and shopkeepers everything.
pub fn list_orders<R>(repo: &R, claims: &AuthenticatedUser) -> ServiceResult<Vec<Order>>
where
    R: OrderReader + ?Sized,
{
    let mut query = OrderListQuery::new();
    if check_role(&[ROLE_CUSTOMER], &claims.role) {
        query = query.customer(claims.sub);
    } else if check_role(&[crate::ROLE_SUPPLIER], &claims.role) {
        query = query.supplier(claims.sub);
    }

    repo.list_orders(query).map_err(ServiceError::from)
}

/// Places a pending order for the calling customer. Admins may place orders
/// on their own account for walk-in bookings.
pub fn create_order<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    form: CreateOrderForm,
    ip: Option<&str>,
) -> ServiceResult<Order>
where
    R: OrderWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_CUSTOMER, ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let new_order = form
        .into_new_order(claims.sub)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let order = repo.create_order(&new_order)?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Create, "order")
            .with_entity_id(order.id)
            .with_details(format!("{} units to {}", new_order.quantity, new_order.address))
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(order)
}

/// Partially updates an order. Admin only.
pub fn update_order<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    order_id: i32,
    form: UpdateOrderForm,
    ip: Option<&str>,
) -> ServiceResult<Order>
where
    R: OrderWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let update = form
        .into_update_order()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let order = repo.update_order(order_id, &update)?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Update, "order")
            .with_entity_id(order_id)
            .with_details(format!("changed {}", changed_order_fields(&update)))
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(order)
}

fn changed_order_fields(update: &UpdateOrder) -> String {
    let mut fields = Vec::new();
    if update.quantity.is_some() {
        fields.push("quantity");
    }
    if update.status.is_some() {
        fields.push("status");
    }
    if update.address.is_some() {
        fields.push("address");
    }
    if update.notes.is_some() {
        fields.push("notes");
    }
    if update.delivery_date.is_some() {
        fields.push("delivery_date");
    }
    if update.supplier_id.is_some() {
        fields.push("supplier_id");
    }
    fields.join(", ")
}

/// Assigns an order to a supplier and marks it `assigned`. Admin only.
pub fn assign_order<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    order_id: i32,
    form: AssignOrderForm,
    ip: Option<&str>,
) -> ServiceResult<Order>
where
    R: OrderWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    use validator::Validate;
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let order = repo.update_order(order_id, &UpdateOrder::assign(form.supplier_id))?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Update, "order")
            .with_entity_id(order_id)
            .with_details(format!("assigned to supplier {}", form.supplier_id))
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(order)
}

/// Cancels an order. Customers may only cancel orders they placed.
pub fn cancel_order<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    order_id: i32,
    ip: Option<&str>,
) -> ServiceResult<Order>
where
    R: OrderReader + OrderWriter + ActivityLogWriter + ?Sized,
{
    let order = repo
        .get_order_by_id(order_id)?
        .ok_or(ServiceError::NotFound)?;

    if check_role(&[ROLE_CUSTOMER], &claims.role) && order.customer_id != claims.sub {
        return Err(ServiceError::Forbidden);
    }

    let order = repo.update_order(order_id, &UpdateOrder::status(OrderStatus::Cancelled))?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Delete, "order")
            .with_entity_id(order_id)
            .with_details("cancelled")
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(order)
}
