use chrono::Utc;

use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::activity_log::{LogAction, NewActivityLog};
use crate::domain::delivery::{Delivery, DeliveryStatus, UpdateDelivery};
use crate::domain::order::{OrderStatus, UpdateOrder};
use crate::forms::deliveries::{CreateDeliveryForm, UpdateDeliveryStatusForm};
use crate::repository::{
    ActivityLogWriter, DeliveryListQuery, DeliveryReader, DeliveryWriter, OrderWriter,
};
use crate::services::{ServiceError, ServiceResult, record_activity};
use crate::{ROLE_ADMIN, ROLE_SUPPLIER};

/// Lists deliveries scoped to the caller's role: suppliers see their own,
/// everyone else sees all.
pub fn list_deliveries<R>(repo: &R, claims: &AuthenticatedUser) -> ServiceResult<Vec<Delivery>>
where
    R: DeliveryReader + ?Sized,
{
    let mut query = DeliveryListQuery::new();
    if check_role(&[ROLE_SUPPLIER], &claims.role) {
        query = query.supplier(claims.sub);
    }

    repo.list_deliveries(query).map_err(ServiceError::from)
}

/// Schedules a delivery against an order. Admin only.
pub fn create_delivery<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    form: CreateDeliveryForm,
    ip: Option<&str>,
) -> ServiceResult<Delivery>
where
    R: DeliveryWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    use validator::Validate;
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let delivery = repo.create_delivery(&form.into_new_delivery())?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Create, "delivery")
            .with_entity_id(delivery.id)
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(delivery)
}

/// Moves a delivery to a new status. Suppliers may only touch their own
/// deliveries. Completing a delivery stamps `completed_at` and marks the
/// linked order delivered.
pub fn update_delivery_status<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    delivery_id: i32,
    form: UpdateDeliveryStatusForm,
    ip: Option<&str>,
) -> ServiceResult<Delivery>
where
    R: DeliveryReader + DeliveryWriter + OrderWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_SUPPLIER, ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let delivery = repo
        .get_delivery_by_id(delivery_id)?
        .ok_or(ServiceError::NotFound)?;

    if check_role(&[ROLE_SUPPLIER], &claims.role) && delivery.supplier_id != claims.sub {
        return Err(ServiceError::Forbidden);
    }

    let update = match form.status {
        DeliveryStatus::Completed => UpdateDelivery::completed(Utc::now().naive_utc()),
        status => UpdateDelivery::status(status),
    };
    let delivery = repo.update_delivery(delivery_id, &update)?;

    if form.status == DeliveryStatus::Completed {
        repo.update_order(
            delivery.order_id,
            &UpdateOrder::status(OrderStatus::Delivered),
        )?;
    }

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Update, "delivery")
            .with_entity_id(delivery_id)
            .with_details(format!("status {}", form.status.as_str()))
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(delivery)
}

/// Lists all deliveries assigned to one supplier. Admin only.
pub fn supplier_deliveries<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    supplier_id: i32,
) -> ServiceResult<Vec<Delivery>>
where
    R: DeliveryReader + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    repo.list_deliveries(DeliveryListQuery::new().supplier(supplier_id))
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::ROLE_CUSTOMER;
    use crate::domain::order::Order;
    use crate::repository::mock::MockDeliveryRepository;

    fn claims(sub: i32, role: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            sub,
            username: "someone".to_string(),
            role: role.to_string(),
            exp: 0,
        }
    }

    fn delivery_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 9, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn sample_delivery(id: i32, supplier_id: i32, status: DeliveryStatus) -> Delivery {
        let now = Utc::now().naive_utc();
        Delivery {
            id,
            order_id: 21,
            supplier_id,
            delivery_date: delivery_date(),
            status,
            route_name: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_order(id: i32, status: OrderStatus) -> Order {
        let now = Utc::now().naive_utc();
        Order {
            id,
            customer_id: 5,
            supplier_id: Some(9),
            quantity: 2,
            status,
            address: "12 Canal Road".to_string(),
            notes: None,
            delivery_date: delivery_date(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn list_deliveries_scopes_suppliers() {
        let mut repo = MockDeliveryRepository::new();
        repo.expect_list_deliveries()
            .withf(|query| query.supplier_id == Some(9))
            .returning(|_| Ok(vec![]));

        list_deliveries(&repo, &claims(9, ROLE_SUPPLIER)).expect("expected success");
    }

    #[test]
    fn completing_delivery_marks_order_delivered() {
        let mut repo = MockDeliveryRepository::new();
        repo.expect_get_delivery_by_id()
            .returning(|_| Ok(Some(sample_delivery(3, 9, DeliveryStatus::InProgress))));
        repo.expect_update_delivery()
            .withf(|delivery_id, update| {
                *delivery_id == 3
                    && update.status == Some(DeliveryStatus::Completed)
                    && matches!(update.completed_at, Some(Some(_)))
            })
            .returning(|_, _| {
                let mut delivery = sample_delivery(3, 9, DeliveryStatus::Completed);
                delivery.completed_at = Some(Utc::now().naive_utc());
                Ok(delivery)
            });
        repo.expect_update_order()
            .withf(|order_id, update| {
                *order_id == 21 && update.status == Some(OrderStatus::Delivered)
            })
            .returning(|_, _| Ok(sample_order(21, OrderStatus::Delivered)));
        repo.expect_log_activity()
            .withf(|entry| {
                entry.action == LogAction::Update
                    && entry.entity == "delivery"
                    && entry.details.as_deref() == Some("status completed")
            })
            .returning(|_| Ok(()));

        let delivery = update_delivery_status(
            &repo,
            &claims(9, ROLE_SUPPLIER),
            3,
            UpdateDeliveryStatusForm {
                status: DeliveryStatus::Completed,
            },
            None,
        )
        .expect("expected success");

        assert_eq!(delivery.status, DeliveryStatus::Completed);
        assert!(delivery.completed_at.is_some());
    }

    #[test]
    fn non_terminal_status_leaves_order_alone() {
        let mut repo = MockDeliveryRepository::new();
        repo.expect_get_delivery_by_id()
            .returning(|_| Ok(Some(sample_delivery(3, 9, DeliveryStatus::Pending))));
        repo.expect_update_delivery()
            .withf(|_, update| {
                update.status == Some(DeliveryStatus::InProgress) && update.completed_at.is_none()
            })
            .returning(|_, _| Ok(sample_delivery(3, 9, DeliveryStatus::InProgress)));
        repo.expect_log_activity().returning(|_| Ok(()));

        update_delivery_status(
            &repo,
            &claims(1, ROLE_ADMIN),
            3,
            UpdateDeliveryStatusForm {
                status: DeliveryStatus::InProgress,
            },
            None,
        )
        .expect("expected success");
    }

    #[test]
    fn supplier_cannot_touch_foreign_delivery() {
        let mut repo = MockDeliveryRepository::new();
        repo.expect_get_delivery_by_id()
            .returning(|_| Ok(Some(sample_delivery(3, 9, DeliveryStatus::Pending))));

        let result = update_delivery_status(
            &repo,
            &claims(10, ROLE_SUPPLIER),
            3,
            UpdateDeliveryStatusForm {
                status: DeliveryStatus::InProgress,
            },
            None,
        );

        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[test]
    fn customers_cannot_update_deliveries() {
        let repo = MockDeliveryRepository::new();

        let result = update_delivery_status(
            &repo,
            &claims(5, ROLE_CUSTOMER),
            3,
            UpdateDeliveryStatusForm {
                status: DeliveryStatus::InProgress,
            },
            None,
        );

        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[test]
    fn supplier_deliveries_requires_admin() {
        let repo = MockDeliveryRepository::new();

        let result = supplier_deliveries(&repo, &claims(9, ROLE_SUPPLIER), 9);

        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }
}
