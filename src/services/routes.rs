use chrono::NaiveDate;

use crate::auth::{AuthenticatedUser, check_role};
use crate::domain::activity_log::{LogAction, NewActivityLog};
use crate::domain::route::Route;
use crate::forms::routes::{CreateRouteForm, UpdateRouteForm};
use crate::repository::{ActivityLogWriter, DateRange, RouteListQuery, RouteReader, RouteWriter};
use crate::services::{ServiceError, ServiceResult, record_activity};
use crate::{ROLE_ADMIN, ROLE_SUPPLIER};

/// Lists routes scoped to the caller's role: suppliers see their own
/// routes, everyone else sees all. Stops come embedded.
pub fn list_routes<R>(repo: &R, claims: &AuthenticatedUser) -> ServiceResult<Vec<Route>>
where
    R: RouteReader + ?Sized,
{
    let mut query = RouteListQuery::new();
    if check_role(&[ROLE_SUPPLIER], &claims.role) {
        query = query.supplier(claims.sub);
    }

    repo.list_routes(query).map_err(ServiceError::from)
}

/// Plans a route with its stops in one transaction. Admin only.
pub fn create_route<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    form: CreateRouteForm,
    ip: Option<&str>,
) -> ServiceResult<Route>
where
    R: RouteWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_ADMIN], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let new_route = form
        .into_new_route()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let route = repo.create_route(&new_route)?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Create, "route")
            .with_entity_id(route.id)
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(route)
}

/// Updates a route; a supplied stop list replaces the existing stops.
/// Suppliers may only touch their own routes.
pub fn update_route<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    route_id: i32,
    form: UpdateRouteForm,
    ip: Option<&str>,
) -> ServiceResult<Route>
where
    R: RouteReader + RouteWriter + ActivityLogWriter + ?Sized,
{
    if !check_role(&[ROLE_ADMIN, ROLE_SUPPLIER], &claims.role) {
        return Err(ServiceError::Forbidden);
    }

    let route = repo
        .get_route_by_id(route_id)?
        .ok_or(ServiceError::NotFound)?;

    if check_role(&[ROLE_SUPPLIER], &claims.role) && route.supplier_id != claims.sub {
        return Err(ServiceError::Forbidden);
    }

    let update = form
        .into_update_route()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let route = repo.update_route(route_id, &update)?;

    record_activity(
        repo,
        NewActivityLog::new(claims.sub, LogAction::Update, "route")
            .with_entity_id(route_id)
            .with_ip_address(ip.map(str::to_string)),
    );

    Ok(route)
}

/// Lists routes scheduled on one calendar day, scoped like `list_routes`.
pub fn routes_by_date<R>(
    repo: &R,
    claims: &AuthenticatedUser,
    date: NaiveDate,
) -> ServiceResult<Vec<Route>>
where
    R: RouteReader + ?Sized,
{
    let start = date.and_hms_opt(0, 0, 0).ok_or(ServiceError::NotFound)?;
    let mut query = RouteListQuery::new().range(DateRange::new(
        start,
        start + chrono::Duration::days(1),
    ));
    if check_role(&[ROLE_SUPPLIER], &claims.role) {
        query = query.supplier(claims.sub);
    }

    repo.list_routes(query).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::ROLE_CUSTOMER;
    use crate::domain::route::{RouteStatus, RouteStop};
    use crate::forms::routes::RouteStopForm;
    use crate::repository::mock::MockRouteRepository;

    fn claims(sub: i32, role: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            sub,
            username: "someone".to_string(),
            role: role.to_string(),
            exp: 0,
        }
    }

    fn sample_route(id: i32, supplier_id: i32) -> Route {
        let now = Utc::now().naive_utc();
        Route {
            id,
            supplier_id,
            route_date: now,
            status: RouteStatus::Scheduled,
            stops: vec![RouteStop {
                customer_id: 5,
                address: None,
                scheduled_time: None,
            }],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn list_routes_scopes_suppliers() {
        let mut repo = MockRouteRepository::new();
        repo.expect_list_routes()
            .withf(|query| query.supplier_id == Some(9))
            .returning(|_| Ok(vec![]));

        list_routes(&repo, &claims(9, ROLE_SUPPLIER)).expect("expected success");
    }

    #[test]
    fn create_route_requires_admin() {
        let repo = MockRouteRepository::new();
        let form = CreateRouteForm {
            supplier_id: 9,
            route_date: Utc::now().naive_utc(),
            stops: vec![RouteStopForm {
                customer_id: 5,
                address: None,
                scheduled_time: None,
            }],
        };

        let result = create_route(&repo, &claims(9, ROLE_SUPPLIER), form, None);

        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[test]
    fn create_route_logs_activity() {
        let mut repo = MockRouteRepository::new();
        repo.expect_create_route()
            .withf(|new_route| new_route.supplier_id == 9 && new_route.stops.len() == 1)
            .returning(|_| Ok(sample_route(4, 9)));
        repo.expect_log_activity()
            .withf(|entry| entry.entity == "route" && entry.entity_id == Some(4))
            .returning(|_| Ok(()));

        let form = CreateRouteForm {
            supplier_id: 9,
            route_date: Utc::now().naive_utc(),
            stops: vec![RouteStopForm {
                customer_id: 5,
                address: None,
                scheduled_time: None,
            }],
        };

        let route =
            create_route(&repo, &claims(1, ROLE_ADMIN), form, None).expect("expected success");

        assert_eq!(route.id, 4);
    }

    #[test]
    fn supplier_cannot_update_foreign_route() {
        let mut repo = MockRouteRepository::new();
        repo.expect_get_route_by_id()
            .returning(|_| Ok(Some(sample_route(4, 9))));

        let form = UpdateRouteForm {
            supplier_id: None,
            route_date: None,
            status: Some(RouteStatus::InProgress),
            stops: None,
        };

        let result = update_route(&repo, &claims(10, ROLE_SUPPLIER), 4, form, None);

        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[test]
    fn customers_cannot_update_routes() {
        let repo = MockRouteRepository::new();

        let form = UpdateRouteForm {
            supplier_id: None,
            route_date: None,
            status: None,
            stops: None,
        };

        let result = update_route(&repo, &claims(5, ROLE_CUSTOMER), 4, form, None);

        assert!(matches!(result, Err(ServiceError::Forbidden)));
    }

    #[test]
    fn routes_by_date_uses_day_window() {
        let mut repo = MockRouteRepository::new();
        repo.expect_list_routes()
            .withf(|query| {
                let Some(range) = query.range else {
                    return false;
                };
                range.end - range.start == chrono::Duration::days(1)
                    && range.start.time() == chrono::NaiveTime::MIN
            })
            .returning(|_| Ok(vec![]));

        let date = NaiveDate::from_ymd_opt(2026, 9, 3).unwrap();

        routes_by_date(&repo, &claims(1, ROLE_ADMIN), date).expect("expected success");
    }
}
