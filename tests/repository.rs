use aquadesk::domain::activity_log::{LogAction, NewActivityLog};
use aquadesk::domain::delivery::{DeliveryStatus, NewDelivery, UpdateDelivery};
use aquadesk::domain::finance::{
    ExpenseCategory, IncomeSource, NewIncomingTransaction, NewOutgoingTransaction,
};
use aquadesk::domain::order::{NewOrder, OrderStatus, UpdateOrder};
use aquadesk::domain::route::{NewRoute, RouteStop, UpdateRoute};
use aquadesk::domain::shop_sale::NewShopSale;
use aquadesk::domain::user::UpdateUser;
use aquadesk::repository::errors::RepositoryError;
use aquadesk::repository::{
    ActivityLogReader, ActivityLogWriter, DateRange, DeliveryReader, DeliveryWriter,
    DieselRepository, FinanceReader, FinanceWriter, IncomingListQuery, LogListQuery,
    OrderListQuery, OrderReader, OrderWriter, OutgoingListQuery, RouteListQuery, RouteReader,
    RouteWriter, SaleListQuery, ShopSaleReader, ShopSaleWriter, UserListQuery, UserReader,
    UserWriter,
};

mod common;

use common::{fixed_datetime, seed_user};

#[test]
fn test_user_repository_crud() {
    let test_db = common::TestDb::new("test_user_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let alice = seed_user(&repo, "alice", "admin");
    seed_user(&repo, "bilal", "customer");
    seed_user(&repo, "carol", "customer");

    let (total, _users) = repo.list_users(UserListQuery::new()).unwrap();
    assert_eq!(total, 3);

    let (customers_total, customers) = repo
        .list_users(UserListQuery::new().role("customer"))
        .unwrap();
    assert_eq!(customers_total, 2);
    assert!(customers.iter().all(|user| user.role == "customer"));

    let (_, found) = repo
        .list_users(UserListQuery::new().search("bilal"))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].username, "bilal");

    assert_eq!(repo.count_users_by_role("customer").unwrap(), 2);
    assert_eq!(repo.count_users_by_role("supplier").unwrap(), 0);

    let by_email = repo.get_user_by_email("alice@example.com").unwrap();
    assert_eq!(by_email.map(|user| user.id), Some(alice.id));

    let update = UpdateUser {
        full_name: Some("Alice Updated".to_string()),
        is_active: Some(false),
        ..UpdateUser::default()
    };
    let alice = repo.update_user(alice.id, &update).unwrap();
    assert_eq!(alice.full_name, "Alice Updated");
    assert!(!alice.is_active);

    repo.delete_user(alice.id).unwrap();
    assert!(repo.get_user_by_id(alice.id).unwrap().is_none());

    let err = repo.delete_user(alice.id).expect_err("expected NotFound");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_order_repository_scoping() {
    let test_db = common::TestDb::new("test_order_repository_scoping.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer = seed_user(&repo, "bilal", "customer");
    let other = seed_user(&repo, "carol", "customer");
    let supplier = seed_user(&repo, "sami", "supplier");

    let o1 = repo
        .create_order(&NewOrder::new(
            customer.id,
            5,
            "12 Canal Road",
            fixed_datetime(30, 8),
        ))
        .unwrap();
    repo.create_order(&NewOrder::new(
        other.id,
        2,
        "5 Mall Road",
        fixed_datetime(30, 9),
    ))
    .unwrap();

    assert_eq!(repo.list_orders(OrderListQuery::new()).unwrap().len(), 2);
    let own = repo
        .list_orders(OrderListQuery::new().customer(customer.id))
        .unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].id, o1.id);

    let assigned = repo
        .update_order(o1.id, &UpdateOrder::assign(supplier.id))
        .unwrap();
    assert_eq!(assigned.status, OrderStatus::Assigned);
    assert_eq!(assigned.supplier_id, Some(supplier.id));

    let for_supplier = repo
        .list_orders(OrderListQuery::new().supplier(supplier.id))
        .unwrap();
    assert_eq!(for_supplier.len(), 1);

    assert_eq!(
        repo.count_orders(OrderListQuery::new().status(OrderStatus::Pending))
            .unwrap(),
        1
    );

    let err = repo
        .update_order(9999, &UpdateOrder::status(OrderStatus::Cancelled))
        .expect_err("expected NotFound");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_delivery_repository_completion() {
    let test_db = common::TestDb::new("test_delivery_repository_completion.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer = seed_user(&repo, "bilal", "customer");
    let supplier = seed_user(&repo, "sami", "supplier");

    let order = repo
        .create_order(&NewOrder::new(
            customer.id,
            3,
            "12 Canal Road",
            fixed_datetime(30, 8),
        ))
        .unwrap();

    let delivery = repo
        .create_delivery(
            &NewDelivery::new(order.id, supplier.id, fixed_datetime(30, 10))
                .with_route_name("North loop"),
        )
        .unwrap();
    assert_eq!(delivery.status, DeliveryStatus::Pending);
    assert_eq!(delivery.route_name.as_deref(), Some("North loop"));

    let listed = repo
        .list_deliveries(aquadesk::repository::DeliveryListQuery::new().supplier(supplier.id))
        .unwrap();
    assert_eq!(listed.len(), 1);

    let completed_at = fixed_datetime(30, 16);
    let delivery = repo
        .update_delivery(delivery.id, &UpdateDelivery::completed(completed_at))
        .unwrap();
    assert_eq!(delivery.status, DeliveryStatus::Completed);
    assert_eq!(delivery.completed_at, Some(completed_at));

    assert_eq!(
        repo.count_deliveries(
            aquadesk::repository::DeliveryListQuery::new().status(DeliveryStatus::Pending)
        )
        .unwrap(),
        0
    );
}

#[test]
fn test_finance_repository_aggregation() {
    let test_db = common::TestDb::new("test_finance_repository_aggregation.db");
    let repo = DieselRepository::new(test_db.pool());

    let customer = seed_user(&repo, "bilal", "customer");

    repo.create_incoming(
        &NewIncomingTransaction::new(IncomeSource::CustomerPayment, 50_000)
            .with_customer_id(customer.id)
            .with_occurred_at(fixed_datetime(10, 12)),
    )
    .unwrap();
    repo.create_incoming(
        &NewIncomingTransaction::new(IncomeSource::ShopSale, 20_000)
            .with_occurred_at(fixed_datetime(20, 12)),
    )
    .unwrap();
    repo.create_outgoing(
        &NewOutgoingTransaction::new(ExpenseCategory::Fuel, 30_000, "Diesel refill")
            .with_occurred_at(fixed_datetime(15, 12)),
    )
    .unwrap();

    assert_eq!(repo.total_incoming(None).unwrap(), 70_000);
    assert_eq!(repo.total_outgoing(None).unwrap(), 30_000);
    assert_eq!(
        repo.total_incoming_for_customer(customer.id).unwrap(),
        50_000
    );

    let first_half = DateRange::new(fixed_datetime(1, 0), fixed_datetime(16, 0));
    assert_eq!(repo.total_incoming(Some(first_half)).unwrap(), 50_000);
    assert_eq!(repo.total_outgoing(Some(first_half)).unwrap(), 30_000);

    let mut by_source = repo.sum_incoming_by_source(None).unwrap();
    by_source.sort();
    assert_eq!(
        by_source,
        vec![
            ("customer_payment".to_string(), 50_000),
            ("shop_sale".to_string(), 20_000),
        ]
    );

    let by_category = repo.sum_outgoing_by_category(None).unwrap();
    assert_eq!(by_category, vec![("fuel".to_string(), 30_000)]);

    let scoped = repo
        .list_incoming(IncomingListQuery::new().customer(customer.id))
        .unwrap();
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].amount_cents, 50_000);

    let fuel_only = repo
        .list_outgoing(OutgoingListQuery::new().category(ExpenseCategory::Fuel))
        .unwrap();
    assert_eq!(fuel_only.len(), 1);
}

#[test]
fn test_route_repository_stop_replacement() {
    let test_db = common::TestDb::new("test_route_repository_stop_replacement.db");
    let repo = DieselRepository::new(test_db.pool());

    let supplier = seed_user(&repo, "sami", "supplier");
    let c1 = seed_user(&repo, "bilal", "customer");
    let c2 = seed_user(&repo, "carol", "customer");

    let route = repo
        .create_route(
            &NewRoute::new(supplier.id, fixed_datetime(30, 0)).with_stops(vec![RouteStop {
                customer_id: c1.id,
                address: Some("12 Canal Road".to_string()),
                scheduled_time: Some("09:30".to_string()),
            }]),
        )
        .unwrap();
    assert_eq!(route.stops.len(), 1);

    let update = UpdateRoute {
        stops: Some(vec![
            RouteStop {
                customer_id: c1.id,
                address: None,
                scheduled_time: None,
            },
            RouteStop {
                customer_id: c2.id,
                address: Some("5 Mall Road".to_string()),
                scheduled_time: None,
            },
        ]),
        ..UpdateRoute::default()
    };
    let route = repo.update_route(route.id, &update).unwrap();
    assert_eq!(route.stops.len(), 2);

    let day = repo
        .list_routes(RouteListQuery::new().range(DateRange::new(
            fixed_datetime(30, 0),
            fixed_datetime(31, 0),
        )))
        .unwrap();
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].stops.len(), 2);

    let other_day = repo
        .list_routes(RouteListQuery::new().range(DateRange::new(
            fixed_datetime(1, 0),
            fixed_datetime(2, 0),
        )))
        .unwrap();
    assert!(other_day.is_empty());
}

#[test]
fn test_shop_sale_repository_scoping() {
    let test_db = common::TestDb::new("test_shop_sale_repository_scoping.db");
    let repo = DieselRepository::new(test_db.pool());

    let keeper = seed_user(&repo, "omar", "shopkeeper");
    let other = seed_user(&repo, "zara", "shopkeeper");

    repo.create_sale(&NewShopSale::new(keeper.id, 3, 450, 500))
        .unwrap();
    repo.create_sale(&NewShopSale::new(other.id, 1, 150, 150))
        .unwrap();

    let all = repo.list_sales(SaleListQuery::new()).unwrap();
    assert_eq!(all.len(), 2);

    let own = repo
        .list_sales(SaleListQuery::new().shopkeeper(keeper.id))
        .unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].change_returned_cents, 50);
}

#[test]
fn test_activity_log_pagination() {
    let test_db = common::TestDb::new("test_activity_log_pagination.db");
    let repo = DieselRepository::new(test_db.pool());

    let admin = seed_user(&repo, "alice", "admin");
    let customer = seed_user(&repo, "bilal", "customer");

    for i in 0..5 {
        repo.log_activity(
            &NewActivityLog::new(admin.id, LogAction::Create, "order")
                .with_entity_id(i)
                .with_ip_address(Some("10.0.0.1".to_string())),
        )
        .unwrap();
    }
    repo.log_activity(&NewActivityLog::new(customer.id, LogAction::Login, "auth"))
        .unwrap();

    let (total, page) = repo
        .list_logs(LogListQuery::new().limit(4).offset(0))
        .unwrap();
    assert_eq!(total, 6);
    assert_eq!(page.len(), 4);

    let (_, rest) = repo.list_logs(LogListQuery::new().limit(4).offset(4)).unwrap();
    assert_eq!(rest.len(), 2);

    let (user_total, user_logs) = repo
        .list_logs(LogListQuery::new().user(customer.id))
        .unwrap();
    assert_eq!(user_total, 1);
    assert_eq!(user_logs[0].action, LogAction::Login);
    assert_eq!(user_logs[0].entity, "auth");
}
