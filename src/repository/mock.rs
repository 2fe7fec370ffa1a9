use mockall::mock;

use super::{
    ActivityLogReader, ActivityLogWriter, DateRange, DeliveryListQuery, DeliveryReader,
    DeliveryWriter, FinanceReader, FinanceWriter, IncomingListQuery, LogListQuery, OrderListQuery,
    OrderReader, OrderWriter, OutgoingListQuery, RouteListQuery, RouteReader, RouteWriter,
    SaleListQuery, ShopSaleReader, ShopSaleWriter, UserListQuery, UserReader, UserWriter,
    errors::RepositoryResult,
};
use crate::domain::{
    activity_log::{ActivityLog, NewActivityLog},
    delivery::{Delivery, NewDelivery, UpdateDelivery},
    finance::{
        IncomingTransaction, NewIncomingTransaction, NewOutgoingTransaction, OutgoingTransaction,
    },
    order::{NewOrder, Order, UpdateOrder},
    route::{NewRoute, Route, UpdateRoute},
    shop_sale::{NewShopSale, ShopSale},
    user::{NewUser, UpdateUser, User},
};

// Combined mocks per service area: each service is generic over the union of
// traits it calls, so the mock has to implement that union.

mock! {
    pub AuthRepository {}

    impl UserReader for AuthRepository {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
        fn count_users_by_role(&self, role: &str) -> RepositoryResult<usize>;
    }

    impl ActivityLogWriter for AuthRepository {
        fn log_activity(&self, entry: &NewActivityLog) -> RepositoryResult<()>;
    }
}

mock! {
    pub UserRepository {}

    impl UserReader for UserRepository {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
        fn count_users_by_role(&self, role: &str) -> RepositoryResult<usize>;
    }

    impl UserWriter for UserRepository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
        fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User>;
        fn delete_user(&self, user_id: i32) -> RepositoryResult<()>;
    }

    impl ActivityLogWriter for UserRepository {
        fn log_activity(&self, entry: &NewActivityLog) -> RepositoryResult<()>;
    }
}

mock! {
    pub OrderRepository {}

    impl OrderReader for OrderRepository {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
        fn count_orders(&self, query: OrderListQuery) -> RepositoryResult<usize>;
    }

    impl OrderWriter for OrderRepository {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
    }

    impl ActivityLogWriter for OrderRepository {
        fn log_activity(&self, entry: &NewActivityLog) -> RepositoryResult<()>;
    }
}

mock! {
    pub DeliveryRepository {}

    impl DeliveryReader for DeliveryRepository {
        fn get_delivery_by_id(&self, id: i32) -> RepositoryResult<Option<Delivery>>;
        fn list_deliveries(&self, query: DeliveryListQuery) -> RepositoryResult<Vec<Delivery>>;
        fn count_deliveries(&self, query: DeliveryListQuery) -> RepositoryResult<usize>;
    }

    impl DeliveryWriter for DeliveryRepository {
        fn create_delivery(&self, new_delivery: &NewDelivery) -> RepositoryResult<Delivery>;
        fn update_delivery(&self, delivery_id: i32, updates: &UpdateDelivery) -> RepositoryResult<Delivery>;
    }

    impl OrderWriter for DeliveryRepository {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
    }

    impl ActivityLogWriter for DeliveryRepository {
        fn log_activity(&self, entry: &NewActivityLog) -> RepositoryResult<()>;
    }
}

mock! {
    pub FinanceRepository {}

    impl FinanceReader for FinanceRepository {
        fn list_incoming(&self, query: IncomingListQuery) -> RepositoryResult<Vec<IncomingTransaction>>;
        fn list_outgoing(&self, query: OutgoingListQuery) -> RepositoryResult<Vec<OutgoingTransaction>>;
        fn sum_incoming_by_source(&self, range: Option<DateRange>) -> RepositoryResult<Vec<(String, i64)>>;
        fn sum_outgoing_by_category(&self, range: Option<DateRange>) -> RepositoryResult<Vec<(String, i64)>>;
        fn total_incoming(&self, range: Option<DateRange>) -> RepositoryResult<i64>;
        fn total_outgoing(&self, range: Option<DateRange>) -> RepositoryResult<i64>;
        fn total_incoming_for_customer(&self, customer_id: i32) -> RepositoryResult<i64>;
    }

    impl FinanceWriter for FinanceRepository {
        fn create_incoming(&self, tx: &NewIncomingTransaction) -> RepositoryResult<IncomingTransaction>;
        fn create_outgoing(&self, tx: &NewOutgoingTransaction) -> RepositoryResult<OutgoingTransaction>;
    }

    impl ActivityLogWriter for FinanceRepository {
        fn log_activity(&self, entry: &NewActivityLog) -> RepositoryResult<()>;
    }
}

mock! {
    pub RouteRepository {}

    impl RouteReader for RouteRepository {
        fn get_route_by_id(&self, id: i32) -> RepositoryResult<Option<Route>>;
        fn list_routes(&self, query: RouteListQuery) -> RepositoryResult<Vec<Route>>;
    }

    impl RouteWriter for RouteRepository {
        fn create_route(&self, new_route: &NewRoute) -> RepositoryResult<Route>;
        fn update_route(&self, route_id: i32, updates: &UpdateRoute) -> RepositoryResult<Route>;
    }

    impl ActivityLogWriter for RouteRepository {
        fn log_activity(&self, entry: &NewActivityLog) -> RepositoryResult<()>;
    }
}

mock! {
    pub ShopSaleRepository {}

    impl ShopSaleReader for ShopSaleRepository {
        fn list_sales(&self, query: SaleListQuery) -> RepositoryResult<Vec<ShopSale>>;
    }

    impl ShopSaleWriter for ShopSaleRepository {
        fn create_sale(&self, new_sale: &NewShopSale) -> RepositoryResult<ShopSale>;
    }

    impl FinanceWriter for ShopSaleRepository {
        fn create_incoming(&self, tx: &NewIncomingTransaction) -> RepositoryResult<IncomingTransaction>;
        fn create_outgoing(&self, tx: &NewOutgoingTransaction) -> RepositoryResult<OutgoingTransaction>;
    }

    impl ActivityLogWriter for ShopSaleRepository {
        fn log_activity(&self, entry: &NewActivityLog) -> RepositoryResult<()>;
    }
}

mock! {
    pub ActivityLogRepository {}

    impl ActivityLogReader for ActivityLogRepository {
        fn list_logs(&self, query: LogListQuery) -> RepositoryResult<(usize, Vec<ActivityLog>)>;
    }
}

mock! {
    pub DashboardRepository {}

    impl OrderReader for DashboardRepository {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
        fn count_orders(&self, query: OrderListQuery) -> RepositoryResult<usize>;
    }

    impl DeliveryReader for DashboardRepository {
        fn get_delivery_by_id(&self, id: i32) -> RepositoryResult<Option<Delivery>>;
        fn list_deliveries(&self, query: DeliveryListQuery) -> RepositoryResult<Vec<Delivery>>;
        fn count_deliveries(&self, query: DeliveryListQuery) -> RepositoryResult<usize>;
    }

    impl UserReader for DashboardRepository {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
        fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
        fn count_users_by_role(&self, role: &str) -> RepositoryResult<usize>;
    }

    impl FinanceReader for DashboardRepository {
        fn list_incoming(&self, query: IncomingListQuery) -> RepositoryResult<Vec<IncomingTransaction>>;
        fn list_outgoing(&self, query: OutgoingListQuery) -> RepositoryResult<Vec<OutgoingTransaction>>;
        fn sum_incoming_by_source(&self, range: Option<DateRange>) -> RepositoryResult<Vec<(String, i64)>>;
        fn sum_outgoing_by_category(&self, range: Option<DateRange>) -> RepositoryResult<Vec<(String, i64)>>;
        fn total_incoming(&self, range: Option<DateRange>) -> RepositoryResult<i64>;
        fn total_outgoing(&self, range: Option<DateRange>) -> RepositoryResult<i64>;
        fn total_incoming_for_customer(&self, customer_id: i32) -> RepositoryResult<i64>;
    }
}
