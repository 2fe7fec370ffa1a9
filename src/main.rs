use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use aquadesk::auth::AuthConfig;
use aquadesk::db::establish_connection_pool;
use aquadesk::events::EventBus;
use aquadesk::repository::DieselRepository;
use aquadesk::routes::auth::{login_handler, logout_handler, me_handler};
use aquadesk::routes::dashboard::{
    admin_dashboard_handler, customer_dashboard_handler, supplier_dashboard_handler,
};
use aquadesk::routes::deliveries::{
    create_delivery_handler, list_deliveries_handler, supplier_deliveries_handler,
    update_delivery_status_handler,
};
use aquadesk::routes::events::events_handler;
use aquadesk::routes::finance::{
    add_expense_handler, add_incoming_handler, finance_report_handler, list_incoming_handler,
    list_outgoing_handler,
};
use aquadesk::routes::health::health;
use aquadesk::routes::logs::{list_logs_handler, user_activity_handler};
use aquadesk::routes::orders::{
    assign_order_handler, cancel_order_handler, create_order_handler, list_orders_handler,
    update_order_handler,
};
use aquadesk::routes::routes::{
    create_route_handler, list_routes_handler, routes_by_date_handler, update_route_handler,
};
use aquadesk::routes::shop_sales::{daily_sales_handler, list_sales_handler, record_sale_handler};
use aquadesk::routes::users::{
    create_user_handler, delete_user_handler, list_users_handler, update_user_handler,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let jwt_secret = match env::var("JWT_SECRET") {
        Ok(secret) => secret,
        Err(_) => {
            log::error!("JWT_SECRET environment variable not set");
            std::process::exit(1);
        }
    };
    let auth_config = AuthConfig::new(jwt_secret);

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);
    let bus = EventBus::new();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(health)
                    .service(login_handler)
                    .service(me_handler)
                    .service(logout_handler)
                    .service(list_users_handler)
                    .service(create_user_handler)
                    .service(update_user_handler)
                    .service(delete_user_handler)
                    .service(list_orders_handler)
                    .service(create_order_handler)
                    .service(assign_order_handler)
                    .service(update_order_handler)
                    .service(cancel_order_handler)
                    .service(list_deliveries_handler)
                    .service(create_delivery_handler)
                    .service(update_delivery_status_handler)
                    .service(supplier_deliveries_handler)
                    .service(list_incoming_handler)
                    .service(add_incoming_handler)
                    .service(list_outgoing_handler)
                    .service(add_expense_handler)
                    .service(finance_report_handler)
                    .service(list_routes_handler)
                    .service(create_route_handler)
                    .service(routes_by_date_handler)
                    .service(update_route_handler)
                    .service(list_sales_handler)
                    .service(record_sale_handler)
                    .service(daily_sales_handler)
                    .service(list_logs_handler)
                    .service(user_activity_handler)
                    .service(admin_dashboard_handler)
                    .service(customer_dashboard_handler)
                    .service(supplier_dashboard_handler)
                    .service(events_handler),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(auth_config.clone()))
            .app_data(web::Data::new(bus.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
