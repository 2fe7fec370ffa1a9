pub mod activity_log;
pub mod delivery;
pub mod finance;
pub mod order;
pub mod route;
pub mod shop_sale;
pub mod user;
