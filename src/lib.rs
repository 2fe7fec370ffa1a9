pub mod auth;
pub mod db;
pub mod domain;
pub mod events;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CUSTOMER: &str = "customer";
pub const ROLE_SUPPLIER: &str = "supplier";
pub const ROLE_SHOPKEEPER: &str = "shopkeeper";
