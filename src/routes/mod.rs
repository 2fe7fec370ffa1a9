use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod auth;
pub mod dashboard;
pub mod deliveries;
pub mod events;
pub mod finance;
pub mod health;
pub mod logs;
pub mod orders;
pub mod routes;
pub mod shop_sales;
pub mod users;

/// Maps a service error to its HTTP response, logging server-side failures.
pub(crate) fn service_error(err: ServiceError, context: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(json!({"message": "Invalid credentials"}))
        }
        ServiceError::Forbidden => {
            HttpResponse::Forbidden().json(json!({"message": "Access denied"}))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({"message": "Not found"}))
        }
        ServiceError::Conflict(message) => {
            HttpResponse::Conflict().json(json!({"message": message}))
        }
        ServiceError::Form(message) => {
            HttpResponse::BadRequest().json(json!({"message": message}))
        }
        err => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().json(json!({"message": "Server error"}))
        }
    }
}

/// A plain `{"message": ...}` body.
pub(crate) fn message_body(message: &str) -> serde_json::Value {
    json!({"message": message})
}
