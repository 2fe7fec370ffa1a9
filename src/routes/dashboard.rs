use actix_web::{HttpResponse, Responder, get, web};

use crate::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::service_error;
use crate::services::dashboard::{admin_dashboard, customer_dashboard, supplier_dashboard};

#[get("/dashboard/admin")]
pub async fn admin_dashboard_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match admin_dashboard(repo.get_ref(), &user) {
        Ok(dashboard) => HttpResponse::Ok().json(dashboard),
        Err(err) => service_error(err, "Failed to build admin dashboard"),
    }
}

#[get("/dashboard/customer")]
pub async fn customer_dashboard_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_dashboard(repo.get_ref(), &user) {
        Ok(dashboard) => HttpResponse::Ok().json(dashboard),
        Err(err) => service_error(err, "Failed to build customer dashboard"),
    }
}

#[get("/dashboard/supplier")]
pub async fn supplier_dashboard_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match supplier_dashboard(repo.get_ref(), &user) {
        Ok(dashboard) => HttpResponse::Ok().json(dashboard),
        Err(err) => service_error(err, "Failed to build supplier dashboard"),
    }
}
