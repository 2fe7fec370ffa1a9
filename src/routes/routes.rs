use actix_web::{HttpRequest, HttpResponse, Responder, get, post, put, web};
use chrono::NaiveDate;
use serde_json::json;

use crate::auth::{AuthenticatedUser, client_ip};
use crate::forms::routes::{CreateRouteForm, UpdateRouteForm};
use crate::repository::DieselRepository;
use crate::routes::service_error;
use crate::services::routes::{create_route, list_routes, routes_by_date, update_route};

#[get("/routes")]
pub async fn list_routes_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_routes(repo.get_ref(), &user) {
        Ok(routes) => HttpResponse::Ok().json(routes),
        Err(err) => service_error(err, "Failed to list routes"),
    }
}

#[post("/routes")]
pub async fn create_route_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateRouteForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match create_route(repo.get_ref(), &user, form.into_inner(), ip.as_deref()) {
        Ok(route) => HttpResponse::Created().json(route),
        Err(err) => service_error(err, "Failed to create route"),
    }
}

#[put("/routes/{id}")]
pub async fn update_route_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<UpdateRouteForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match update_route(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
        ip.as_deref(),
    ) {
        Ok(route) => HttpResponse::Ok().json(route),
        Err(err) => service_error(err, "Failed to update route"),
    }
}

#[get("/routes/date/{date}")]
pub async fn routes_by_date_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<String>,
) -> impl Responder {
    let date = match NaiveDate::parse_from_str(&path.into_inner(), "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            return HttpResponse::BadRequest()
                .json(json!({"message": "Invalid date, expected YYYY-MM-DD"}));
        }
    };

    match routes_by_date(repo.get_ref(), &user, date) {
        Ok(routes) => HttpResponse::Ok().json(routes),
        Err(err) => service_error(err, "Failed to list routes by date"),
    }
}
