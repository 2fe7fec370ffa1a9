use actix_web::{HttpResponse, Responder, get, web};

use crate::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::service_error;
use crate::services::logs::{LogQuery, list_logs, user_activity};

#[get("/logs")]
pub async fn list_logs_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<LogQuery>,
) -> impl Responder {
    match list_logs(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error(err, "Failed to list activity logs"),
    }
}

#[get("/logs/user/{id}")]
pub async fn user_activity_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match user_activity(repo.get_ref(), &user, path.into_inner()) {
        Ok(logs) => HttpResponse::Ok().json(logs),
        Err(err) => service_error(err, "Failed to list user activity"),
    }
}
