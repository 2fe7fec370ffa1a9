use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::auth::{AuthenticatedUser, client_ip};
use crate::forms::users::{CreateUserForm, UpdateUserForm};
use crate::repository::DieselRepository;
use crate::routes::{message_body, service_error};
use crate::services::users::{UserQuery, create_user, delete_user, list_users, update_user};

#[get("/users")]
pub async fn list_users_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<UserQuery>,
) -> impl Responder {
    match list_users(repo.get_ref(), &user, params.into_inner()) {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(err) => service_error(err, "Failed to list users"),
    }
}

#[post("/users")]
pub async fn create_user_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateUserForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match create_user(repo.get_ref(), &user, form.into_inner(), ip.as_deref()) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => service_error(err, "Failed to create user"),
    }
}

#[put("/users/{id}")]
pub async fn update_user_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<UpdateUserForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match update_user(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
        ip.as_deref(),
    ) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => service_error(err, "Failed to update user"),
    }
}

#[delete("/users/{id}")]
pub async fn delete_user_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    let ip = client_ip(&req);
    match delete_user(repo.get_ref(), &user, path.into_inner(), ip.as_deref()) {
        Ok(()) => HttpResponse::Ok().json(message_body("User deleted")),
        Err(err) => service_error(err, "Failed to delete user"),
    }
}
