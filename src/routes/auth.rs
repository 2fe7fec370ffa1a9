use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::auth::{AuthConfig, AuthenticatedUser, client_ip};
use crate::forms::auth::LoginForm;
use crate::repository::DieselRepository;
use crate::routes::{message_body, service_error};
use crate::services::auth::{current_user, login, logout};

#[post("/auth/login")]
pub async fn login_handler(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    config: web::Data<AuthConfig>,
    form: web::Json<LoginForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match login(repo.get_ref(), &config, form.into_inner(), ip.as_deref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => service_error(err, "Failed to log in"),
    }
}

#[get("/auth/me")]
pub async fn me_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match current_user(repo.get_ref(), &user) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(err) => service_error(err, "Failed to load current user"),
    }
}

#[post("/auth/logout")]
pub async fn logout_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let ip = client_ip(&req);
    logout(repo.get_ref(), &user, ip.as_deref());
    HttpResponse::Ok().json(message_body("Logged out"))
}
