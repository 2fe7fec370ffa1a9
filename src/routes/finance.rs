use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::auth::{AuthenticatedUser, client_ip};
use crate::forms::finance::{AddExpenseForm, AddIncomingForm};
use crate::repository::DieselRepository;
use crate::routes::service_error;
use crate::services::finance::{
    LedgerQuery, add_expense, add_incoming, build_report, list_incoming, list_outgoing,
};

#[get("/finance/incoming")]
pub async fn list_incoming_handler(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<LedgerQuery>,
) -> impl Responder {
    match list_incoming(repo.get_ref(), params.into_inner()) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => service_error(err, "Failed to list incoming transactions"),
    }
}

#[post("/finance/incoming")]
pub async fn add_incoming_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddIncomingForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match add_incoming(repo.get_ref(), &user, form.into_inner(), ip.as_deref()) {
        Ok(tx) => HttpResponse::Created().json(tx),
        Err(err) => service_error(err, "Failed to record incoming transaction"),
    }
}

#[get("/finance/outgoing")]
pub async fn list_outgoing_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<LedgerQuery>,
) -> impl Responder {
    match list_outgoing(repo.get_ref(), &user, params.into_inner()) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err) => service_error(err, "Failed to list outgoing transactions"),
    }
}

#[post("/finance/outgoing")]
pub async fn add_expense_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddExpenseForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match add_expense(repo.get_ref(), &user, form.into_inner(), ip.as_deref()) {
        Ok(tx) => HttpResponse::Created().json(tx),
        Err(err) => service_error(err, "Failed to record expense"),
    }
}

#[get("/finance/reports")]
pub async fn finance_report_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<LedgerQuery>,
) -> impl Responder {
    match build_report(repo.get_ref(), &user, params.into_inner()) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(err) => service_error(err, "Failed to build finance report"),
    }
}
