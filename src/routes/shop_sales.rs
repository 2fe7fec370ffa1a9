use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use crate::auth::{AuthenticatedUser, client_ip};
use crate::forms::shop_sales::RecordSaleForm;
use crate::repository::DieselRepository;
use crate::routes::service_error;
use crate::services::shop_sales::{daily_sales, list_sales, record_sale};

#[get("/shop-sales")]
pub async fn list_sales_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_sales(repo.get_ref(), &user) {
        Ok(sales) => HttpResponse::Ok().json(sales),
        Err(err) => service_error(err, "Failed to list shop sales"),
    }
}

#[post("/shop-sales")]
pub async fn record_sale_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<RecordSaleForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match record_sale(repo.get_ref(), &user, form.into_inner(), ip.as_deref()) {
        Ok(sale) => HttpResponse::Created().json(sale),
        Err(err) => service_error(err, "Failed to record shop sale"),
    }
}

#[get("/shop-sales/daily")]
pub async fn daily_sales_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match daily_sales(repo.get_ref(), &user) {
        Ok(daily) => HttpResponse::Ok().json(daily),
        Err(err) => service_error(err, "Failed to build daily sales report"),
    }
}
