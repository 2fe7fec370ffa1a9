use actix_web::{HttpRequest, HttpResponse, Responder, get, post, put, web};

use crate::auth::{AuthenticatedUser, client_ip};
use crate::events::{AppEvent, EventBus};
use crate::forms::deliveries::{CreateDeliveryForm, UpdateDeliveryStatusForm};
use crate::repository::DieselRepository;
use crate::routes::service_error;
use crate::services::deliveries::{
    create_delivery, list_deliveries, supplier_deliveries, update_delivery_status,
};

#[get("/deliveries")]
pub async fn list_deliveries_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_deliveries(repo.get_ref(), &user) {
        Ok(deliveries) => HttpResponse::Ok().json(deliveries),
        Err(err) => service_error(err, "Failed to list deliveries"),
    }
}

#[post("/deliveries")]
pub async fn create_delivery_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateDeliveryForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match create_delivery(repo.get_ref(), &user, form.into_inner(), ip.as_deref()) {
        Ok(delivery) => HttpResponse::Created().json(delivery),
        Err(err) => service_error(err, "Failed to create delivery"),
    }
}

#[put("/deliveries/{id}/status")]
pub async fn update_delivery_status_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    bus: web::Data<EventBus>,
    path: web::Path<i32>,
    form: web::Json<UpdateDeliveryStatusForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match update_delivery_status(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
        ip.as_deref(),
    ) {
        Ok(delivery) => {
            bus.publish(AppEvent::DeliveryUpdated(delivery.clone()));
            HttpResponse::Ok().json(delivery)
        }
        Err(err) => service_error(err, "Failed to update delivery status"),
    }
}

#[get("/deliveries/supplier/{id}")]
pub async fn supplier_deliveries_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match supplier_deliveries(repo.get_ref(), &user, path.into_inner()) {
        Ok(deliveries) => HttpResponse::Ok().json(deliveries),
        Err(err) => service_error(err, "Failed to list supplier deliveries"),
    }
}
