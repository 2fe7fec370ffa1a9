use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::auth::{AuthenticatedUser, client_ip};
use crate::events::{AppEvent, EventBus};
use crate::forms::orders::{AssignOrderForm, CreateOrderForm, UpdateOrderForm};
use crate::repository::DieselRepository;
use crate::routes::service_error;
use crate::services::orders::{assign_order, cancel_order, create_order, list_orders, update_order};

#[get("/orders")]
pub async fn list_orders_handler(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_orders(repo.get_ref(), &user) {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(err) => service_error(err, "Failed to list orders"),
    }
}

#[post("/orders")]
pub async fn create_order_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    bus: web::Data<EventBus>,
    form: web::Json<CreateOrderForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match create_order(repo.get_ref(), &user, form.into_inner(), ip.as_deref()) {
        Ok(order) => {
            bus.publish(AppEvent::NewOrder(order.clone()));
            HttpResponse::Created().json(order)
        }
        Err(err) => service_error(err, "Failed to create order"),
    }
}

#[put("/orders/{id}")]
pub async fn update_order_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    bus: web::Data<EventBus>,
    path: web::Path<i32>,
    form: web::Json<UpdateOrderForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match update_order(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
        ip.as_deref(),
    ) {
        Ok(order) => {
            bus.publish(AppEvent::OrderUpdated(order.clone()));
            HttpResponse::Ok().json(order)
        }
        Err(err) => service_error(err, "Failed to update order"),
    }
}

#[put("/orders/{id}/assign")]
pub async fn assign_order_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    bus: web::Data<EventBus>,
    path: web::Path<i32>,
    form: web::Json<AssignOrderForm>,
) -> impl Responder {
    let ip = client_ip(&req);
    match assign_order(
        repo.get_ref(),
        &user,
        path.into_inner(),
        form.into_inner(),
        ip.as_deref(),
    ) {
        Ok(order) => {
            bus.publish(AppEvent::OrderUpdated(order.clone()));
            HttpResponse::Ok().json(order)
        }
        Err(err) => service_error(err, "Failed to assign order"),
    }
}

#[delete("/orders/{id}")]
pub async fn cancel_order_handler(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    bus: web::Data<EventBus>,
    path: web::Path<i32>,
) -> impl Responder {
    let ip = client_ip(&req);
    match cancel_order(repo.get_ref(), &user, path.into_inner(), ip.as_deref()) {
        Ok(order) => {
            bus.publish(AppEvent::OrderUpdated(order.clone()));
            HttpResponse::Ok().json(order)
        }
        Err(err) => service_error(err, "Failed to cancel order"),
    }
}
