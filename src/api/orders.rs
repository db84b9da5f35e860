use crate::api::errors::repository_error_response;
use crate::db::OrderOperations;
use crate::enums::common::ErrorBody;
use crate::enums::orders::{OrderRequest, OrderStatusUpdate, OrderWithItems};
use crate::models::order::Order;
use actix_web::middleware::NormalizePath;
use actix_web::{get, patch, post, web, HttpResponse, Responder};

pub fn config(cfg: &mut web::ServiceConfig, order_ops: &OrderOperations) {
    cfg.service(
        web::scope("/orders")
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(order_ops.clone()))
            .service(create_order)
            .service(get_order)
            .service(update_order_status),
    );
}

#[utoipa::path(
    post,
    tag = "Orders",
    path = "/orders",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order created", body = Order),
        (status = 400, description = "A line item references an unknown menu item", body = ErrorBody)
    ),
    summary = "Place a new order"
)]
#[post("")]
pub(super) async fn create_order(
    order_ops: web::Data<OrderOperations>,
    req_data: web::Json<OrderRequest>,
) -> impl Responder {
    let OrderRequest {
        customer_id,
        restaurant_id,
        items,
    } = req_data.into_inner();
    match order_ops.create_order(customer_id, restaurant_id, items) {
        Ok(order) => {
            debug!(
                "Order {} created for customer {}: total {}",
                order.id, customer_id, order.total_price
            );
            HttpResponse::Ok().json(order)
        }
        Err(e) => {
            error!("ORDERS: create_order(): {}", e);
            repository_error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    tag = "Orders",
    path = "/orders/{id}",
    params(
        ("id", description = "Unique id of the order to fetch"),
    ),
    responses(
        (status = 200, description = "Order with its line items, or null when unknown", body = OrderWithItems)
    ),
    summary = "Fetch an order with its line items"
)]
#[get("/{id}")]
pub(super) async fn get_order(
    order_ops: web::Data<OrderOperations>,
    path: web::Path<(i32,)>,
) -> impl Responder {
    match order_ops.get_order_with_items(path.into_inner().0) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(e) => {
            error!("ORDERS: get_order(): {}", e);
            repository_error_response(&e)
        }
    }
}

#[utoipa::path(
    patch,
    tag = "Orders",
    path = "/orders/{id}/status",
    params(
        ("id", description = "Order whose status to overwrite"),
    ),
    request_body = OrderStatusUpdate,
    responses(
        (status = 200, description = "Order updated", body = Order),
        (status = 404, description = "No order with that id", body = ErrorBody)
    ),
    summary = "Overwrite an order's status"
)]
#[patch("/{id}/status")]
pub(super) async fn update_order_status(
    order_ops: web::Data<OrderOperations>,
    path: web::Path<(i32,)>,
    req_data: web::Json<OrderStatusUpdate>,
) -> impl Responder {
    let new_status = req_data.into_inner().status;
    match order_ops.update_order_status(path.into_inner().0, new_status) {
        Ok(order) => {
            info!("Order {} moved to status {}", order.id, order.status);
            HttpResponse::Ok().json(order)
        }
        Err(e) => {
            error!("ORDERS: update_order_status(): {}", e);
            repository_error_response(&e)
        }
    }
}
