use crate::api::errors::repository_error_response;
use crate::db::{CustomerOperations, ReportOperations};
use crate::enums::common::ErrorBody;
use crate::enums::reports::TopCustomer;
use crate::models::customer::{Customer, NewCustomer};
use crate::models::order::Order;
use actix_web::middleware::NormalizePath;
use actix_web::{get, post, web, HttpResponse, Responder};

pub fn config(
    cfg: &mut web::ServiceConfig,
    customer_ops: &CustomerOperations,
    report_ops: &ReportOperations,
) {
    // `/top` has to land before the `{id}` capture.
    cfg.service(
        web::scope("/customers")
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(customer_ops.clone()))
            .app_data(web::Data::new(report_ops.clone()))
            .service(top_customers)
            .service(create_customer)
            .service(get_customer)
            .service(get_customer_orders),
    );
}

#[utoipa::path(
    post,
    tag = "Customers",
    path = "/customers",
    request_body = NewCustomer,
    responses(
        (status = 200, description = "Customer created", body = Customer)
    ),
    summary = "Register a new customer"
)]
#[post("")]
pub(super) async fn create_customer(
    customer_ops: web::Data<CustomerOperations>,
    req_data: web::Json<NewCustomer>,
) -> impl Responder {
    match customer_ops.create_customer(req_data.into_inner()) {
        Ok(customer) => {
            info!("New customer created: {}", customer.id);
            HttpResponse::Ok().json(customer)
        }
        Err(e) => {
            error!("CUSTOMERS: create_customer(): {}", e);
            repository_error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    tag = "Customers",
    path = "/customers/{id}",
    params(
        ("id", description = "Unique id of the customer to fetch"),
    ),
    responses(
        (status = 200, description = "Customer, or null when unknown", body = Customer)
    ),
    summary = "Fetch a customer by id"
)]
#[get("/{id}")]
pub(super) async fn get_customer(
    customer_ops: web::Data<CustomerOperations>,
    path: web::Path<(i32,)>,
) -> impl Responder {
    match customer_ops.get_customer(path.into_inner().0) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(e) => {
            error!("CUSTOMERS: get_customer(): {}", e);
            repository_error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    tag = "Customers",
    path = "/customers/{id}/orders",
    params(
        ("id", description = "Customer whose orders to list"),
    ),
    responses(
        (status = 200, description = "Orders placed by the customer", body = [Order])
    ),
    summary = "List a customer's orders"
)]
#[get("/{id}/orders")]
pub(super) async fn get_customer_orders(
    customer_ops: web::Data<CustomerOperations>,
    path: web::Path<(i32,)>,
) -> impl Responder {
    let search_customer_id = path.into_inner().0;
    match customer_ops.get_customer_orders(search_customer_id) {
        Ok(orders) => {
            debug!(
                "get_customer_orders: {} orders for customer {}",
                orders.len(),
                search_customer_id
            );
            HttpResponse::Ok().json(orders)
        }
        Err(e) => {
            error!("CUSTOMERS: get_customer_orders(): {}", e);
            repository_error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    tag = "Reports",
    path = "/customers/top",
    responses(
        (status = 200, description = "Most frequent customers by order count", body = [TopCustomer]),
        (status = 500, description = "Report failed", body = ErrorBody)
    ),
    summary = "Top customers by order count"
)]
#[get("/top")]
pub(super) async fn top_customers(report_ops: web::Data<ReportOperations>) -> impl Responder {
    // Every failure in this multi-step report collapses to a generic 500.
    match report_ops.top_customers() {
        Ok(top) => HttpResponse::Ok().json(top),
        Err(e) => {
            error!("CUSTOMERS: top_customers(): {}", e);
            HttpResponse::InternalServerError().json(ErrorBody {
                error: "Internal Server Error".to_string(),
            })
        }
    }
}
