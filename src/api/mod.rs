pub mod customers;
mod errors;
pub mod menu;
pub mod orders;
pub mod restaurants;

use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
pub(crate) use errors::default_error_handler;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "platter", description = "CRUD backend for a food-ordering platform"),
    paths(
        customers::create_customer,
        customers::get_customer,
        customers::get_customer_orders,
        customers::top_customers,
        restaurants::create_restaurant,
        restaurants::get_all_restaurants,
        restaurants::get_restaurant_menu,
        restaurants::create_menu_item,
        restaurants::restaurant_revenue,
        menu::update_menu_item,
        menu::top_menu_items,
        orders::create_order,
        orders::get_order,
        orders::update_order_status,
    ),
    components(schemas(
        crate::models::customer::Customer,
        crate::models::customer::NewCustomer,
        crate::models::restaurant::Restaurant,
        crate::models::restaurant::NewRestaurant,
        crate::models::menu::MenuItem,
        crate::models::menu::UpdateMenuItem,
        crate::models::order::Order,
        crate::models::order::OrderItem,
        crate::models::order::OrderStatus,
        crate::enums::menu::NewMenuItemRequest,
        crate::enums::orders::OrderRequest,
        crate::enums::orders::OrderItemRequest,
        crate::enums::orders::OrderStatusUpdate,
        crate::enums::orders::OrderWithItems,
        crate::enums::reports::RevenueResponse,
        crate::enums::reports::TopMenuItem,
        crate::enums::reports::QuantitySum,
        crate::enums::reports::TopCustomer,
        crate::enums::common::ErrorBody,
    ))
)]
struct ApiDoc;

#[get("/")]
async fn root_endpoint() -> impl Responder {
    HttpResponse::Ok().body("Server up!")
}

#[get("/api-doc/openapi.json")]
async fn openapi_doc() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(web::JsonConfig::default().error_handler(default_error_handler))
        .service(root_endpoint)
        .service(openapi_doc)
        .configure(|cfg| customers::config(cfg, &state.customer_ops, &state.report_ops))
        .configure(|cfg| {
            restaurants::config(cfg, &state.restaurant_ops, &state.menu_ops, &state.report_ops)
        })
        .configure(|cfg| menu::config(cfg, &state.menu_ops, &state.report_ops))
        .configure(|cfg| orders::config(cfg, &state.order_ops));
}
