use crate::api::errors::repository_error_response;
use crate::db::{MenuOperations, ReportOperations, RestaurantOperations};
use crate::enums::menu::NewMenuItemRequest;
use crate::enums::reports::RevenueResponse;
use crate::models::menu::{MenuItem, NewMenuItem};
use crate::models::restaurant::{NewRestaurant, Restaurant};
use actix_web::middleware::NormalizePath;
use actix_web::{get, post, web, HttpResponse, Responder};

pub fn config(
    cfg: &mut web::ServiceConfig,
    restaurant_ops: &RestaurantOperations,
    menu_ops: &MenuOperations,
    report_ops: &ReportOperations,
) {
    cfg.service(
        web::scope("/restaurants")
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(restaurant_ops.clone()))
            .app_data(web::Data::new(menu_ops.clone()))
            .app_data(web::Data::new(report_ops.clone()))
            .service(create_restaurant)
            .service(get_all_restaurants)
            .service(get_restaurant_menu)
            .service(create_menu_item)
            .service(restaurant_revenue),
    );
}

#[utoipa::path(
    post,
    tag = "Restaurants",
    path = "/restaurants",
    request_body = NewRestaurant,
    responses(
        (status = 200, description = "Restaurant created", body = Restaurant)
    ),
    summary = "Register a new restaurant"
)]
#[post("")]
pub(super) async fn create_restaurant(
    restaurant_ops: web::Data<RestaurantOperations>,
    req_data: web::Json<NewRestaurant>,
) -> impl Responder {
    match restaurant_ops.create_restaurant(req_data.into_inner()) {
        Ok(restaurant) => {
            info!("New restaurant created: {}", restaurant.name);
            HttpResponse::Ok().json(restaurant)
        }
        Err(e) => {
            error!("RESTAURANTS: create_restaurant(): {}", e);
            repository_error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    tag = "Restaurants",
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants", body = [Restaurant])
    ),
    summary = "List restaurants"
)]
#[get("")]
pub(super) async fn get_all_restaurants(
    restaurant_ops: web::Data<RestaurantOperations>,
) -> impl Responder {
    match restaurant_ops.get_all_restaurants() {
        Ok(restaurants) => HttpResponse::Ok().json(restaurants),
        Err(e) => {
            error!("RESTAURANTS: get_all_restaurants(): {}", e);
            repository_error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    tag = "Restaurants",
    path = "/restaurants/{id}/menu",
    params(
        ("id", description = "Restaurant whose menu to list"),
    ),
    responses(
        (status = 200, description = "Available menu items", body = [MenuItem])
    ),
    summary = "List a restaurant's available menu"
)]
#[get("/{id}/menu")]
pub(super) async fn get_restaurant_menu(
    restaurant_ops: web::Data<RestaurantOperations>,
    path: web::Path<(i32,)>,
) -> impl Responder {
    match restaurant_ops.get_available_menu(path.into_inner().0) {
        Ok(menu) => HttpResponse::Ok().json(menu),
        Err(e) => {
            error!("RESTAURANTS: get_restaurant_menu(): {}", e);
            repository_error_response(&e)
        }
    }
}

#[utoipa::path(
    post,
    tag = "Menu",
    path = "/restaurants/{id}/menu",
    params(
        ("id", description = "Restaurant the item belongs to"),
    ),
    request_body = NewMenuItemRequest,
    responses(
        (status = 200, description = "Menu item created", body = MenuItem)
    ),
    summary = "Add an item to a restaurant's menu"
)]
#[post("/{id}/menu")]
pub(super) async fn create_menu_item(
    menu_ops: web::Data<MenuOperations>,
    path: web::Path<(i32,)>,
    req_data: web::Json<NewMenuItemRequest>,
) -> impl Responder {
    let req_data = req_data.into_inner();
    let new_item = NewMenuItem {
        restaurant_id: path.into_inner().0,
        name: req_data.name,
        price: req_data.price,
        is_available: req_data.is_available,
    };
    match menu_ops.add_menu_item(new_item) {
        Ok(menu_item) => {
            info!("New menu item created: {}", menu_item.name);
            HttpResponse::Ok().json(menu_item)
        }
        Err(e) => {
            error!("RESTAURANTS: create_menu_item(): {}", e);
            repository_error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    tag = "Reports",
    path = "/restaurants/{id}/revenue",
    params(
        ("id", description = "Restaurant to sum revenue for"),
    ),
    responses(
        (status = 200, description = "Lifetime revenue across all orders", body = RevenueResponse)
    ),
    summary = "Total revenue of a restaurant"
)]
#[get("/{id}/revenue")]
pub(super) async fn restaurant_revenue(
    report_ops: web::Data<ReportOperations>,
    path: web::Path<(i32,)>,
) -> impl Responder {
    match report_ops.restaurant_revenue(path.into_inner().0) {
        Ok(total_revenue) => HttpResponse::Ok().json(RevenueResponse { total_revenue }),
        Err(e) => {
            error!("RESTAURANTS: restaurant_revenue(): {}", e);
            repository_error_response(&e)
        }
    }
}
