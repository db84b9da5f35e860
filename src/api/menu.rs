use crate::api::errors::repository_error_response;
use crate::db::{MenuOperations, ReportOperations};
use crate::enums::common::ErrorBody;
use crate::enums::reports::TopMenuItem;
use crate::models::menu::{MenuItem, UpdateMenuItem};
use actix_web::middleware::NormalizePath;
use actix_web::{get, patch, web, HttpResponse, Responder};

pub fn config(
    cfg: &mut web::ServiceConfig,
    menu_ops: &MenuOperations,
    report_ops: &ReportOperations,
) {
    // `/top-items` has to land before the `{id}` capture.
    cfg.service(
        web::scope("/menu")
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(menu_ops.clone()))
            .app_data(web::Data::new(report_ops.clone()))
            .service(top_menu_items)
            .service(update_menu_item),
    );
}

#[utoipa::path(
    patch,
    tag = "Menu",
    path = "/menu/{id}",
    params(
        ("id", description = "Unique id of the item to update"),
    ),
    request_body = UpdateMenuItem,
    responses(
        (status = 200, description = "Menu item updated", body = MenuItem),
        (status = 404, description = "No menu item with that id", body = ErrorBody)
    ),
    summary = "Update fields of a menu item"
)]
#[patch("/{id}")]
pub(super) async fn update_menu_item(
    menu_ops: web::Data<MenuOperations>,
    path: web::Path<(i32,)>,
    req_data: web::Json<UpdateMenuItem>,
) -> impl Responder {
    let update_data = req_data.into_inner();
    match menu_ops.update_menu_item(path.into_inner().0, update_data.clone()) {
        Ok(menu_item) => {
            info!(
                "Menu item updated: {}.\nChanges: {:?}",
                menu_item.name, update_data
            );
            HttpResponse::Ok().json(menu_item)
        }
        Err(e) => {
            error!("MENU: update_menu_item(): {}", e);
            repository_error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    tag = "Reports",
    path = "/menu/top-items",
    responses(
        (status = 200, description = "Best-selling items by summed quantity", body = [TopMenuItem])
    ),
    summary = "Top-selling menu items"
)]
#[get("/top-items")]
pub(super) async fn top_menu_items(report_ops: web::Data<ReportOperations>) -> impl Responder {
    match report_ops.top_menu_items() {
        Ok(top) => HttpResponse::Ok().json(top),
        Err(e) => {
            error!("MENU: top_menu_items(): {}", e);
            repository_error_response(&e)
        }
    }
}
