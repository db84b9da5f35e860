#[macro_use]
extern crate log;

pub mod api;
pub mod db;
pub mod enums;
pub mod models;
pub mod test_utils;

use crate::db::{
    establish_connection_pool, run_db_migrations, CustomerOperations, MenuOperations,
    OrderOperations, ReportOperations, RestaurantOperations,
};

#[derive(Clone)]
pub struct AppState {
    pub customer_ops: CustomerOperations,
    pub restaurant_ops: RestaurantOperations,
    pub menu_ops: MenuOperations,
    pub order_ops: OrderOperations,
    pub report_ops: ReportOperations,
}

impl AppState {
    pub fn new(url: &str) -> Self {
        let db = establish_connection_pool(url);
        run_db_migrations(db.clone()).expect("Unable to run migrations");

        AppState {
            customer_ops: CustomerOperations::new(db.clone()),
            restaurant_ops: RestaurantOperations::new(db.clone()),
            menu_ops: MenuOperations::new(db.clone()),
            order_ops: OrderOperations::new(db.clone()),
            report_ops: ReportOperations::new(db),
        }
    }
}
