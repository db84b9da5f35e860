use crate::db::{DbConnection, RepositoryError};
use crate::enums::orders::{OrderItemRequest, OrderWithItems};
use crate::models::menu::MenuItem;
use crate::models::order::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatus};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error;
use log::error;

#[derive(Clone)]
pub struct OrderOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl OrderOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    /// Validates every requested line item against the menu, then persists
    /// the order and its items as one transactional unit. The price reads
    /// are not part of that transaction, so a concurrent price change can
    /// still land between validation and insert.
    pub fn create_order(
        &self,
        order_customer_id: i32,
        order_restaurant_id: i32,
        items: Vec<OrderItemRequest>,
    ) -> Result<Order, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("create_order: failed to acquire DB connection: {}", e);
            e
        })?;

        let mut order_total = 0.0_f64;
        let mut line_items: Vec<OrderItemRequest> = Vec::with_capacity(items.len());

        // Items are checked in request order; the first unknown id rejects
        // the whole order before anything is written.
        for item in items {
            let menu_item = {
                use crate::db::schema::menu_items::dsl::*;
                menu_items
                    .find(item.menu_item_id)
                    .first::<MenuItem>(conn.connection())
                    .optional()
                    .map_err(|e| {
                        error!(
                            "create_order: error loading menu item {}: {}",
                            item.menu_item_id, e
                        );
                        RepositoryError::DatabaseError(e)
                    })?
            };

            let Some(menu_item) = menu_item else {
                return Err(RepositoryError::ValidationError(
                    "Invalid menu item".to_string(),
                ));
            };

            order_total += menu_item.price * f64::from(item.quantity);
            line_items.push(item);
        }

        conn.connection().transaction(|conn| {
            let order: Order = {
                use crate::db::schema::orders::dsl::*;
                diesel::insert_into(orders)
                    .values(&NewOrder {
                        customer_id: order_customer_id,
                        restaurant_id: order_restaurant_id,
                        total_price: order_total,
                        status: OrderStatus::Placed,
                    })
                    .get_result(conn)
                    .map_err(RepositoryError::DatabaseError)?
            };

            let new_order_items: Vec<NewOrderItem> = line_items
                .iter()
                .map(|item| NewOrderItem {
                    order_id: order.id,
                    menu_item_id: item.menu_item_id,
                    quantity: item.quantity,
                })
                .collect();

            if !new_order_items.is_empty() {
                use crate::db::schema::order_items::dsl::*;
                diesel::insert_into(order_items)
                    .values(&new_order_items)
                    .execute(conn)
                    .map_err(RepositoryError::DatabaseError)?;
            }

            Ok(order)
        })
    }

    pub fn get_order_with_items(
        &self,
        search_order_id: i32,
    ) -> Result<Option<OrderWithItems>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_order_with_items: failed to acquire DB connection for order_id {}: {}",
                search_order_id, e
            );
            e
        })?;

        let order = {
            use crate::db::schema::orders::dsl::*;
            orders
                .find(search_order_id)
                .first::<Order>(conn.connection())
                .optional()
                .map_err(|e| {
                    error!(
                        "get_order_with_items: error fetching order {}: {}",
                        search_order_id, e
                    );
                    RepositoryError::DatabaseError(e)
                })?
        };

        let Some(order) = order else {
            return Ok(None);
        };

        let items = {
            use crate::db::schema::order_items::dsl::*;
            order_items
                .filter(order_id.eq(search_order_id))
                .order(id.asc())
                .load::<OrderItem>(conn.connection())
                .map_err(|e| {
                    error!(
                        "get_order_with_items: error loading items for order {}: {}",
                        search_order_id, e
                    );
                    RepositoryError::DatabaseError(e)
                })?
        };

        Ok(Some(OrderWithItems::new(order, items)))
    }

    pub fn update_order_status(
        &self,
        search_order_id: i32,
        new_status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "update_order_status: failed to acquire DB connection for order_id {}: {}",
                search_order_id, e
            );
            e
        })?;

        use crate::db::schema::orders::dsl::*;
        diesel::update(orders.filter(id.eq(search_order_id)))
            .set(status.eq(new_status))
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "update_order_status: error updating order {}: {}",
                    search_order_id, e
                );
                match e {
                    Error::NotFound => {
                        RepositoryError::NotFound(format!("orders: {search_order_id}"))
                    }
                    other => RepositoryError::DatabaseError(other),
                }
            })
    }
}
