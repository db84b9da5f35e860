use crate::db::{DbConnection, RepositoryError};
use crate::enums::reports::{QuantitySum, TopCustomer, TopMenuItem};
use crate::models::customer::Customer;
use diesel::dsl::{count_star, sum};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use log::error;

/// Result rows returned by the top-N reports. Ties beyond the cutoff fall
/// back to store-default ordering, so tie order is non-deterministic.
const REPORT_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct ReportOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl ReportOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    /// Lifetime revenue for one restaurant, every order counted regardless
    /// of status. Zero, never null, when there are no orders.
    pub fn restaurant_revenue(&self, search_restaurant_id: i32) -> Result<f64, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "restaurant_revenue: failed to acquire DB connection for restaurant_id {}: {}",
                search_restaurant_id, e
            );
            e
        })?;

        use crate::db::schema::orders::dsl::*;
        let revenue = orders
            .filter(restaurant_id.eq(search_restaurant_id))
            .select(sum(total_price))
            .first::<Option<f64>>(conn.connection())
            .map_err(|e| {
                error!(
                    "restaurant_revenue: error summing revenue for restaurant_id {}: {}",
                    search_restaurant_id, e
                );
                RepositoryError::DatabaseError(e)
            })?;

        Ok(revenue.unwrap_or(0.0))
    }

    pub fn top_menu_items(&self) -> Result<Vec<TopMenuItem>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("top_menu_items: failed to acquire DB connection: {}", e);
            e
        })?;

        use crate::db::schema::order_items::dsl::*;
        let grouped = order_items
            .group_by(menu_item_id)
            .select((menu_item_id, sum(quantity)))
            .order(sum(quantity).desc())
            .limit(REPORT_LIMIT)
            .load::<(i32, Option<i64>)>(conn.connection())
            .map_err(|e| {
                error!("top_menu_items: error querying item quantities: {}", e);
                RepositoryError::DatabaseError(e)
            })?;

        Ok(grouped
            .into_iter()
            .map(|(item_id, total_quantity)| TopMenuItem {
                menu_item_id: item_id,
                sum: QuantitySum {
                    quantity: total_quantity.unwrap_or(0),
                },
            })
            .collect())
    }

    /// Most frequent customers by order count, enriched with their contact
    /// details. A grouped customer id without a customer row is kept, with
    /// the detail fields null.
    pub fn top_customers(&self) -> Result<Vec<TopCustomer>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("top_customers: failed to acquire DB connection: {}", e);
            e
        })?;

        let grouped = {
            use crate::db::schema::orders::dsl::*;
            orders
                .group_by(customer_id)
                .select((customer_id, count_star()))
                .order(count_star().desc())
                .limit(REPORT_LIMIT)
                .load::<(i32, i64)>(conn.connection())
                .map_err(|e| {
                    error!("top_customers: error grouping orders: {}", e);
                    RepositoryError::DatabaseError(e)
                })?
        };

        let mut top = Vec::with_capacity(grouped.len());
        for (grouped_customer_id, order_count) in grouped {
            let customer = {
                use crate::db::schema::customers::dsl::*;
                customers
                    .find(grouped_customer_id)
                    .first::<Customer>(conn.connection())
                    .optional()
                    .map_err(|e| {
                        error!(
                            "top_customers: error fetching customer {}: {}",
                            grouped_customer_id, e
                        );
                        RepositoryError::DatabaseError(e)
                    })?
            };

            top.push(match customer {
                Some(customer) => TopCustomer {
                    id: Some(customer.id),
                    name: Some(customer.name),
                    email: Some(customer.email),
                    total_orders: order_count,
                },
                None => TopCustomer {
                    id: None,
                    name: None,
                    email: None,
                    total_orders: order_count,
                },
            });
        }

        Ok(top)
    }
}
